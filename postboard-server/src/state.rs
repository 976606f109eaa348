//! Application state shared across handlers

use std::sync::Arc;

use postboard_core::PostStore;
use tokio::sync::RwLock;

/// Shared application state.
///
/// The store is single-writer; the lock serializes mutations so each one
/// runs to completion before the next starts, while reads may overlap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: RwLock<PostStore>,
}

impl AppState {
    pub fn new(store: PostStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
            }),
        }
    }

    pub fn store(&self) -> &RwLock<PostStore> {
        &self.inner.store
    }
}

impl Default for AppState {
    /// State holding the seeded startup store
    fn default() -> Self {
        Self::new(PostStore::seeded())
    }
}
