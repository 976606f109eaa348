//! postboard-core: in-memory post store
//!
//! Owns the ordered post list and the id counter, and implements the
//! list, sorted list, create, update, delete, and search operations the
//! HTTP layer exposes.

pub mod error;
pub mod model;
pub mod query;
pub mod store;

pub use error::{InvalidParameter, Result, StoreError};
pub use model::{Post, PostDraft, PostPatch};
pub use query::{SearchQuery, SortDirection, SortField, SortSpec};
pub use store::PostStore;
