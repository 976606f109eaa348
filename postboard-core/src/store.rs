//! The post store: an ordered list of posts plus a monotonic id counter.
//!
//! Queries never reorder the underlying list; sorted and filtered views are
//! fresh vectors. Mutations either complete fully or return an error with
//! the store untouched.

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::model::{Post, PostDraft, PostPatch};
use crate::query::{SearchQuery, SortSpec};

/// Posts present at startup
const SEED_POSTS: [(&str, &str); 2] = [
    ("First post", "This is the first post."),
    ("Second post", "This is the second post."),
];

/// In-memory post store.
///
/// Single-writer: callers that share a store across tasks must serialize
/// access themselves (the HTTP layer wraps it in an `RwLock`).
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
    next_id: u64,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl PostStore {
    /// Empty store whose first post gets id 1.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Store holding the two startup posts (ids 1 and 2); the next id is 3.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (title, content) in SEED_POSTS {
            store.insert(title.to_owned(), content.to_owned());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Id the next created post will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// All posts in insertion order.
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    /// All posts, optionally ordered by `field` in `direction`.
    ///
    /// `field` must be `title` or `content`; `direction` must be `asc` or
    /// `desc` and defaults to `asc`. Both are validated before anything is
    /// copied, and with no field the result is the insertion order.
    pub fn list_sorted(&self, field: Option<&str>, direction: Option<&str>) -> Result<Vec<Post>> {
        let spec = SortSpec::parse(field, direction)?;
        let mut posts = self.posts.clone();
        if let Some(spec) = spec {
            spec.sort(&mut posts);
        }
        Ok(posts)
    }

    /// Append a new post with the next id.
    pub fn create(&mut self, draft: PostDraft) -> Result<Post> {
        let (title, content) = draft.into_parts()?;
        let post = self.insert(title, content);
        debug!(id = post.id, "created post");
        Ok(post)
    }

    /// Apply `patch` to the post with `id` and return the full result.
    pub fn update(&mut self, id: u64, patch: PostPatch) -> Result<Post> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        if patch.is_empty() {
            debug!(id, "empty patch, post unchanged");
        } else {
            post.apply(patch);
            debug!(id, "updated post");
        }
        Ok(post.clone())
    }

    /// Remove the post with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: u64) -> Result<Post> {
        let index = self
            .posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let removed = self.posts.remove(index);
        debug!(id, remaining = self.posts.len(), "deleted post");
        Ok(removed)
    }

    /// Posts matching every non-empty filter in `query`, in store order.
    pub fn search(&self, query: &SearchQuery) -> Vec<Post> {
        let matcher = query.matcher();
        self.posts
            .iter()
            .filter(|post| matcher.matches(post))
            .cloned()
            .collect()
    }

    fn insert(&mut self, title: String, content: String) -> Post {
        let post = Post {
            id: self.next_id,
            title,
            content,
        };
        self.posts.push(post.clone());
        self.next_id += 1;
        post
    }
}
