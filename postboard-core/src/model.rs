//! Post record and the input shapes used to create and patch it

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// A single post. `id` is fixed at creation; `title` and `content` are
/// always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Overwrite only the fields the patch carries.
    pub(crate) fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Input for creating a post. Both fields are required, but absence is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Split into `(title, content)`, or list every missing field name in
    /// `title`, `content` order.
    pub fn into_parts(self) -> Result<(String, String)> {
        match (self.title, self.content) {
            (Some(title), Some(content)) => Ok((title, content)),
            (title, content) => {
                let mut missing = Vec::with_capacity(2);
                if title.is_none() {
                    missing.push("title");
                }
                if content.is_none() {
                    missing.push("content");
                }
                Err(StoreError::missing_fields(missing))
            }
        }
    }
}

/// Partial update. Omitted fields keep their current value; an empty
/// patch is a valid no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
