//! Query parameters: sort field, sort direction, and search filters

use std::cmp::Reverse;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, StoreError};
use crate::model::Post;

/// Field a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }

    fn key<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            Self::Title => &post.title,
            Self::Content => &post.content,
        }
    }
}

impl FromStr for SortField {
    type Err = StoreError;

    /// Exact match only; `Title` or an empty string are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            other => Err(StoreError::sort_field(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(StoreError::direction(other)),
        }
    }
}

/// A validated sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Validate raw `sort`/`direction` parameters.
    ///
    /// The direction is checked even when no field is given, so
    /// `direction=up` fails on its own. `Ok(None)` means "no sorting".
    pub fn parse(field: Option<&str>, direction: Option<&str>) -> Result<Option<Self>> {
        let field = field.map(SortField::from_str).transpose()?;
        let direction = direction
            .map(SortDirection::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(field.map(|field| Self { field, direction }))
    }

    /// Stable, case-insensitive ordering of `posts` in place.
    ///
    /// Descending compares reversed keys instead of reversing the ascending
    /// output, so posts with equal keys keep their store order either way.
    pub fn sort(&self, posts: &mut [Post]) {
        let field = self.field;
        match self.direction {
            SortDirection::Asc => posts.sort_by_cached_key(|post| field.key(post).to_lowercase()),
            SortDirection::Desc => {
                posts.sort_by_cached_key(|post| Reverse(field.key(post).to_lowercase()))
            }
        }
    }
}

/// Substring filters for search. Absent or empty filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl SearchQuery {
    pub fn title(query: impl Into<String>) -> Self {
        Self {
            title: Some(query.into()),
            content: None,
        }
    }

    pub fn content(query: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(query.into()),
        }
    }

    /// Lowercased, non-empty needles; computed once per search.
    pub(crate) fn matcher(&self) -> Matcher {
        Matcher {
            title: active(self.title.as_deref()),
            content: active(self.content.as_deref()),
        }
    }
}

fn active(query: Option<&str>) -> Option<String> {
    query.filter(|q| !q.is_empty()).map(str::to_lowercase)
}

pub(crate) struct Matcher {
    title: Option<String>,
    content: Option<String>,
}

impl Matcher {
    pub(crate) fn matches(&self, post: &Post) -> bool {
        contains(&post.title, self.title.as_deref()) && contains(&post.content, self.content.as_deref())
    }
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}
