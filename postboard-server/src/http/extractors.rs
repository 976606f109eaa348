//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Post id from the path.
///
/// Anything that is not a non-negative integer can never name a post, so it
/// is rejected as not found rather than as a malformed request.
pub struct PostId(pub u64);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound { id: None })?;

        let id = raw
            .parse::<u64>()
            .map_err(|_| ApiError::NotFound { id: None })?;

        Ok(Self(id))
    }
}

/// Query-string pairs in request order.
///
/// A repeated key is not an error: [`QueryParams::first`] returns the first
/// occurrence, so `?title=a&title=b` filters on `a`.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value supplied for `key`, if any
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Owned copy of [`QueryParams::first`]
    pub fn first_owned(&self, key: &str) -> Option<String> {
        self.first(key).map(str::to_owned)
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|e| {
            ApiError::BadRequest {
                message: e.body_text(),
            }
        })?;
        Ok(Self(pairs))
    }
}

/// Lenient JSON body: an empty body deserializes as `T::default()`, so a
/// bare POST reports its missing fields instead of failing to parse.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}
