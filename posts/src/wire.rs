//! JSON wire schema for the backend posts API.
//!
//! DESIGN
//! ======
//! The backend uses Mongo-style `_id` keys and camelCase field names; serde
//! attributes keep the Rust side snake_case.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Body of `POST {base}/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub category_id: String,
}

/// A selectable forum category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Server-assigned identifier of a created post.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    #[serde(rename = "_id")]
    id: PostId,
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    data: CreatedPost,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Route of the detail view for a post.
#[must_use]
pub fn post_detail_path(id: &PostId) -> String {
    format!("/post/{id}")
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Turn a raw HTTP status and body into the created post's id.
///
/// # Errors
///
/// - [`SubmitError::Request`] for a non-2xx status, carrying the body's
///   non-empty `message` when one can be decoded.
/// - [`SubmitError::Transport`] for a 2xx status whose body is not JSON or
///   lacks `data._id`.
pub fn interpret_response(status: u16, body: &str) -> Result<PostId, SubmitError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .message
            .filter(|m| !m.trim().is_empty());
        return Err(SubmitError::Request { status, message });
    }
    serde_json::from_str::<CreatePostResponse>(body)
        .map(|resp| resp.data.id)
        .map_err(|e| SubmitError::Transport(format!("invalid create post response: {e}")))
}
