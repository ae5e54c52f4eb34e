//! Create-post submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client plugs in a `gloo-net` transport and the CLI a
//! `reqwest` one. Each call to [`submit_draft`] issues at most one request
//! and never retries.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::config::ApiConfig;
use crate::draft::DraftPost;
use crate::error::SubmitError;
use crate::wire::{CreatePostRequest, PostId, interpret_response};

/// Status and undecoded body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Performs the authenticated JSON POST.
///
/// Implementations must send `Content-Type: application/json` and
/// `Authorization: Bearer {token}`. Failures to reach the server or read the
/// body map to [`SubmitError::Transport`].
pub trait PostTransport {
    async fn post_json(&self, url: &str, token: &str, body: &CreatePostRequest) -> Result<RawResponse, SubmitError>;
}

/// Send an already-validated request and interpret the reply.
///
/// # Errors
///
/// Returns [`SubmitError::Request`] or [`SubmitError::Transport`]; see
/// [`interpret_response`].
pub async fn submit_request<T: PostTransport>(
    transport: &T,
    config: &ApiConfig,
    token: &str,
    request: &CreatePostRequest,
) -> Result<PostId, SubmitError> {
    let url = config.posts_url();
    let resp = transport.post_json(&url, token, request).await?;
    interpret_response(resp.status, &resp.body)
}

/// Validate `draft`, then create the post.
///
/// # Errors
///
/// Returns [`SubmitError::Validation`] without touching the transport when
/// required fields are missing, otherwise whatever [`submit_request`]
/// returns.
pub async fn submit_draft<T: PostTransport>(
    transport: &T,
    config: &ApiConfig,
    token: &str,
    draft: &DraftPost,
) -> Result<PostId, SubmitError> {
    let request = draft.validate()?;
    submit_request(transport, config, token, &request).await
}
