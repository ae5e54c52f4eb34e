//! REST API helpers for communicating with the forum backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): the transport reports a transport error
//! since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `posts::SubmitError` so the form can show a
//! message instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use posts::{ApiConfig, CreatePostRequest, PostId, PostTransport, RawResponse, SubmitError};

/// Backend location baked in at build time from `FORUMHUB_API_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_value(option_env!("FORUMHUB_API_URL"))
}

#[cfg(any(test, feature = "csr"))]
fn send_failed_message(reason: &str) -> String {
    format!("create post request failed: {reason}")
}

#[cfg(any(test, feature = "csr"))]
fn read_failed_message(status: u16, reason: &str) -> String {
    format!("create post response unreadable (status {status}): {reason}")
}

/// `gloo-net` implementation of [`PostTransport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl PostTransport for BrowserTransport {
    async fn post_json(&self, url: &str, token: &str, body: &CreatePostRequest) -> Result<RawResponse, SubmitError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Authorization", &posts::bearer_header(token))
                .json(body)
                .map_err(|e| SubmitError::Transport(send_failed_message(&e.to_string())))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(send_failed_message(&e.to_string())))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| SubmitError::Transport(read_failed_message(status, &e.to_string())))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, token, body);
            Err(SubmitError::Transport("not available outside the browser".to_owned()))
        }
    }
}

/// Create a post via `POST {FORUMHUB_API_URL}/posts`.
///
/// # Errors
///
/// Returns the [`SubmitError`] produced by the shared submission flow.
pub async fn create_post(token: &str, request: &CreatePostRequest) -> Result<PostId, SubmitError> {
    posts::submit_request(&BrowserTransport, &api_config(), token, request).await
}
