//! `reqwest` implementation of the posts transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use posts::{CreatePostRequest, PostTransport, RawResponse, SubmitError, bearer_header};
use reqwest::header::AUTHORIZATION;

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostTransport for HttpTransport {
    async fn post_json(&self, url: &str, token: &str, body: &CreatePostRequest) -> Result<RawResponse, SubmitError> {
        let resp = self
            .client
            .post(url)
            .header(AUTHORIZATION, bearer_header(token))
            .json(body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
