//! Shared post-submission model for the ForumHub clients.
//!
//! This crate owns the draft model, the create-post wire DTOs and the
//! submission flow used by both `forumhub-client` (browser) and
//! `forumhub-cli`. It performs no I/O itself; callers plug in a
//! [`PostTransport`] that actually issues the HTTP request.

pub mod config;
pub mod draft;
pub mod error;
pub mod submit;
pub mod wire;

pub use config::ApiConfig;
pub use draft::DraftPost;
pub use error::{SubmitError, ValidationError};
pub use submit::{PostTransport, RawResponse, submit_draft, submit_request};
pub use wire::{Category, CreatePostRequest, PostId, bearer_header, interpret_response, post_detail_path};
