//! Submission error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable: the form keeps the draft and the user may
//! edit and retry. [`SubmitError::user_message`] is the only text ever shown.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the server gives no usable explanation.
pub const FALLBACK_MESSAGE: &str = "Failed to create post";

/// Client-side precondition failure; no request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title or content is blank, or no category is selected.
    #[error("Please fill in all fields")]
    MissingFields,
}

/// Error returned by [`crate::submit_draft`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The draft failed required-field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The server answered with a non-success status.
    #[error("create post failed with status {status}")]
    Request {
        status: u16,
        /// Server-supplied `message`, if the body carried a non-empty one.
        message: Option<String>,
    },
    /// The request never completed or the response could not be decoded.
    #[error("create post transport failure: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text to display inline on the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Request { message: Some(message), .. } => message.clone(),
            Self::Request { message: None, .. } | Self::Transport(_) => FALLBACK_MESSAGE.to_owned(),
        }
    }
}
