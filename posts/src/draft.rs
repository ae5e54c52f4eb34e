//! Locally held, not-yet-submitted post data.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::error::ValidationError;
use crate::wire::CreatePostRequest;

/// Form contents as typed by the user.
///
/// Fields are kept verbatim; trimming only applies to the required-field
/// check, never to the submitted values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftPost {
    pub title: String,
    pub content: String,
    /// Selected category id; empty means "Select a category".
    pub category_id: String,
}

impl DraftPost {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty() && !self.category_id.is_empty()
    }

    /// Check required fields and produce the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when title or content is
    /// blank or no category is selected.
    pub fn validate(&self) -> Result<CreatePostRequest, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::MissingFields);
        }
        Ok(CreatePostRequest {
            title: self.title.clone(),
            content: self.content.clone(),
            category_id: self.category_id.clone(),
        })
    }
}
