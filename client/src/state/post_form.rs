//! Create-post form state and its transitions.
//!
//! DESIGN
//! ======
//! The page keeps one `RwSignal<PostFormState>` and only mutates it through
//! these methods, so the whole `Idle -> Submitting -> {navigate | error}`
//! cycle is testable without a browser.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use posts::{CreatePostRequest, DraftPost, PostId, SubmitError, post_detail_path};

/// Draft contents plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFormState {
    pub draft: DraftPost,
    /// Message shown above the form; `None` hides the alert.
    pub error: Option<String>,
    /// A request is in flight; the submit control is disabled.
    pub loading: bool,
}

/// What the page should do after the user presses submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A request is already in flight; ignore the event.
    Busy,
    /// Validation failed and `error` was set; nothing to send.
    Invalid,
    /// Send this body; `loading` is now set.
    Send(CreatePostRequest),
}

impl PostFormState {
    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_content(&mut self, content: String) {
        self.draft.content = content;
    }

    /// Select a category by id; the empty string clears the selection.
    pub fn select_category(&mut self, category_id: String) {
        self.draft.category_id = category_id;
    }

    /// Handle a submit event.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.loading {
            return SubmitStep::Busy;
        }
        self.error = None;
        match self.draft.validate() {
            Ok(request) => {
                self.loading = true;
                SubmitStep::Send(request)
            }
            Err(e) => {
                self.error = Some(SubmitError::from(e).user_message());
                SubmitStep::Invalid
            }
        }
    }

    /// Apply the outcome of a request started by [`Self::begin_submit`].
    ///
    /// Returns the route to navigate to on success. The draft is reset on
    /// success and preserved on failure so the user can retry.
    pub fn complete(&mut self, outcome: Result<PostId, SubmitError>) -> Option<String> {
        self.loading = false;
        match outcome {
            Ok(id) => {
                self.draft = DraftPost::default();
                self.error = None;
                Some(post_detail_path(&id))
            }
            Err(e) => {
                self.error = Some(e.user_message());
                None
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Creating Post..." } else { "Create Post" }
    }
}
