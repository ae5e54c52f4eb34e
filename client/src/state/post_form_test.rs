use std::cell::Cell;

use futures::executor::block_on;
use posts::{ApiConfig, PostTransport, RawResponse};

use super::*;

// =============================================================
// Helpers
// =============================================================

fn filled() -> PostFormState {
    let mut state = PostFormState::default();
    state.set_title("Hello".to_owned());
    state.set_content("First post".to_owned());
    state.select_category("c1".to_owned());
    state
}

struct CannedTransport {
    status: u16,
    body: &'static str,
    calls: Cell<usize>,
}

impl CannedTransport {
    fn new(status: u16, body: &'static str) -> Self {
        Self { status, body, calls: Cell::new(0) }
    }
}

impl PostTransport for CannedTransport {
    async fn post_json(&self, _url: &str, _token: &str, _body: &CreatePostRequest) -> Result<RawResponse, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        Ok(RawResponse { status: self.status, body: self.body.to_owned() })
    }
}

/// Drive one submit press the way the page does.
fn press_submit(state: &mut PostFormState, transport: &CannedTransport) -> Option<String> {
    match state.begin_submit() {
        SubmitStep::Send(request) => {
            let outcome = block_on(posts::submit_request(transport, &ApiConfig::default(), "tok", &request));
            state.complete(outcome)
        }
        SubmitStep::Busy | SubmitStep::Invalid => None,
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = PostFormState::default();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.submit_label(), "Create Post");
}

#[test]
fn field_setters_update_draft() {
    let state = filled();
    assert_eq!(state.draft.title, "Hello");
    assert_eq!(state.draft.content, "First post");
    assert_eq!(state.draft.category_id, "c1");
}

#[test]
fn begin_submit_with_missing_fields_sets_error_without_loading() {
    let mut state = filled();
    state.select_category(String::new());
    assert_eq!(state.begin_submit(), SubmitStep::Invalid);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Please fill in all fields"));
}

#[test]
fn begin_submit_with_full_draft_enters_loading() {
    let mut state = filled();
    state.error = Some("old".to_owned());
    let step = state.begin_submit();
    assert_eq!(
        step,
        SubmitStep::Send(CreatePostRequest {
            title: "Hello".to_owned(),
            content: "First post".to_owned(),
            category_id: "c1".to_owned(),
        })
    );
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.submit_label(), "Creating Post...");
}

#[test]
fn second_submit_while_loading_is_refused() {
    let mut state = filled();
    assert!(matches!(state.begin_submit(), SubmitStep::Send(_)));
    assert_eq!(state.begin_submit(), SubmitStep::Busy);
    assert!(state.loading);
}

#[test]
fn complete_success_returns_detail_path_and_resets_draft() {
    let mut state = filled();
    let _ = state.begin_submit();
    let target = state.complete(Ok(PostId("abc123".to_owned())));
    assert_eq!(target.as_deref(), Some("/post/abc123"));
    assert_eq!(state, PostFormState::default());
}

#[test]
fn complete_failure_keeps_draft_and_sets_message() {
    let mut state = filled();
    let _ = state.begin_submit();
    let target = state.complete(Err(SubmitError::Request {
        status: 400,
        message: Some("Title already exists".to_owned()),
    }));
    assert_eq!(target, None);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Title already exists"));
    assert_eq!(state.draft, filled().draft);
}

// =============================================================
// Full submit cycle against a canned transport
// =============================================================

#[test]
fn invalid_submit_issues_no_request() {
    let transport = CannedTransport::new(201, r#"{"data":{"_id":"x"}}"#);
    let mut state = PostFormState::default();
    assert_eq!(press_submit(&mut state, &transport), None);
    assert_eq!(transport.calls.get(), 0);
}

#[test]
fn successful_submit_navigates_without_error() {
    let transport = CannedTransport::new(201, r#"{"data":{"_id":"abc123"}}"#);
    let mut state = filled();
    let target = press_submit(&mut state, &transport);
    assert_eq!(target.as_deref(), Some("/post/abc123"));
    assert_eq!(state.error, None);
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn rejected_submit_shows_server_message() {
    let transport = CannedTransport::new(400, r#"{"message":"Title already exists"}"#);
    let mut state = filled();
    assert_eq!(press_submit(&mut state, &transport), None);
    assert_eq!(state.error.as_deref(), Some("Title already exists"));
}

#[test]
fn rejected_submit_without_message_shows_fallback() {
    let transport = CannedTransport::new(500, "{}");
    let mut state = filled();
    assert_eq!(press_submit(&mut state, &transport), None);
    assert_eq!(state.error.as_deref(), Some("Failed to create post"));
}

#[test]
fn retry_after_failure_resends_preserved_draft() {
    let failing = CannedTransport::new(503, "{}");
    let mut state = filled();
    assert_eq!(press_submit(&mut state, &failing), None);

    let ok = CannedTransport::new(201, r#"{"data":{"_id":"p2"}}"#);
    assert_eq!(press_submit(&mut state, &ok).as_deref(), Some("/post/p2"));
    assert_eq!(ok.calls.get(), 1);
}
