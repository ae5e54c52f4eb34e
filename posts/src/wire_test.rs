use super::*;

#[test]
fn create_post_request_uses_camel_case_keys() {
    let req = CreatePostRequest {
        title: "Hello".to_owned(),
        content: "World".to_owned(),
        category_id: "c1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).expect("serialize"),
        serde_json::json!({ "title": "Hello", "content": "World", "categoryId": "c1" })
    );
}

#[test]
fn category_reads_mongo_style_id() {
    let cat: Category = serde_json::from_str(r#"{"_id":"c9","name":"General","description":"x"}"#).expect("category");
    assert_eq!(cat, Category { id: "c9".to_owned(), name: "General".to_owned() });
}

#[test]
fn post_detail_path_embeds_id() {
    assert_eq!(post_detail_path(&PostId("abc123".to_owned())), "/post/abc123");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("tok"), "Bearer tok");
}

#[test]
fn interpret_success_reads_data_id() {
    let id = interpret_response(201, r#"{"success":true,"data":{"_id":"abc123","title":"t"}}"#).expect("id");
    assert_eq!(id.as_str(), "abc123");
}

#[test]
fn interpret_failure_carries_server_message() {
    let err = interpret_response(400, r#"{"message":"Title already exists"}"#).expect_err("should fail");
    assert_eq!(err, SubmitError::Request { status: 400, message: Some("Title already exists".to_owned()) });
    assert_eq!(err.user_message(), "Title already exists");
}

#[test]
fn interpret_failure_without_message_falls_back() {
    let err = interpret_response(500, r#"{"success":false}"#).expect_err("should fail");
    assert_eq!(err, SubmitError::Request { status: 500, message: None });
    assert_eq!(err.user_message(), "Failed to create post");
}

#[test]
fn interpret_failure_with_html_body_falls_back() {
    let err = interpret_response(502, "<html>Bad Gateway</html>").expect_err("should fail");
    assert_eq!(err.user_message(), "Failed to create post");
}

#[test]
fn interpret_failure_ignores_blank_message() {
    let err = interpret_response(422, r#"{"message":""}"#).expect_err("should fail");
    assert_eq!(err.user_message(), "Failed to create post");
}

#[test]
fn interpret_success_with_unparsable_body_is_transport_error() {
    let err = interpret_response(200, "not json").expect_err("should fail");
    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(err.user_message(), "Failed to create post");
}

#[test]
fn interpret_success_without_id_is_transport_error() {
    let err = interpret_response(201, r#"{"data":{}}"#).expect_err("should fail");
    assert!(matches!(err, SubmitError::Transport(_)));
}
