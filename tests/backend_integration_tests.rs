use bookchat::api::{BackendError, ChatBackend, HttpChatBackend, MessageKind};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn backend_for(server: &MockServer) -> HttpChatBackend {
    HttpChatBackend::new(server.uri())
}

// ============================================================================
// Message Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_send_message_plain_text_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .and(body_json(json!({"message": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "Hi! Looking for a book?"
        })))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let response = backend.send_message("hello").await.unwrap();

    assert_eq!(response.text, "Hi! Looking for a book?");
    // type omitted means plain text
    assert_eq!(response.kind, MessageKind::Plain);
    assert!(response.books.is_empty());
    assert!(response.suggestions.is_empty());
}

#[tokio::test]
async fn test_send_message_book_list_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "Here are some sci-fi picks:",
            "type": "book_list",
            "books": [
                {"title": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi", "rating": 4.5},
                {"title": "Foundation", "author": "Isaac Asimov"}
            ],
            "suggestions": ["More sci-fi", "Something shorter"]
        })))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let response = backend.send_message("recommend sci-fi").await.unwrap();

    assert_eq!(response.kind, MessageKind::BookList);
    assert_eq!(response.books.len(), 2);
    assert_eq!(response.books[0].title, "Dune");
    assert_eq!(response.books[1].genre, None);
    assert_eq!(
        response.suggestions,
        vec!["More sci-fi", "Something shorter"]
    );
}

#[tokio::test]
async fn test_send_message_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let result = backend.send_message("hello").await;

    assert!(matches!(result, Err(BackendError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_send_message_malformed_body() {
    let mock_server = MockServer::start().await;

    // Missing the required "text" field
    Mock::given(method("POST"))
        .and(path("/api/chatbot/message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"books": []})))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let result = backend.send_message("hello").await;

    assert!(matches!(result, Err(BackendError::Parse(_))));
}

#[tokio::test]
async fn test_send_message_network_failure() {
    // Port reserved then released: nothing is listening there.
    // A builder-created server is not pooled, so dropping it actually
    // closes the listener (pooled servers keep listening after drop).
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let backend = HttpChatBackend::new(uri);
    let result = backend.send_message("hello").await;

    assert!(matches!(result, Err(BackendError::Network(_))));
}

// ============================================================================
// Suggestions Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_suggestions_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chatbot/suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": ["Recommend a mystery", "What's popular?", "Surprise me"]
        })))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let suggestions = backend.fetch_suggestions().await.unwrap();

    assert_eq!(
        suggestions,
        vec!["Recommend a mystery", "What's popular?", "Surprise me"]
    );
}

#[tokio::test]
async fn test_fetch_suggestions_missing_field_defaults_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chatbot/suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let suggestions = backend.fetch_suggestions().await.unwrap();

    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_fetch_suggestions_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chatbot/suggestions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let result = backend.fetch_suggestions().await;

    assert!(matches!(result, Err(BackendError::Api { status: 503, .. })));
}
