//! Integration tests for the chat proxy client, backed by a local mock server.

use std::sync::{Arc, Mutex};

use aurum_core::{ChatClient, ChatMessage, Error};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

/// Request bodies observed by the mock server, in arrival order.
type Recorded = Arc<Mutex<Vec<Value>>>;

async fn chat_handler(
    State((recorded, reply)): State<(Recorded, Value)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    recorded.lock().unwrap().push(body);
    Json(reply)
}

/// Serve a fixed chat reply on an ephemeral port, recording request bodies.
async fn spawn_chat_server(reply: Value) -> (String, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/ai-chat", post(chat_handler))
        .with_state((recorded.clone(), reply));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/ai-chat"), recorded)
}

#[tokio::test]
async fn returns_first_choice_content() {
    let reply = json!({"choices": [{"message": {"content": "X"}}]});
    let (url, recorded) = spawn_chat_server(reply).await;

    let messages = vec![
        ChatMessage::system("be brief"),
        ChatMessage::user("what moves the gold price?"),
        ChatMessage::assistant("mostly real yields and the dollar"),
        ChatMessage::user("say that in one word"),
    ];
    let answer = ChatClient::new(&url).chat(&messages).await.unwrap();
    assert_eq!(answer, "X");

    // Exactly one POST, with the history forwarded verbatim and in order.
    let requests = recorded.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0]["messages"],
        serde_json::to_value(&messages).unwrap()
    );
}

#[tokio::test]
async fn surfaces_server_error_message() {
    let (url, _) = spawn_chat_server(json!({"error": "rate limited"})).await;

    let err = ChatClient::new(&url)
        .chat(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    match err {
        Error::Api(message) => assert_eq!(message, "rate limited"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_error_field_is_not_an_error() {
    let reply = json!({"error": "", "choices": [{"message": {"content": "ok"}}]});
    let (url, _) = spawn_chat_server(reply).await;

    let answer = ChatClient::new(&url)
        .chat(&[ChatMessage::user("hi")])
        .await
        .unwrap();
    assert_eq!(answer, "ok");
}

#[tokio::test]
async fn missing_choices_is_a_shape_error() {
    let (url, _) = spawn_chat_server(json!({"id": "cmpl-1"})).await;

    let err = ChatClient::new(&url)
        .chat(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Shape(_)));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let app = Router::new().route("/api/ai-chat", post(|| async { "<html>busy</html>" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let err = ChatClient::new(format!("http://{addr}/api/ai-chat"))
        .chat(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind and immediately drop a listener to get a port nobody serves.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ChatClient::new(format!("http://{addr}/api/ai-chat"))
        .chat(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
