use httpmock::prelude::*;
use serde_json::json;
use vendor_client::{ClientError, VendorClient};
use vendor_types::{DomainError, MessageDraft, ThreadId, ThreadStatus};

fn threads_body() -> serde_json::Value {
    json!({
        "threads": [
            { "id": "thr_closed", "status": "closed", "seller_id": "sel_1", "created_at": "2024-05-01T10:00:00Z" },
            { "id": "thr_open", "status": "open", "seller_id": "sel_1", "created_at": "2024-05-02T10:00:00Z" }
        ]
    })
}

#[tokio::test]
async fn test_active_conversation_loads_open_thread_messages() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/vendorapp/support");
            then.status(200).json_body(threads_body());
        })
        .await;

    let messages = server
        .mock_async(|when, then| {
            when.method(GET).path("/vendorapp/support/thr_open/messages");
            then.status(200).json_body(json!({
                "messages": [
                    { "id": "msg_1", "body": "Iniciando chat de soporte", "author_type": "seller", "created_at": "2024-05-02T10:00:00Z" },
                    { "id": "msg_2", "body": "Hola, ¿en qué ayudamos?", "author_type": "admin", "created_at": "2024-05-02T10:05:00Z" }
                ]
            }));
        })
        .await;

    let client = VendorClient::new(server.base_url()).with_token("jwt");
    let conversation = client.active_conversation().await.unwrap().unwrap();

    assert_eq!(conversation.thread.id, ThreadId::new("thr_open"));
    assert_eq!(conversation.thread.status, ThreadStatus::Open);
    assert_eq!(conversation.messages.len(), 2);
    assert!(conversation.messages[0].is_from_seller());
    assert!(!conversation.messages[1].is_from_seller());
    messages.assert_async().await;
}

#[tokio::test]
async fn test_active_conversation_without_threads() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/vendorapp/support");
            then.status(200).json_body(json!({ "threads": [] }));
        })
        .await;

    let client = VendorClient::new(server.base_url());
    assert!(client.active_conversation().await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_thread_posts_first_message() {
    let server = MockServer::start_async().await;

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/vendorapp/support")
                .json_body(json!({ "body": "Iniciando chat de soporte" }));
            then.status(200).json_body(json!({
                "thread": { "id": "thr_new", "status": "open", "seller_id": "sel_1", "created_at": "2024-05-03T09:00:00Z" }
            }));
        })
        .await;

    let client = VendorClient::new(server.base_url()).with_token("jwt");
    let draft = MessageDraft::new("Iniciando chat de soporte").unwrap();
    let thread = client.create_thread(&draft).await.unwrap();

    assert_eq!(thread.id.as_str(), "thr_new");
    assert!(thread.accepts_messages());
    create.assert_async().await;
}

#[tokio::test]
async fn test_reply_sends_to_active_open_thread() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/vendorapp/support");
            then.status(200).json_body(threads_body());
        })
        .await;

    let send = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/vendorapp/support/thr_open/messages")
                .json_body(json!({ "body": "¿Cuándo aprueban mi tienda?" }));
            then.status(200).json_body(json!({ "message": { "id": "msg_3" } }));
        })
        .await;

    let client = VendorClient::new(server.base_url()).with_token("jwt");
    let draft = MessageDraft::new("¿Cuándo aprueban mi tienda?").unwrap();
    let sent_to = client.reply(&draft).await.unwrap();

    assert_eq!(sent_to, Some(ThreadId::new("thr_open")));
    send.assert_async().await;
}

#[tokio::test]
async fn test_reply_refuses_closed_thread() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/vendorapp/support");
            then.status(200).json_body(json!({
                "threads": [
                    { "id": "thr_closed", "status": "closed", "seller_id": "sel_1", "created_at": "2024-05-01T10:00:00Z" }
                ]
            }));
        })
        .await;

    let send = server
        .mock_async(|when, then| {
            when.method(POST).path("/vendorapp/support/thr_closed/messages");
            then.status(200);
        })
        .await;

    let client = VendorClient::new(server.base_url()).with_token("jwt");
    let draft = MessageDraft::new("hola").unwrap();
    let err = client.reply(&draft).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Domain(DomainError::ThreadClosed(id)) if id.as_str() == "thr_closed"
    ));
    assert_eq!(send.hits_async().await, 0);
}
