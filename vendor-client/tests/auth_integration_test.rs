use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use vendor_client::{ClientError, VendorClient};
use vendor_types::AuthResponse;

#[tokio::test]
async fn test_login_stores_token_for_later_requests() {
    let server = MockServer::start_async().await;

    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/seller/emailpass")
                .header("x-publishable-api-key", "pk_test")
                .json_body(json!({ "email": "ana@example.com", "password": "secret123" }));
            then.status(200).json_body(json!({ "token": "jwt-123" }));
        })
        .await;

    let threads = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/vendorapp/support")
                .header("authorization", "Bearer jwt-123");
            then.status(200).json_body(json!({ "threads": [] }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url()).with_publishable_key("pk_test");
    let resp = client.login("ana@example.com", "secret123").await.unwrap();

    assert_eq!(resp, AuthResponse::Token { token: "jwt-123".into() });
    assert_eq!(client.token(), Some("jwt-123"));

    let listed = client.list_threads().await.unwrap();
    assert!(listed.is_empty());

    login.assert_async().await;
    threads.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_surfaces_api_message() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass");
            then.status(401).json_body(json!({
                "type": "unauthorized",
                "message": "Invalid email or password"
            }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url());
    let err = client.login("ana@example.com", "wrong").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn test_register_identity_redirect_is_an_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass/register");
            then.status(200)
                .json_body(json!({ "location": "https://idp.example.com/authorize" }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url());
    let err = client
        .register_identity("ana@example.com", "secret123", "secret123", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedRedirect(location) if location.contains("idp")));
}

#[tokio::test]
async fn test_sign_up_creates_seller_with_registration_token() {
    let server = MockServer::start_async().await;

    let register = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/seller/emailpass/register")
                .json_body(json!({
                    "email": "ana@example.com",
                    "password": "secret123",
                    "confirmPassword": "secret123"
                }));
            then.status(200).json_body(json!({ "token": "reg-token" }));
        })
        .await;

    let seller = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/vendor/sellers")
                .header("authorization", "Bearer reg-token")
                .json_body(json!({
                    "name": "Tienda Ana",
                    "member": { "name": "Tienda Ana", "email": "ana@example.com" }
                }));
            then.status(201).json_body(json!({ "seller": { "id": "sel_1" } }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url());
    let token = client
        .sign_up("ana@example.com", "secret123", "Tienda Ana")
        .await
        .unwrap();

    assert_eq!(token, "reg-token");
    register.assert_async().await;
    seller.assert_async().await;
}

#[tokio::test]
async fn test_reset_and_update_password() {
    let server = MockServer::start_async().await;

    let reset = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/seller/emailpass/reset-password")
                .json_body(json!({ "identifier": "ana@example.com" }));
            then.status(201);
        })
        .await;

    let update = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/seller/emailpass/update")
                .header("authorization", "Bearer reset-token")
                .json_body(json!({ "password": "newSecret456" }));
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let client = VendorClient::new(server.base_url()).with_token("session-token");
    client.reset_password("ana@example.com").await.unwrap();
    client
        .update_password("reset-token", "newSecret456")
        .await
        .unwrap();

    reset.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_token() {
    let server = MockServer::start_async().await;

    let logout = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/auth/session")
                .header("authorization", "Bearer jwt-123");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url()).with_token("jwt-123");
    client.logout().await.unwrap();

    assert_eq!(client.token(), None);
    logout.assert_async().await;
}

#[tokio::test]
async fn test_error_field_used_when_message_missing() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass");
            then.status(400).json_body(json!({ "error": "bad" }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url());
    let err = client.login("ana@example.com", "secret123").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass");
            then.status(500).body("upstream exploded");
        })
        .await;

    let mut client = VendorClient::new(server.base_url());
    let err = client.login("ana@example.com", "secret123").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_redirect_keeps_no_token() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass");
            then.status(200)
                .json_body(json!({ "location": "https://idp.example.com/authorize" }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url());
    let resp = client.login("ana@example.com", "secret123").await.unwrap();

    assert_eq!(
        resp,
        AuthResponse::Redirect {
            location: "https://idp.example.com/authorize".into()
        }
    );
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn test_sign_up_bare_login_redirect_is_an_error() {
    let server = MockServer::start_async().await;

    let register = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass/register");
            then.status(200).json_body(json!({ "token": "reg-token" }));
        })
        .await;

    let login = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass");
            then.status(200)
                .json_body(json!({ "location": "https://idp.example.com/authorize" }));
        })
        .await;

    let mut client = VendorClient::new(server.base_url());
    let err = client
        .sign_up_bare("ana@example.com", "secret123", "secret123")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedRedirect(location) if location.contains("idp")));
    register.assert_async().await;
    login.assert_async().await;
}

#[tokio::test]
async fn test_slow_backend_hits_timeout() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/seller/emailpass");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({ "token": "jwt-123" }));
        })
        .await;

    let mut client =
        VendorClient::new(server.base_url()).with_timeout(Duration::from_millis(200));
    let err = client.login("ana@example.com", "secret123").await.unwrap_err();

    match err {
        ClientError::Http(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.token(), None);
}
