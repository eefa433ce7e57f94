//! Integration tests for session behavior.
//!
//! These tests verify the fail-fast rule for missing public tokens, the
//! purely local sign-out, and token persistence across client instances
//! through a file-backed store.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use soanch_api::{
    ApiBaseUrl, ApiConfig, AuthRequest, FileTokenStore, HttpError, SessionError, ShopApiClient,
    ShopId, TokenKind,
};

fn create_test_config(server: &MockServer) -> ApiConfig {
    ApiConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
}

#[tokio::test]
async fn test_missing_public_token_fails_without_network_call() {
    let mock_server = MockServer::start().await;

    let client = ShopApiClient::in_memory(&create_test_config(&mock_server));
    let shop_id = ShopId::new("shop-1").unwrap();

    let result = client.create_user(&shop_id, "secret", "secret").await;
    assert!(matches!(
        result,
        Err(HttpError::Session(SessionError::MissingPublicToken))
    ));

    // The failure happened before any request left the client
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_public_token_error_is_actionable() {
    let mock_server = MockServer::start().await;
    let client = ShopApiClient::in_memory(&create_test_config(&mock_server));

    let error = client
        .reset_password("user-1", "old", "new", "new")
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "No public access token available. Please authenticate first."
    );
}

#[tokio::test]
async fn test_logout_is_idempotent_and_local() {
    let mock_server = MockServer::start().await;
    let client = ShopApiClient::in_memory(&create_test_config(&mock_server));

    // Signing out twice without ever signing in succeeds
    client.logout().unwrap();
    client.logout().unwrap();

    // Sign-out never talks to the server
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_backed_tokens_survive_client_restart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/shops/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "oauthToken": "persisted-private",
            "publicAccessToken": "persisted-public",
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/shops"))
        .and(header("Authorization", "Bearer persisted-private"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("tokens.json");
    let config = create_test_config(&mock_server);

    // First client signs in and persists its tokens
    {
        let store = Arc::new(FileTokenStore::new(&token_path));
        let client = ShopApiClient::new(&config, store);
        client
            .authenticate(AuthRequest::password("owner@example.com", "secret123"))
            .await
            .unwrap();
    }

    // A fresh client over the same file picks the tokens up without
    // re-authenticating
    let store = Arc::new(FileTokenStore::new(&token_path));
    let client = ShopApiClient::new(&config, store);

    let shops = client.get_all_shops().await.unwrap();
    assert!(shops.is_empty());
    assert_eq!(
        client.public_access_token().unwrap(),
        "persisted-public"
    );
}

#[tokio::test]
async fn test_logout_removes_persisted_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/shops/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "oauthToken": "persisted-private",
            "publicAccessToken": "persisted-public",
        })))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let token_path = dir.path().join("tokens.json");
    let config = create_test_config(&mock_server);

    {
        let store = Arc::new(FileTokenStore::new(&token_path));
        let client = ShopApiClient::new(&config, store);
        client
            .authenticate(AuthRequest::password("owner@example.com", "secret123"))
            .await
            .unwrap();
        client.logout().unwrap();
    }

    // Sign-out reached the file, not just the in-memory cache
    let store = Arc::new(FileTokenStore::new(&token_path));
    let client = ShopApiClient::new(&config, store);
    assert!(client.session().get(TokenKind::Private).unwrap().is_none());
    assert!(matches!(
        client.public_access_token(),
        Err(SessionError::MissingPublicToken)
    ));
}
