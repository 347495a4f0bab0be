//! Contract tests for ProfileClient against a wiremock `update-profile.php`.

use std::sync::Arc;

use serde_json::json;
use shopfront_core::{ProfileUpdate, UserId};
use shopfront_gateway::{Gateway, GatewayConfig, MemoryStore};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_gateway(mock_server: &MockServer) -> Gateway {
    let config = GatewayConfig::local_mock(&mock_server.uri(), "test-key").unwrap();
    Gateway::new(config, Arc::new(MemoryStore::new())).unwrap()
}

fn profile(mobile: Option<&str>) -> ProfileUpdate {
    ProfileUpdate {
        user_id: UserId::new("3").unwrap(),
        name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        mobile: mobile.map(str::to_string),
    }
}

async fn mount_response(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/update-profile.php"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn update_profile_posts_json_with_access_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/update-profile.php"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "accesskey": "test-key",
            "user_id": "3",
            "name": "Asha Rao",
            "email": "asha@example.com",
            "mobile": "9876543210"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": false})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = test_gateway(&mock_server);
    let result = gateway.profile().update_profile(&profile(Some("9876543210"))).await;

    assert!(result.success);
    assert_eq!(result.message, "Profile updated successfully");
}

#[tokio::test]
async fn update_profile_empty_ok_body_is_success() {
    let mock_server = MockServer::start().await;
    mount_response(&mock_server, ResponseTemplate::new(200)).await;

    let gateway = test_gateway(&mock_server);
    let result = gateway.profile().update_profile(&profile(None)).await;

    assert!(result.success);
    assert_eq!(result.message, "Profile updated successfully");
}

#[tokio::test]
async fn update_profile_error_true_is_failure() {
    let mock_server = MockServer::start().await;
    mount_response(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({
            "error": true,
            "message": "Email already registered"
        })),
    )
    .await;

    let gateway = test_gateway(&mock_server);
    let result = gateway.profile().update_profile(&profile(None)).await;

    assert!(!result.success);
    assert_eq!(result.message, "Email already registered");
}

#[tokio::test]
async fn update_profile_string_false_is_not_success() {
    let mock_server = MockServer::start().await;
    mount_response(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({"error": "false"})),
    )
    .await;

    let gateway = test_gateway(&mock_server);
    let result = gateway.profile().update_profile(&profile(None)).await;

    assert!(!result.success);
    assert_eq!(result.message, "Failed to update profile");
}

#[tokio::test]
async fn update_profile_server_error_uses_backend_message() {
    let mock_server = MockServer::start().await;
    mount_response(
        &mock_server,
        ResponseTemplate::new(500).set_body_json(json!({"message": "Database unavailable"})),
    )
    .await;

    let gateway = test_gateway(&mock_server);
    let result = gateway.profile().update_profile(&profile(None)).await;

    assert!(!result.success);
    assert_eq!(result.message, "Database unavailable");
}

#[tokio::test]
async fn update_profile_server_error_without_json_uses_default() {
    let mock_server = MockServer::start().await;
    mount_response(
        &mock_server,
        ResponseTemplate::new(502).set_body_string("Bad Gateway"),
    )
    .await;

    let gateway = test_gateway(&mock_server);
    let result = gateway.profile().update_profile(&profile(None)).await;

    assert!(!result.success);
    assert_eq!(result.message, "Failed to update profile");
}

#[tokio::test]
async fn update_profile_unreachable_is_network_error() {
    let config = GatewayConfig::local_mock("http://127.0.0.1:1", "test-key").unwrap();
    let gateway = Gateway::new(config, Arc::new(MemoryStore::new())).unwrap();

    let result = gateway.profile().update_profile(&profile(None)).await;

    assert!(!result.success);
    assert_eq!(result.message, "Network error occurred");
}
