/// Integration tests for the Chat Completions client
///
/// Test coverage:
/// - Request shape (single user message, pass-through options)
/// - Credential precedence and eager configuration errors
/// - Empty-content leniency and reserved option keys
/// - Error classification (HTTP status, decode failures)
mod common;

use mockito::{Matcher, Server};
use notebook_link::{CompletionClient, CompletionRequest, IntegrationError, SecretStore};
use reqwest::StatusCode;
use serde_json::json;

fn completion_body(content: serde_json::Value) -> String {
    json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12}
    })
    .to_string()
}

#[tokio::test]
async fn test_complete_success_with_mock() {
    common::setup_test_logging();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-explicit")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "Say hello"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(json!("Hello!")))
        .create_async()
        .await;

    let client = CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty())
        .expect("Failed to create client");

    let text = client
        .complete(CompletionRequest::new("Say hello").api_key("sk-explicit"))
        .await
        .expect("completion failed");

    assert_eq!(text, "Hello!");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_extra_options_are_forwarded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Json(json!({
            "model": "gpt-4o",
            "messages": [{"role": "user", "content": "fn main"}],
            "temperature": 0.2,
            "max_tokens": 128,
            "stop": ["\n\n"]
        })))
        .with_status(200)
        .with_body(completion_body(json!("{}")))
        .create_async()
        .await;

    let secrets = SecretStore::empty();
    secrets.set_secrets(Some("sk-store"), None);
    let client = CompletionClient::new(&common::openai_config(&server.url()), secrets).unwrap();

    let request = CompletionRequest::new("fn main")
        .model("gpt-4o")
        .option("temperature", 0.2)
        .option("max_tokens", 128)
        .option("stop", json!(["\n\n"]));
    client.complete(request).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_store_key_used_when_no_argument() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-from-env")
        .with_status(200)
        .with_body(completion_body(json!("ok")))
        .create_async()
        .await;

    let secrets = temp_env::with_var("OPENAI_API_KEY", Some("sk-from-env"), SecretStore::from_env);
    let client = CompletionClient::new(&common::openai_config(&server.url()), secrets).unwrap();

    assert_eq!(client.complete(client.request("ping")).await.unwrap(), "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client =
        CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty()).unwrap();

    let err = client
        .complete(CompletionRequest::new("hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, IntegrationError::Configuration(_)), "{err:?}");
    assert!(err.to_string().contains("OPENAI_API_KEY"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_content_returns_empty_string() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(completion_body(serde_json::Value::Null))
        .create_async()
        .await;

    let client =
        CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty()).unwrap();

    let text = client
        .complete(CompletionRequest::new("refuse this").api_key("sk-test"))
        .await
        .expect("null content is not an error");
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_rejected_options_surface_as_upstream_error() {
    let mut server = Server::new_async().await;
    let body = r#"{"error":{"message":"Unrecognized request argument supplied: bogus","type":"invalid_request_error"}}"#;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(400)
        .with_body(body)
        .expect(1)
        .create_async()
        .await;

    let client =
        CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty()).unwrap();

    let err = client
        .complete(
            CompletionRequest::new("hi")
                .api_key("sk-test")
                .option("bogus", true),
        )
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    match err {
        IntegrationError::Upstream { body: returned, .. } => assert_eq!(returned, body),
        other => panic!("Expected Upstream, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_body("overloaded")
        .expect(1)
        .create_async()
        .await;

    let client =
        CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty()).unwrap();

    let err = client
        .complete(CompletionRequest::new("hi").api_key("sk-test"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_garbage_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("<html>proxy error</html>")
        .create_async()
        .await;

    let client =
        CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty()).unwrap();

    let err = client
        .complete(CompletionRequest::new("hi").api_key("sk-test"))
        .await
        .unwrap_err();
    assert!(matches!(err, IntegrationError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_response_without_choices_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({"id": "chatcmpl-empty", "choices": []}).to_string())
        .create_async()
        .await;

    let client =
        CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty()).unwrap();

    let err = client
        .complete(CompletionRequest::new("hi").api_key("sk-test"))
        .await
        .unwrap_err();
    assert!(matches!(err, IntegrationError::Decode(_)), "{err:?}");
    assert!(err.to_string().contains("no choices"));
}

#[tokio::test]
async fn test_conflicting_options_are_rejected_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client =
        CompletionClient::new(&common::openai_config(&server.url()), SecretStore::empty()).unwrap();

    let err = client
        .complete(
            CompletionRequest::new("hi")
                .api_key("sk-test")
                .option("model", "other-model"),
        )
        .await
        .unwrap_err();
    assert!(err.is_configuration(), "{err:?}");
    assert!(err.to_string().contains("`model`"));

    let err = client
        .complete(
            CompletionRequest::new("hi")
                .api_key("sk-test")
                .option("messages", json!([])),
        )
        .await
        .unwrap_err();
    assert!(err.is_configuration(), "{err:?}");
    assert!(err.to_string().contains("`messages`"));

    mock.assert_async().await;
}
