//! Provider tests with HTTP mocking.

use crate::config::RegistrarCredentials;
use crate::error::DdnsError;
use crate::providers::{DnsProvider, PorkbunProvider};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_credentials() -> RegistrarCredentials {
    RegistrarCredentials {
        apikey: "pk1_abc".to_string(),
        secretapikey: "sk1_def".to_string(),
    }
}

fn credentials_body() -> serde_json::Value {
    json!({"apikey": "pk1_abc", "secretapikey": "sk1_def"})
}

#[tokio::test]
async fn test_ping_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ping"))
        .and(body_json(credentials_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "yourIp": "203.0.113.9"
        })))
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    let pong = provider.ping().await.unwrap();

    assert_eq!(pong.status, "SUCCESS");
    assert_eq!(pong.your_ip, "203.0.113.9");
}

#[tokio::test]
async fn test_ping_http_failure_is_connectivity_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    let err = provider.ping().await.unwrap_err();

    assert!(matches!(err, DdnsError::Connectivity(_)));
}

#[tokio::test]
async fn test_records_returns_parsed_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dns/retrieve/example.com"))
        .and(body_json(credentials_body()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "records": [
                {
                    "id": "106926652",
                    "name": "myhost.example.com",
                    "type": "A",
                    "ttl": "600",
                    "content": "203.0.113.5"
                },
                {
                    "id": "106926653",
                    "name": "example.com",
                    "type": "MX",
                    "ttl": "600",
                    "content": "mail.example.com"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    let records = provider.records("example.com").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "myhost.example.com");
    assert_eq!(records[0].record_type, "A");
    assert_eq!(records[1].record_type, "MX");
}

#[tokio::test]
async fn test_records_http_failure_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dns/retrieve/example.com"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    let err = provider.records("example.com").await.unwrap_err();

    match err {
        DdnsError::Api { target, message } => {
            assert_eq!(target, "example.com");
            assert!(message.contains("domain API access"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_record_sends_expected_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dns/editByNameType/example.com/A/myhost"))
        .and(body_json(json!({
            "apikey": "pk1_abc",
            "secretapikey": "sk1_def",
            "content": "203.0.113.9",
            "ttl": "600"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "SUCCESS"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    provider
        .update_record("example.com", "myhost", "203.0.113.9".parse().unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_record_rejected_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dns/editByNameType/example.com/A/myhost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ERROR"})))
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    let err = provider
        .update_record("example.com", "myhost", "203.0.113.9".parse().unwrap())
        .await
        .unwrap_err();

    match err {
        DdnsError::Api { target, .. } => assert_eq!(target, "myhost.example.com"),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_record_http_failure_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dns/editByNameType/example.com/A/myhost"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    let err = provider
        .update_record("example.com", "myhost", "203.0.113.9".parse().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DdnsError::Api { .. }));
}

#[tokio::test]
async fn test_create_record_sends_expected_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dns/create/example.com"))
        .and(body_json(json!({
            "apikey": "pk1_abc",
            "secretapikey": "sk1_def",
            "name": "myhost",
            "type": "A",
            "content": "203.0.113.9",
            "ttl": "600"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "SUCCESS"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    provider
        .create_record("example.com", "myhost", "203.0.113.9".parse().unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_record_failure_echoes_reported_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dns/create/example.com"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"status": "ERROR"})))
        .mount(&mock_server)
        .await;

    let provider = PorkbunProvider::with_base_url(test_credentials(), mock_server.uri());
    let err = provider
        .create_record("example.com", "myhost", "203.0.113.9".parse().unwrap())
        .await
        .unwrap_err();

    match err {
        DdnsError::Api { target, message } => {
            assert_eq!(target, "myhost.example.com");
            assert!(message.contains("ERROR"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}
