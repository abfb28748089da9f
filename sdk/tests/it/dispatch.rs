//! Shared dispatch behavior: keys, headers, errors and key normalization.

use postgrid_sdk::client::config::CLIENT_VERSION;
use postgrid_sdk::client::http::{API_KEY_HEADER, CLIENT_VERSION_HEADER};
use postgrid_sdk::{
    ApiKeys, ClientConfig, ClientError, Envelope, KeyKind, PostGrid, WebhookRegistration,
};
use serde_json::json;
use tokio_test::assert_err;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_with, contact_json, setup, MAIL_KEY};

#[tokio::test]
async fn test_sends_key_and_version_headers() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/contacts/contact_1"))
        .and(header(API_KEY_HEADER, MAIL_KEY))
        .and(header(CLIENT_VERSION_HEADER, CLIENT_VERSION))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json("contact_1")))
        .expect(1)
        .mount(&server)
        .await;

    let contact = client.contacts().get("contact_1").await.expect("get contact");
    assert_eq!(contact.id, "contact_1");
}

#[tokio::test]
async fn test_missing_mail_key_skips_network() {
    let (server, _) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with(&server, ApiKeys::new().with_addr("addr_only"));
    let err = assert_err!(client.contacts().list(None, None).await);
    assert!(matches!(err, ClientError::MissingApiKey(KeyKind::Mail)));

    let envelope = Envelope::<()>::from(Err(err));
    assert!(!envelope.success);
    let error = envelope.error.expect("error");
    assert_eq!(error.kind, "client");
    assert_eq!(error.message, "Missing PostGrid Print-Mail API Key!");
}

#[tokio::test]
async fn test_missing_addr_key_skips_network() {
    let (server, _) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with(&server, ApiKeys::from(MAIL_KEY));
    let err = assert_err!(client.addresses().lookup_info().await);
    assert_eq!(
        err.to_postgrid_error().message,
        "Missing PostGrid Address API Key!"
    );
}

#[tokio::test]
async fn test_api_error_payload_surfaced() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/contacts/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"type": "contact_not_found_error", "message": "Could not find contact."}
        })))
        .mount(&server)
        .await;

    let err = assert_err!(client.contacts().get("nope").await);
    match &err {
        ClientError::Api { status, error } => {
            assert_eq!(*status, 404);
            assert_eq!(error.kind, "contact_not_found_error");
            assert_eq!(error.message, "Could not find contact.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_non_json_error_body() {
    let (server, client) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = assert_err!(client.templates().get("template_1").await);
    let error = err.to_postgrid_error();
    assert_eq!(error.kind, "http_502");
    assert_eq!(error.message, "Bad Gateway");
}

#[tokio::test]
async fn test_error_payload_on_success_status() {
    let (server, client) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"type": "validation_error", "message": "bad html"}
        })))
        .mount(&server)
        .await;

    let err = assert_err!(client.templates().get("template_1").await);
    assert!(matches!(err, ClientError::Api { status: 200, .. }));
}

#[tokio::test]
async fn test_non_json_success_body() {
    let (server, client) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = assert_err!(client.contacts().get("contact_1").await);
    assert!(matches!(err, ClientError::Deserialization(_)));
}

#[tokio::test]
async fn test_snake_case_response_normalized() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "limit": 40,
            "skip": 0,
            "total_count": 1,
            "data": [{
                "id": "contact_1",
                "address_line1": "2929 EAGLEDALE DR",
                "province_or_state": "IN",
                "first_name": "Jim",
                "metadata": {"internal_ref": "abc"},
            }],
        })))
        .mount(&server)
        .await;

    let list = client.contacts().list(None, None).await.expect("list contacts");
    assert_eq!(list.total_count, 1);
    let contact = &list.data[0];
    assert_eq!(contact.address_line1.as_deref(), Some("2929 EAGLEDALE DR"));
    assert_eq!(contact.first_name.as_deref(), Some("Jim"));
    assert_eq!(contact.metadata, Some(json!({"internalRef": "abc"})));
}

#[tokio::test]
async fn test_connect_registers_webhook() {
    let (server, _) = setup().await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/webhooks"))
        .and(body_json(json!({
            "url": "https://hooks.example.com/postgrid",
            "secret": "shh",
            "enabledEvents": ["letter.created", "letter.updated"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "webhook_1",
            "object": "webhook",
            "url": "https://hooks.example.com/postgrid",
            "enabledEvents": ["letter.created", "letter.updated"],
            "enabled": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(MAIL_KEY)
        .with_base_url(server.uri())
        .with_webhook(
            WebhookRegistration::new("https://hooks.example.com/postgrid")
                .with_secret("shh")
                .with_events(["letter.created", "letter.updated"]),
        );
    PostGrid::connect(config).await.expect("connect");
}

#[tokio::test]
async fn test_connect_surfaces_webhook_failure() {
    let (server, _) = setup().await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/webhooks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"type": "invalid_url_error", "message": "url must be https"}
        })))
        .mount(&server)
        .await;

    let config = ClientConfig::new(MAIL_KEY)
        .with_base_url(server.uri())
        .with_webhook(WebhookRegistration::new("http://insecure.example.com"));
    let err = assert_err!(PostGrid::connect(config).await);
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_connect_without_webhook_makes_no_calls() {
    let (server, _) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::new(MAIL_KEY).with_base_url(server.uri());
    let client = PostGrid::connect(config).await.expect("connect");
    assert!(client.config().webhook.is_none());
}
