//! Webhooks.

use postgrid_sdk::WebhookCreate;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{list_json, setup};

fn webhook_json(id: &str, events: &[&str]) -> Value {
    json!({
        "id": id,
        "object": "webhook",
        "url": "https://hooks.example.com/postgrid",
        "enabledEvents": events,
        "enabled": true,
    })
}

#[tokio::test]
async fn test_create_and_update() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/webhooks"))
        .and(body_json(json!({
            "url": "https://hooks.example.com/postgrid",
            "enabledEvents": ["letter.created"],
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(webhook_json("webhook_1", &["letter.created"])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/webhooks/webhook_1"))
        .and(body_json(json!({
            "url": "https://hooks.example.com/postgrid",
            "enabledEvents": ["letter.created", "cheque.created"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(webhook_json(
            "webhook_1",
            &["letter.created", "cheque.created"],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let webhook = client
        .webhooks()
        .create(&WebhookCreate::new(
            "https://hooks.example.com/postgrid",
            ["letter.created"],
        ))
        .await
        .expect("create webhook");
    assert!(webhook.listens_to("letter.created"));
    assert!(!webhook.listens_to("cheque.created"));

    let updated = client
        .webhooks()
        .update(
            &webhook.id,
            &WebhookCreate::new(
                "https://hooks.example.com/postgrid",
                ["letter.created", "cheque.created"],
            ),
        )
        .await
        .expect("update webhook");
    assert!(updated.listens_to("cheque.created"));
}

#[tokio::test]
async fn test_invocations() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/webhooks/webhook_1/invocations"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
            json!({
                "id": "webhook_invocation_1",
                "object": "webhook_invocation",
                "webhook": "webhook_1",
                "type": "letter.created",
                "statusCode": 200,
                "orderID": "letter_1",
            }),
            json!({
                "id": "webhook_invocation_2",
                "object": "webhook_invocation",
                "webhook": "webhook_1",
                "type": "letter.updated",
                "statusCode": 500,
                "orderID": "letter_1",
            }),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let invocations = client
        .webhooks()
        .invocations("webhook_1", Some(10), None)
        .await
        .expect("list invocations");
    assert_eq!(invocations.len(), 2);
    assert_eq!(invocations.data[0].order_id.as_deref(), Some("letter_1"));
    assert_eq!(invocations.data[0].event_type, "letter.created");
    assert!(invocations.data[0].delivered());
    assert!(!invocations.data[1].delivered());
}

#[tokio::test]
async fn test_get_list_delete() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/webhooks/webhook_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(webhook_json("webhook_1", &["letter.created"])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![webhook_json(
            "webhook_1",
            &["letter.created"],
        )])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/print-mail/v1/webhooks/webhook_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "webhook_1",
            "object": "webhook",
            "deleted": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let webhook = client.webhooks().get("webhook_1").await.expect("get webhook");
    assert!(webhook.enabled);
    let list = client.webhooks().list(None, None).await.expect("list webhooks");
    assert_eq!(list.total_count, 1);
    client.webhooks().delete("webhook_1").await.expect("delete webhook");
}
