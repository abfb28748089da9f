//! Contacts and templates.

use postgrid_sdk::{ContactCreate, TemplateCreate};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{contact_json, list_json, setup};

#[tokio::test]
async fn test_contact_create_sends_camel_case_json() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/contacts"))
        .and(body_json(json!({
            "addressLine1": "2929 Eagledale Dr",
            "city": "Indianapolis",
            "provinceOrState": "IN",
            "postalOrZip": "46224",
            "countryCode": "US",
            "firstName": "Jim",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json("contact_1")))
        .expect(1)
        .mount(&server)
        .await;

    let contact = client
        .contacts()
        .create(&ContactCreate {
            address_line1: Some("2929 Eagledale Dr".to_string()),
            city: Some("Indianapolis".to_string()),
            province_or_state: Some("IN".to_string()),
            postal_or_zip: Some("46224".to_string()),
            country_code: Some("US".to_string()),
            first_name: Some("Jim".to_string()),
            ..Default::default()
        })
        .await
        .expect("create contact");

    assert_eq!(contact.id, "contact_1");
    assert_eq!(contact.address_status, "verified");
}

#[tokio::test]
async fn test_contact_list_default_paging() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/contacts"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
            contact_json("contact_1"),
            contact_json("contact_2"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let list = client.contacts().list(None, None).await.expect("list contacts");
    assert_eq!(list.len(), 2);
    assert!(!list.has_more());
}

#[tokio::test]
async fn test_contact_list_explicit_paging() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/contacts"))
        .and(query_param("skip", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let list = client.contacts().list(Some(5), Some(10)).await.expect("list contacts");
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_contact_delete() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/print-mail/v1/contacts/contact_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "contact_1",
            "object": "contact",
            "deleted": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = client.contacts().delete("contact_1").await.expect("delete contact");
    assert_eq!(deleted.id, "contact_1");
}

#[tokio::test]
async fn test_template_create_and_update() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/templates"))
        .and(body_json(json!({
            "description": "welcome",
            "html": "<b>Hello {{to.firstName}}</b>",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "template_1",
            "object": "template",
            "description": "welcome",
            "html": "<b>Hello {{to.firstName}}</b>",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/templates/template_1"))
        .and(body_json(json!({"html": "<b>Bye</b>"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "template_1",
            "object": "template",
            "html": "<b>Bye</b>",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let template = client
        .templates()
        .create(&TemplateCreate::new("<b>Hello {{to.firstName}}</b>").with_description("welcome"))
        .await
        .expect("create template");
    assert_eq!(template.description.as_deref(), Some("welcome"));

    let updated = client
        .templates()
        .update(&template.id, &TemplateCreate::new("<b>Bye</b>"))
        .await
        .expect("update template");
    assert_eq!(updated.html, "<b>Bye</b>");
}

#[tokio::test]
async fn test_contact_with_null_status_fields() {
    let (server, client) = setup().await;
    let mut body = contact_json("contact_1");
    body["addressStatus"] = json!(null);
    body["object"] = json!(null);
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/contacts/contact_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let contact = client.contacts().get("contact_1").await.expect("get contact");
    assert_eq!(contact.id, "contact_1");
    assert!(contact.address_status.is_empty());
    assert!(contact.object.is_empty());
}
