//! Bank accounts.

use postgrid_sdk::{ApiKeys, BankAccountCreate, ClientError, SignatureImage};
use serde_json::{json, Value};
use tokio_test::assert_err;
use wiremock::matchers::{any, body_string_contains, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_with, list_json, setup, ADDR_KEY};

fn bank_account_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "bank_account",
        "bankName": "First Example Bank",
        "bankCountryCode": "US",
        "routingNumber": "123456789",
        "accountNumberLast4": "6789",
        "signatureText": "Jim Smith",
    })
}

fn account() -> BankAccountCreate {
    BankAccountCreate::new("First Example Bank", "US").with_us_account("123456789", "000123456789")
}

#[tokio::test]
async fn test_create_with_signature_text() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/bank_accounts"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"bankName\""))
        .and(body_string_contains("name=\"routingNumber\""))
        .and(body_string_contains("name=\"signatureText\""))
        .and(body_string_contains("name=\"metadata[team]\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(bank_account_json("bank_1")))
        .expect(1)
        .mount(&server)
        .await;

    let mut create = account().with_signature_text("Jim Smith");
    create.metadata = Some(json!({"team": "billing"}));

    let account = client.bank_accounts().create(&create).await.expect("create account");
    assert_eq!(account.id, "bank_1");
    assert_eq!(account.account_number_last4.as_deref(), Some("6789"));
}

#[tokio::test]
async fn test_create_with_signature_image_bytes() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/print-mail/v1/bank_accounts"))
        .and(body_string_contains(
            "name=\"signatureImage\"; filename=\"sig.png\"",
        ))
        .and(body_string_contains("image/png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bank_account_json("bank_2")))
        .expect(1)
        .mount(&server)
        .await;

    let create = account().with_signature_image(SignatureImage::bytes(
        b"PNGDATA".to_vec(),
        "sig.png",
        "image/png",
    ));
    client.bank_accounts().create(&create).await.expect("create account");
}

#[tokio::test]
async fn test_create_with_unreadable_signature_file() {
    let (server, client) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let create = account().with_signature_image(SignatureImage::path("/no/such/signature.png"));
    let err = assert_err!(client.bank_accounts().create(&create).await);
    assert!(matches!(err, ClientError::File(_)));
}

#[tokio::test]
async fn test_create_checks_key_before_reading_file() {
    let (server, _) = setup().await;
    let client = client_with(&server, ApiKeys::new().with_addr(ADDR_KEY));

    let create = account().with_signature_image(SignatureImage::path("/no/such/signature.png"));
    let err = assert_err!(client.bank_accounts().create(&create).await);
    assert!(matches!(err, ClientError::MissingApiKey(_)));
}

#[tokio::test]
async fn test_list_and_delete() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/print-mail/v1/bank_accounts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_json(vec![bank_account_json("bank_1")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/print-mail/v1/bank_accounts/bank_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "bank_1",
            "object": "bank_account",
            "deleted": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = client.bank_accounts().list(None, None).await.expect("list accounts");
    assert_eq!(list.data[0].bank_name, "First Example Bank");

    let deleted = client.bank_accounts().delete("bank_1").await.expect("delete account");
    assert_eq!(deleted.id, "bank_1");
}
