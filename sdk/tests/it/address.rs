//! Address verification.

use postgrid_sdk::client::http::API_KEY_HEADER;
use postgrid_sdk::{Address, AddressInput};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{setup, ADDR_KEY};

#[tokio::test]
async fn test_lookup_info_uses_address_key() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/addver"))
        .and(header(API_KEY_HEADER, ADDR_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Retrieved lookup info.",
            "data": {"used": 20, "free_limit": 500},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client.addresses().lookup_info().await.expect("lookup info");
    assert_eq!(info.status, "success");
    assert_eq!(info.data.remaining(), 480);
}

#[tokio::test]
async fn test_verify_freeform() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/verifications"))
        .and(query_param("properCase", "true"))
        .and(body_json(json!({"address": "3288 Tara Ln, Indianapolis, IN 46224"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Address verified successfully.",
            "data": {
                "line1": "3288 Tara Ln",
                "city": "Indianapolis",
                "provinceOrState": "IN",
                "postalOrZip": "46224",
                "zipPlus4": "2231",
                "country": "us",
                "status": "verified",
                "errors": {},
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verification = client
        .addresses()
        .verify("3288 Tara Ln, Indianapolis, IN 46224")
        .await
        .expect("verify");
    assert!(verification.verified);
    assert_eq!(verification.address().zip_plus4.as_deref(), Some("2231"));
}

#[tokio::test]
async fn test_verify_structured_failed() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/verifications"))
        .and(body_json(json!({"address": {
            "line1": "3000 Tara Ln",
            "city": "Indianapolis",
            "provinceOrState": "IN",
            "postalOrZip": "46224",
        }})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Address verification failed.",
            "data": {"line1": "3000 Tara Ln", "status": "failed"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verification = client
        .addresses()
        .verify(Address::new("3000 Tara Ln", "Indianapolis", "IN", "46224"))
        .await
        .expect("verify");
    assert!(!verification.verified);
}

#[tokio::test]
async fn test_autocomplete_previews_reshaped() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/addver/completions"))
        .and(query_param("properCase", "true"))
        .and(query_param("partialStreet", "77 main st"))
        .and(query_param("countryFilter", "US"))
        .and(query_param("provInsteadOfPC", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Retrieved verified address completions successfully.",
            "data": [
                {"preview": {"address": "77 N MAIN ST", "prov": "UT"}},
                {"preview": {"address": "77 N MAIN ST", "city": "ABERDEEN", "prov": "ID"}},
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let previews = client
        .addresses()
        .autocomplete_previews("77 main st", None)
        .await
        .expect("previews");
    assert_eq!(previews.data.len(), 2);
    assert_eq!(previews.data[0].line1.as_deref(), Some("77 N MAIN ST"));
    assert_eq!(previews.data[0].province_or_state.as_deref(), Some("UT"));
    assert_eq!(previews.data[1].city.as_deref(), Some("ABERDEEN"));
}

#[tokio::test]
async fn test_autocomplete_address_reshaped() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/completions"))
        .and(query_param("properCase", "true"))
        .and(body_json(json!({
            "partialStreet": "77 N MAIN ST",
            "cityFilter": "ABERDEEN",
            "stateFilter": "SD",
            "pcFilter": null,
            "countryFilter": "US",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Retrieved verified address completions successfully.",
            "data": [{"address": {
                "address": "77 S MAIN ST",
                "city": "ABERDEEN",
                "prov": "SD",
                "pc": "57401",
                "country": "US",
            }}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let partial = Address {
        line1: Some("77 N MAIN ST".to_string()),
        city: Some("ABERDEEN".to_string()),
        province_or_state: Some("SD".to_string()),
        ..Default::default()
    };
    let completed = client
        .addresses()
        .autocomplete_address(&partial)
        .await
        .expect("autocomplete");
    assert_eq!(completed.data[0].postal_or_zip.as_deref(), Some("57401"));
    assert_eq!(completed.data[0].country.as_deref(), Some("US"));
}

#[tokio::test]
async fn test_batch_verify_lifts_results() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/verifications/batch"))
        .and(query_param("properCase", "true"))
        .and(body_json(json!({"addresses": [
            "3288 Tara Ln, Indianapolis, IN 46224",
            {"line1": "77 S Main St", "postalOrZip": "57401"},
        ]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Verified address batch successfully.",
            "data": {"results": [
                {"verifiedAddress": {"line1": "3288 Tara Ln", "status": "verified"}},
                {"verifiedAddress": {"line1": "77 S Main St", "status": "corrected"}},
            ]},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let structured = Address {
        line1: Some("77 S Main St".to_string()),
        postal_or_zip: Some("57401".to_string()),
        ..Default::default()
    };
    let batch = client
        .addresses()
        .batch_verify(vec![
            AddressInput::from("3288 Tara Ln, Indianapolis, IN 46224"),
            AddressInput::from(structured),
        ])
        .await
        .expect("batch verify");
    assert_eq!(batch.data.len(), 2);
    assert!(batch.data.iter().all(Address::is_verified));
}

#[tokio::test]
async fn test_batch_verify_keeps_unverified_entries() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/verifications/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Verified address batch successfully.",
            "data": {"results": [
                {"verifiedAddress": {"line1": "3288 Tara Ln", "status": "verified"}},
                {"errors": {"generic": ["Could not verify address."]}},
            ]},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let batch = client
        .addresses()
        .batch_verify(vec![
            AddressInput::from("3288 Tara Ln, Indianapolis, IN 46224"),
            AddressInput::from("nowhere at all"),
        ])
        .await
        .expect("batch verify");
    assert_eq!(batch.data.len(), 2);
    assert!(batch.data[0].is_verified());
    assert!(!batch.data[1].is_verified());
    assert!(batch.data[1].line1.is_none());
    assert_eq!(
        batch.data[1].errors,
        Some(json!({"generic": ["Could not verify address."]}))
    );
}

#[tokio::test]
async fn test_parse_and_suggest_keep_raw_data() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/parses"))
        .and(body_json(json!({"address": "3288 Tara Ln, Indianapolis, IN 46224"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Success.",
            "data": {"city": "indianapolis", "house_number": "3288", "road": "tara ln"},
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Address suggestions retrieved successfully.",
            "data": [{"line1": "77 N Main St"}, {"line1": "77 S Main St"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let parsed = client
        .addresses()
        .parse_address("3288 Tara Ln, Indianapolis, IN 46224")
        .await
        .expect("parse");
    assert_eq!(parsed.data["houseNumber"], "3288");

    let suggestions = client
        .addresses()
        .suggest_addresses("77 main st aberdeen")
        .await
        .expect("suggest");
    assert_eq!(suggestions.data.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_lookup_city_state() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/v1/addver/city_states"))
        .and(query_param("properCase", "true"))
        .and(body_json(json!({"postalOrZip": "60540"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Success.",
            "data": {"city": "NAPERVILLE", "provinceOrState": "IL"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let city = client
        .addresses()
        .lookup_city_state("60540")
        .await
        .expect("city state");
    assert_eq!(city.data.city, "NAPERVILLE");
    assert_eq!(city.data.province_or_state, "IL");
}
