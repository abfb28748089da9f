//! Shared fixtures for the mock-server tests.

use postgrid_sdk::{ApiKeys, ClientConfig, PostGrid};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const MAIL_KEY: &str = "test_sk_mail";
pub const ADDR_KEY: &str = "test_sk_addr";

/// Starts a mock server and a client holding both keys pointed at it.
pub async fn setup() -> (MockServer, PostGrid) {
    let server = MockServer::start().await;
    let client = client_with(&server, ApiKeys::new().with_mail(MAIL_KEY).with_addr(ADDR_KEY));
    (server, client)
}

pub fn client_with(server: &MockServer, keys: ApiKeys) -> PostGrid {
    PostGrid::new(ClientConfig::new(keys).with_base_url(server.uri())).expect("client creation")
}

pub fn contact_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "contact",
        "live": false,
        "addressLine1": "2929 EAGLEDALE DR",
        "city": "INDIANAPOLIS",
        "provinceOrState": "IN",
        "postalOrZip": "46224",
        "countryCode": "US",
        "addressStatus": "verified",
        "firstName": "Jim",
    })
}

pub fn letter_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "letter",
        "live": false,
        "status": "ready",
        "to": contact_json("contact_to"),
        "from": contact_json("contact_from"),
        "addressPlacement": "insert_blank_page",
        "color": false,
        "doubleSided": false,
        "pageCount": 1,
    })
}

pub fn list_json(data: Vec<Value>) -> Value {
    let total = data.len();
    json!({
        "object": "list",
        "limit": 40,
        "skip": 0,
        "totalCount": total,
        "data": data,
    })
}
