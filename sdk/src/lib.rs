//! PostGrid SDK - Rust client library for the PostGrid API.
//!
//! This crate wraps the PostGrid print-mail and address verification REST
//! endpoints behind one façade, [`PostGrid`], with a handle per resource.
//!
//! # Resources
//!
//! - [`ContactApi`]: contacts
//! - [`TemplateApi`]: HTML templates
//! - [`LetterApi`], [`PostcardApi`], [`CheckApi`]: mail pieces
//! - [`BankAccountApi`]: bank accounts for checks
//! - [`WebhookApi`]: webhooks and their invocations
//! - [`AddressApi`]: address verification, completion and parsing
//!
//! Print-mail resources need the mail API key, the address resource needs
//! the address API key. A missing key fails before any request is made.
//!
//! # Example
//!
//! ```rust,no_run
//! use postgrid_sdk::{ApiKeys, ClientConfig, ContactCreate, PostGrid};
//!
//! # async fn run() -> Result<(), postgrid_sdk::ClientError> {
//! let keys = ApiKeys::new().with_mail("test_sk_mail").with_addr("test_sk_addr");
//! let client = PostGrid::new(ClientConfig::new(keys))?;
//!
//! let contact = client
//!     .contacts()
//!     .create(&ContactCreate {
//!         first_name: Some("Jim".to_string()),
//!         address_line1: Some("2929 Eagledale Dr".to_string()),
//!         country_code: Some("US".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("created {}", contact.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod resources;
pub mod types;

pub use client::{ApiKeys, ClientConfig, ClientError, KeyKind, PostGrid, WebhookRegistration};
pub use error::{Envelope, PostGridError};
pub use resources::{
    AddressApi, BankAccountApi, CheckApi, ContactApi, CreateOptions, LetterApi, PostcardApi,
    TemplateApi, WebhookApi,
};
pub use types::{
    Address, AddressInput, AddressPlacement, AddressResponse, BankAccount, BankAccountCreate,
    Check, CheckCreate, CityState, Contact, ContactCreate, Document, Letter, LetterCreate, List,
    LookupInfo, Postcard, PostcardCreate, PostcardSize, Recipient, SignatureImage, Template,
    TemplateCreate, Verification, Webhook, WebhookCreate, WebhookInvocation,
};
