//! Core types for the PostGrid SDK.
//!
//! Records mirror PostGrid's resource schemas; `*Create` structs are the
//! request parameters for the matching create calls.

pub mod address;
pub mod bank_account;
pub mod check;
pub mod contact;
pub mod document;
pub mod letter;
pub mod list;
pub mod postcard;
pub mod template;
pub mod webhook;

pub use address::{Address, AddressInput, AddressResponse, CityState, LookupInfo, Verification};
pub use bank_account::{BankAccount, BankAccountCreate};
pub use check::{Check, CheckCreate};
pub use contact::{Contact, ContactCreate, Recipient};
pub use document::{Document, SignatureImage};
pub use letter::{AddressPlacement, Letter, LetterCreate};
pub use list::List;
pub use postcard::{Postcard, PostcardCreate, PostcardSize};
pub use template::{Template, TemplateCreate};
pub use webhook::{Webhook, WebhookCreate, WebhookInvocation};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the field's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
