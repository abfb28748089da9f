//! HTTP client for the PostGrid REST API.
//!
//! This module holds the pieces every resource shares: configuration, the
//! error type, the request dispatcher, response key normalization and the
//! multipart form encoder.
//!
//! # Example
//!
//! ```rust,ignore
//! use postgrid_sdk::client::{ClientConfig, PostGrid};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PostGrid::connect(ClientConfig::from_env()).await?;
//!
//!     let contacts = client.contacts().list(None, None).await?;
//!     println!("Found {} contacts", contacts.total_count);
//!
//!     Ok(())
//! }
//! ```

pub mod case;
pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use config::{ApiKeys, ClientConfig, KeyKind, WebhookRegistration};
pub use error::ClientError;
pub use form::{FilePart, FormValue, MultipartForm};
pub use http::{Call, PostGrid, RequestBody};
