//! Mock-server tests for the PostGrid client.

mod address;
mod bank_accounts;
mod common;
mod contacts;
mod dispatch;
mod webhooks;
