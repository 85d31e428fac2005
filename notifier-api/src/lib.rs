/*
 * notifier-api - client library for the mobilenotifier configuration api
 *
 * SPDX-License-Identifier: Apache-2.0
 */
//! # Notifier API Client
//!
//! Client for the configuration data of a mobilenotifier server: address
//! book entries and scheduled reminders. Built for the companion backup
//! cli, but usable on its own.
//!
//! ## Features
//!
//! - authenticated GET/PUT requests (`X-Token` bearer header)
//! - optional CA bundle for private TLS trust
//! - full-collection backup into a single JSON document
//! - restore by replaying per-record updates
//! - compact Base64 encoding of an address book file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notifier_api::{ClientConfig, NotifierClient, read_token_file};
//! # async fn example() -> Result<(), notifier_api::NotifierError> {
//! let token = read_token_file(std::path::Path::new("/etc/notifier/token"))?;
//! let client = NotifierClient::new("https://notifier.example.org", &token)?;
//!
//! // backup both collections to a file
//! let document = client.backup_to_file(std::path::Path::new("backup.json")).await?;
//! println!("{} entries, {} reminders",
//!     document.address_book.len(), document.reminders.len());
//!
//! // replay a previous backup onto a server
//! client.restore_from_file(std::path::Path::new("backup.json")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Preconditions for restore
//!
//! Restore blindly overwrites records by id, so it assumes the target
//! server already has records with the backed-up ids. Restoring onto a
//! server instance with different ids will update unrelated records.
//! Restore is also non-transactional: the first failed update aborts the
//! run, and every update before it stays applied.

mod addressbook;
mod backup;
mod client;
mod encode;
mod error;
mod http_client;
mod record_id;
mod reminder;
mod token;

pub use addressbook::AddressBookEntry;
pub use backup::BackupDocument;
pub use client::{CONF_API_PREFIX, ClientConfig, NotifierClient};
pub use encode::compact_and_encode;
pub use error::{NotifierError, Result};
pub use http_client::{REQUEST_TIMEOUT_SECS, TOKEN_HEADER};
pub use record_id::RecordId;
pub use reminder::Reminder;
pub use token::read_token_file;
