//! # Backup and restore
//!
//! Backup fetches both configuration collections into a single
//! [BackupDocument] and writes it as one JSON file. Restore reads such a
//! file and replays every record through the per-record update endpoints.
//!
//! Restore is not transactional: records are updated one at a time, in
//! file order, and the first failure aborts with everything before it
//! already committed server-side. Address book entries are replayed before
//! reminders because reminders reference addresses as recipients.

use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use tracing::info;

use crate::{
    Result,
    addressbook::AddressBookEntry,
    client::NotifierClient,
    error::{IoSnafu, NotifierError, SerializationSnafu},
    reminder::Reminder,
};

/// The unit of persistence: both collections, in server-returned order,
/// with reminders already unwrapped from the list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub address_book: Vec<AddressBookEntry>,
    pub reminders: Vec<Reminder>,
}

impl BackupDocument {
    /// Parses a backup document from a file.
    /// Fails with [NotifierError::Format] if the file is not valid JSON or
    /// is missing one of the two top-level keys.
    pub fn read_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path).context(IoSnafu { path })?;
        let mut deserializer = serde_json::Deserializer::from_slice(&raw);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            NotifierError::Format {
                message: format!("backup document {}: {err}", path.display()),
            }
        })
    }

    /// Serializes the document and writes it to `path` in a single write,
    /// overwriting any existing file.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec(self).context(SerializationSnafu)?;
        std::fs::write(path, bytes).context(IoSnafu { path })
    }
}

impl NotifierClient {
    /// Fetches the address book and all reminders into one document.
    pub async fn fetch_backup(&self) -> Result<BackupDocument> {
        let address_book = self.list_address_book().await?;
        let reminders = self.list_reminders().await?;
        Ok(BackupDocument {
            address_book,
            reminders,
        })
    }

    /// Backs up both collections to a file. Both fetches must succeed
    /// before anything is written, so a failed backup never leaves a
    /// partial or truncated file behind.
    pub async fn backup_to_file(&self, path: &Path) -> Result<BackupDocument> {
        let document = self.fetch_backup().await?;
        document.write_to_file(path)?;
        info!(
            path = %path.display(),
            entries = document.address_book.len(),
            reminders = document.reminders.len(),
            "backup written"
        );
        Ok(document)
    }

    /// Replays a backup document onto the server: every address book entry
    /// first, then every reminder, one update at a time in file order.
    /// Stops at the first failed update; earlier updates stay applied.
    pub async fn restore(&self, document: &BackupDocument) -> Result<()> {
        for entry in &document.address_book {
            self.update_address_book_entry(entry).await?;
        }
        for reminder in &document.reminders {
            self.update_reminder(reminder).await?;
        }
        info!(
            entries = document.address_book.len(),
            reminders = document.reminders.len(),
            "restore complete"
        );
        Ok(())
    }

    /// Reads a backup file and replays it. See [restore](Self::restore)
    /// for the abort-on-first-failure semantics.
    pub async fn restore_from_file(&self, path: &Path) -> Result<()> {
        let document = BackupDocument::read_from_file(path)?;
        self.restore(&document).await
    }
}
