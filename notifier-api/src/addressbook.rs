//! # Address book entries
//!
//! Fetch-all and update-one operations for the notifier address book.
//!
//! ## Address book methods on NotifierClient
//!
//! - [list_address_book](NotifierClient::list_address_book) - fetch all entries
//! - [update_address_book_entry](NotifierClient::update_address_book_entry) - overwrite one entry by id
//!
//! The server's read model may include extra fields (timestamps and other
//! derived data) that its write endpoint rejects. Entries keep those extras
//! so a backup file stores records as received, but updates send only the
//! four writable fields.

use serde::{Deserialize, Serialize};

use crate::{Result, client::CONF_API_PREFIX, client::NotifierClient, record_id::RecordId};

pub(crate) const ADDRESS_BOOK_PATH: &str = "/api/addressbook";

/// One contact address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressBookEntry {
    /// Server-assigned identifier, used in the update URL
    pub id: RecordId,

    /// Address type, e.g. "email" or "sms". The domain is server-defined.
    pub addr_type: String,

    /// The contact address value
    pub address: String,

    /// Display name of the contact
    pub display_name: String,

    /// Whether this is the default address
    pub is_default: bool,

    /// Any additional fields the server returned. Preserved in backup
    /// files, never sent back on update.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Update body: exactly the writable field subset, no id, no extras.
#[derive(Debug, Serialize)]
pub(crate) struct AddressBookWrite<'a> {
    addr_type: &'a str,
    address: &'a str,
    display_name: &'a str,
    is_default: bool,
}

impl<'a> From<&'a AddressBookEntry> for AddressBookWrite<'a> {
    fn from(entry: &'a AddressBookEntry) -> Self {
        AddressBookWrite {
            addr_type: &entry.addr_type,
            address: &entry.address,
            display_name: &entry.display_name,
            is_default: entry.is_default,
        }
    }
}

impl NotifierClient {
    /// Fetches the full address book, in server order.
    pub async fn list_address_book(&self) -> Result<Vec<AddressBookEntry>> {
        self.http
            .get_request(&format!("{CONF_API_PREFIX}{ADDRESS_BOOK_PATH}"))
            .await
    }

    /// Overwrites the entry with `entry.id` on the server.
    /// The entry must already exist on the target; see the crate docs for
    /// the id-stability precondition.
    pub async fn update_address_book_entry(&self, entry: &AddressBookEntry) -> Result<()> {
        let path = format!("{CONF_API_PREFIX}{ADDRESS_BOOK_PATH}/{}", entry.id);
        self.http
            .put_request(&path, &AddressBookWrite::from(entry))
            .await
    }
}
