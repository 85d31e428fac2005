//! # Reminders
//!
//! Fetch-all and update-one operations for scheduled reminders.
//!
//! ## Reminder methods on NotifierClient
//!
//! - [list_reminders](NotifierClient::list_reminders) - fetch all reminders
//! - [update_reminder](NotifierClient::update_reminder) - overwrite one reminder by id
//!
//! Protocol quirk of the notifier api: the list endpoint wraps every
//! reminder in a one-key `{"reminder": ...}` container (alongside derived
//! data like the next occurrence), while the update endpoint takes the
//! fields directly with no wrapper. The asymmetry is handled entirely
//! inside this module; callers only ever see unwrapped [Reminder] values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, client::CONF_API_PREFIX, client::NotifierClient, record_id::RecordId};

pub(crate) const REMINDER_PATH: &str = "/api/reminder";

/// One scheduled notification rule.
///
/// `param`, `recipients`, `spec`, and `warning_at` are kind-specific
/// payloads this tool does not interpret; they are carried as opaque JSON
/// so backup and restore round-trip whatever the server defines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Server-assigned identifier, used in the update URL
    pub id: RecordId,

    /// Human-readable description
    pub description: String,

    /// Reminder type
    pub kind: String,

    /// Kind-specific parameter
    pub param: Value,

    /// Recipient references (address book ids)
    pub recipients: Value,

    /// Scheduling specification
    pub spec: Value,

    /// Advance-warning offsets
    pub warning_at: Value,

    /// Any additional fields the server returned. Preserved in backup
    /// files, never sent back on update.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Element of the list response: the reminder plus derived fields
/// (e.g. next occurrence) that are dropped on unwrap.
#[derive(Debug, Deserialize)]
struct ReminderEnvelope {
    reminder: Reminder,
}

#[derive(Debug, Deserialize)]
struct ReminderListResponse {
    reminders: Vec<ReminderEnvelope>,
}

/// Update body: exactly the writable field subset, no id, no extras,
/// and no envelope.
#[derive(Debug, Serialize)]
pub(crate) struct ReminderWrite<'a> {
    description: &'a str,
    kind: &'a str,
    param: &'a Value,
    recipients: &'a Value,
    spec: &'a Value,
    warning_at: &'a Value,
}

impl<'a> From<&'a Reminder> for ReminderWrite<'a> {
    fn from(reminder: &'a Reminder) -> Self {
        ReminderWrite {
            description: &reminder.description,
            kind: &reminder.kind,
            param: &reminder.param,
            recipients: &reminder.recipients,
            spec: &reminder.spec,
            warning_at: &reminder.warning_at,
        }
    }
}

impl NotifierClient {
    /// Fetches all reminders, in server order, unwrapped from the list
    /// endpoint's `reminder` containers.
    pub async fn list_reminders(&self) -> Result<Vec<Reminder>> {
        let response: ReminderListResponse = self
            .http
            .get_request(&format!("{CONF_API_PREFIX}{REMINDER_PATH}"))
            .await?;
        Ok(response
            .reminders
            .into_iter()
            .map(|envelope| envelope.reminder)
            .collect())
    }

    /// Overwrites the reminder with `reminder.id` on the server.
    pub async fn update_reminder(&self, reminder: &Reminder) -> Result<()> {
        let path = format!("{CONF_API_PREFIX}{REMINDER_PATH}/{}", reminder.id);
        self.http
            .put_request(&path, &ReminderWrite::from(reminder))
            .await
    }
}
