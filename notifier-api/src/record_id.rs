use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned record identifier.
///
/// Opaque to this tool: the notifier server uses uuid strings, but any
/// scalar JSON value is accepted and echoed unchanged into the per-record
/// update URL. Restore assumes ids are stable between the backed-up server
/// and the restore target; updates are blind overwrites by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Value);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // strings render without the JSON quotes
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(Value::String(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::RecordId;

    #[test]
    fn string_id_renders_unquoted() {
        let id: RecordId = serde_json::from_str("\"550e8400-e29b-41d4-a716-446655440000\"")
            .expect("deserialize id");
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn numeric_id_renders_as_number() {
        let id: RecordId = serde_json::from_str("17").expect("deserialize id");
        assert_eq!(id.to_string(), "17");
    }
}
