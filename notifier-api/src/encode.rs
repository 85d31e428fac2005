//! Compact Base64 encoding of a JSON document.
//!
//! Used to embed an address book file as a single-line environment
//! variable value: the JSON is re-serialized without any whitespace and
//! encoded with the standard Base64 alphabet (with padding), so the
//! result contains no newlines and needs no shell quoting.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};
use snafu::prelude::*;

use crate::{
    Result,
    error::{IoSnafu, NotifierError, SerializationSnafu},
};

/// Parses `path` as JSON, re-serializes it compactly, and Base64-encodes
/// the UTF-8 bytes of that serialization.
/// Fails with [NotifierError::Format] if the file is not valid JSON.
pub fn compact_and_encode(path: &Path) -> Result<String> {
    let raw = std::fs::read(path).context(IoSnafu { path })?;
    let value: serde_json::Value =
        serde_json::from_slice(&raw).map_err(|err| NotifierError::Format {
            message: format!("{}: {err}", path.display()),
        })?;
    let compact = serde_json::to_string(&value).context(SerializationSnafu)?;
    Ok(STANDARD.encode(compact.as_bytes()))
}
