//! Errors returned by `NotifierClient`
//!
use std::path::PathBuf;

use snafu::prelude::*;

/// Errors returned by the notifier-api crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum NotifierError {
    /// Http connection, TLS, or timeout error
    #[snafu(display("HTTP error {method} url:{url}"))]
    Http {
        method: String,
        url: String,
        source: reqwest::Error,
    },

    /// Notifier server responded with a non-2xx status.
    #[snafu(display("Api server reported error ({code}) {method} {url}: {message}"))]
    Api {
        code: u16,
        method: String,
        url: String,
        message: String,
    },

    /// Deserialization error. This means a server response didn't have the expected shape.
    #[snafu(display("Deserialization: {source}"))]
    Deserialization { source: serde_json::Error },

    /// Serialization error. Unlikely to occur. If you see this error, please report it as a bug.
    #[snafu(display("Serialization: {source}"))]
    Serialization { source: serde_json::Error },

    /// A local input file is not valid: the backup document is not JSON
    /// or is missing a required key, or the token file is not UTF-8.
    #[snafu(display("Invalid input: {message}"))]
    Format { message: String },

    /// File read or write failed
    #[snafu(display("file {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T, E = NotifierError> = std::result::Result<T, E>;
