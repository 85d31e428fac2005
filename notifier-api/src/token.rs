//! Token file reading.

use std::path::Path;

use snafu::prelude::*;

use crate::{
    Result,
    error::{IoSnafu, NotifierError},
};

/// Reads a bearer token from a file, trimming surrounding whitespace.
/// Token files usually end with a newline that must not leak into the
/// `X-Token` header value.
pub fn read_token_file(path: &Path) -> Result<String> {
    let raw = std::fs::read(path).context(IoSnafu { path })?;
    let token = String::from_utf8(raw).map_err(|err| NotifierError::Format {
        message: format!("token file {}: {err}", path.display()),
    })?;
    Ok(token.trim().to_string())
}
