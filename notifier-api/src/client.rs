//! Notifier API client
//!
//! # Creating a new api client
//!
//! - [new](NotifierClient::new) - create a client for a host and token
//! - [with_config](NotifierClient::with_config) - create a client with custom configuration
//!

use std::path::PathBuf;

use tracing::debug;

use crate::{Result, http_client::HttpClient};

/// Path prefix of the notifier configuration api.
pub const CONF_API_PREFIX: &str = "/notifier";

/// Configuration for the notifier client: endpoint url, bearer token,
/// and optional TLS trust override.
///
/// ```rust,no_run
/// use notifier_api::{ClientConfig, NotifierClient};
/// # fn create_client() -> Result<NotifierClient, notifier_api::NotifierError> {
/// let config = ClientConfig::new("https://notifier.example.org", "abc123")
///     .ca_bundle("/etc/ssl/internal-ca.pem");
/// let client = NotifierClient::with_config(config)?;
/// # Ok(client)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base url for all notifier api requests, scheme included.
    pub base_url: String,

    /// Bearer token sent in the `X-Token` header. Must already be trimmed;
    /// see [read_token_file](crate::read_token_file).
    pub token: String,

    /// Optional PEM file with CA certificates to trust in addition to the
    /// system trust roots. Needed when the server uses a private CA.
    pub ca_bundle: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            token: token.into(),
            ca_bundle: None,
        }
    }

    /// Sets the CA bundle file.
    pub fn ca_bundle(self, path: impl Into<PathBuf>) -> Self {
        ClientConfig {
            ca_bundle: Some(path.into()),
            ..self
        }
    }
}

/// Client for the mobilenotifier configuration api.
///
/// All requests are serial; the client issues one request at a time and
/// never retries.
#[derive(Debug, Clone)]
pub struct NotifierClient {
    pub(crate) http: HttpClient,
}

impl NotifierClient {
    /// Creates a client with default configuration for a host and token.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url, token))
    }

    /// Creates a client from a configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        debug!(url = %config.base_url, "new client");
        let http = HttpClient::new(
            &config.base_url,
            &config.token,
            config.ca_bundle.as_deref(),
        )?;
        Ok(Self { http })
    }
}
