//! HttpClient used by NotifierClient
//!
//! Responsible for
//!  - issuing authenticated GET/PUT requests
//!  - TLS trust configuration (optional CA bundle)
//!  - logging/tracing
//!
//! Requests are never retried: the first failure aborts the whole
//! backup or restore operation, and partial restore progress stays
//! committed server-side.

use std::{path::Path, time::Duration};

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use snafu::prelude::*;
use tracing::{debug, error, trace};

use crate::{
    Result,
    error::{HttpSnafu, IoSnafu, NotifierError, SerializationSnafu},
};

/// Header carrying the bearer token on every request.
pub const TOKEN_HEADER: &str = "X-Token";

/// Fixed per-request timeout. The original tool relied on transport
/// defaults; an explicit value makes hung servers fail predictably.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,

    /// Base URL for API requests (e.g., "https://notifier.example.org")
    base_url: String,

    token: String,
}

impl HttpClient {
    /// Builds the underlying reqwest client. If `ca_bundle` is given, every
    /// certificate in the PEM bundle is added to the trust store; otherwise
    /// system trust roots are used.
    pub fn new(base_url: &str, token: &str, ca_bundle: Option<&Path>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));
        if let Some(path) = ca_bundle {
            let pem = std::fs::read(path).context(IoSnafu { path })?;
            let certs = reqwest::Certificate::from_pem_bundle(&pem).context(HttpSnafu {
                method: "ca-bundle",
                url: path.display().to_string(),
            })?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }
        let client = builder.build().context(HttpSnafu {
            method: "client-init",
            url: "",
        })?;
        Ok(HttpClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Makes an authenticated GET request and deserializes the JSON response.
    pub(crate) async fn get_request<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(Method::GET, path, None).await?;
        deserialize_json(&body)
    }

    /// Makes an authenticated PUT request with a JSON body.
    /// The response body is ignored; only the status code matters.
    pub(crate) async fn put_request<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let body = serde_json::to_vec(body).context(SerializationSnafu)?;
        self.send(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// Sends one request and returns the raw response body on 2xx.
    /// Non-2xx statuses map to `NotifierError::Api` with the response text;
    /// connection/TLS/timeout failures map to `NotifierError::Http`.
    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let full_url = format!("{}{}", self.base_url, path);
        debug!(%method, url = %full_url, "request");
        let mut req = self
            .client
            .request(method.clone(), &full_url)
            .header(TOKEN_HEADER, &self.token);
        if let Some(bytes) = body {
            log_request_body(&full_url, &bytes);
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }
        let response = req.send().await.context(HttpSnafu {
            method: method.as_str(),
            url: &full_url,
        })?;
        let code = response.status();
        if !code.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(%code, url = %full_url, message, "http");
            return Err(NotifierError::Api {
                code: code.as_u16(),
                method: method.to_string(),
                url: full_url,
                message,
            });
        }
        // If we fail to fully read the response, don't retry. The server
        // already applied the request.
        let body = response.bytes().await.context(HttpSnafu {
            method: method.as_str(),
            url: &full_url,
        })?;
        log_response(&full_url, &body);
        Ok(body.to_vec())
    }
}

// dump request body, for debugging
// requires RUST_LOG=notifier::http_json=trace
fn log_request_body(url: &str, body: &[u8]) {
    if tracing::enabled!(target: "notifier::http_json", tracing::Level::TRACE) {
        // don't log headers so we don't leak the api token
        trace!(target: "notifier::http_json", "Request url={url} body={}",
            String::from_utf8_lossy(body)
        );
    }
}

// dump json response, for debugging
fn log_response(url: &str, body: &[u8]) {
    if tracing::enabled!(target: "notifier::http_json", tracing::Level::TRACE) {
        trace!(target: "notifier::http_json", "Response url={url} body={}",
            String::from_utf8_lossy(body)
        );
    }
}

// deserialize, reporting errors with 'serde_path_to_error', which provides
// detailed json path to the error
pub(crate) fn deserialize_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(value) => Ok(value),
        Err(err) => {
            error!("Deserialization failed at {}: {}", err.path(), err);
            Err(NotifierError::Deserialization {
                source: err.into_inner(),
            })
        }
    }
}
