//! GraphQL HTTP transport.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONNECTION, USER_AGENT};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, instrument, trace};

use ghpin_core::error::TransportError;
use ghpin_core::{ApiUrl, Error, Result};

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback message when a failing response carries no usable message.
const BAD_CREDENTIALS: &str = "Bad credentials";

/// HTTP transport for GraphQL requests.
///
/// Issues one authenticated POST per query and classifies the response
/// into a success payload or a typed failure. No retries: a failed call
/// surfaces immediately.
#[derive(Debug, Clone)]
pub struct GraphqlTransport {
    client: reqwest::Client,
    endpoint: ApiUrl,
}

impl GraphqlTransport {
    /// Create a transport for the given endpoint, authenticated with the
    /// given bearer token.
    pub fn new(endpoint: ApiUrl, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghpin/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::auth("API token contains invalid header characters"))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Http {
                message: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint this transport is configured for.
    pub fn endpoint(&self) -> &ApiUrl {
        &self.endpoint
    }

    /// Send one GraphQL query with the given variables.
    ///
    /// Returns the decoded response body. A body carrying partial
    /// `errors` alongside partial `data` is deliberately not rejected;
    /// callers extract what they need defensively.
    #[instrument(skip(self, query, variables), fields(endpoint = %self.endpoint))]
    pub async fn send(&self, query: &str, variables: Value) -> Result<Value> {
        trace!(?variables, "GraphQL variables");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(status = %status, "GraphQL response");

        let bytes = response.bytes().await.map_err(transport_error)?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode {
                message: e.to_string(),
            })?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::auth(error_message(&body)));
        }
        if !status.is_success() {
            return Err(Error::api(error_message(&body)));
        }
        if is_unauthenticated(&body) {
            return Err(Error::auth(error_message(&body)));
        }

        Ok(body)
    }
}

/// Classify a reqwest failure into a transport error.
fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: REQUEST_TIMEOUT.as_millis() as u64,
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// The most specific message a failing response body offers:
/// `errors[0].message`, then a flat `message`, then a fixed fallback.
fn error_message(body: &Value) -> String {
    body["errors"][0]["message"]
        .as_str()
        .or_else(|| body["message"].as_str())
        .unwrap_or(BAD_CREDENTIALS)
        .to_string()
}

/// True when a success-status body reports an unauthenticated identity.
fn is_unauthenticated(body: &Value) -> bool {
    body["errors"]
        .as_array()
        .is_some_and(|errors| {
            errors
                .iter()
                .any(|e| e["type"].as_str() == Some("UNAUTHENTICATED"))
        })
}
