use super::TransportError;
use crate::{Error, ErrorContext, Result};
use reqwest::header::HeaderMap;
use tracing::debug;

/// Response header carrying the server-side correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Who is responsible for the underlying `reqwest::Client`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Created by this transport.
    Owned,
    /// Supplied by the caller, who keeps using their own handle after close.
    Injected,
}

/// A response described as plain data, built once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    pub request_id: Option<String>,
}

/// Form-POST transport over a pooled `reqwest::Client`.
///
/// Closing drops this transport's client handle. `reqwest` releases the pool
/// once the last handle is gone, so an injected client stays usable by
/// whoever injected it.
#[derive(Debug)]
pub struct HttpTransport {
    client: Option<reqwest::Client>,
    ownership: Ownership,
}

impl HttpTransport {
    /// Create a transport with its own client (reqwest defaults, no timeout).
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to create HTTP client: {}", e),
                ErrorContext::new().with_source("transport"),
            )
        })?;
        Ok(Self {
            client: Some(client),
            ownership: Ownership::Owned,
        })
    }

    /// Wrap a caller-supplied client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Some(client),
            ownership: Ownership::Injected,
        }
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    /// POST `fields` as `application/x-www-form-urlencoded` and read the whole body.
    pub async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> std::result::Result<RawResponse, TransportError> {
        let client = self.client.as_ref().ok_or(TransportError::Closed)?;
        let response = client.post(url).form(fields).send().await?;
        let status = response.status().as_u16();
        let request_id = request_id(response.headers());
        let body = response.text().await?;
        debug!(url, status, request_id = ?request_id, "coffeehouse response");
        Ok(RawResponse {
            status,
            body,
            request_id,
        })
    }

    /// Release the client handle. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        self.client.take().is_some()
    }
}

fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
