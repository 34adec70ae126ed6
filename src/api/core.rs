use crate::api::{ApiBuilder, Credentials};
use crate::transport::{HttpTransport, Ownership};
use crate::{ApiError, Error, ErrorContext, Result};
use serde_json::Value;
use tracing::{info, warn};

/// Form field carrying the access key.
pub const ACCESS_KEY_FIELD: &str = "access_key";

/// Success envelope field holding the operation result.
pub const PAYLOAD_FIELD: &str = "payload";

/// The `payload` of a success envelope with the request id of the response that carried it.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub value: Value,
    pub request_id: Option<String>,
}

/// Base client: credentials plus an HTTP transport.
///
/// `Api` can be used on its own as a holder for the access key, or wrapped by
/// a service client. Concurrent calls through `&Api` share one connection
/// pool and are not ordered relative to each other.
#[derive(Debug)]
pub struct Api {
    credentials: Credentials,
    transport: HttpTransport,
}

impl Api {
    /// Create a client with its own HTTP transport.
    ///
    /// Accepts a raw access key (default endpoint) or another client's
    /// credentials, e.g. `Api::new(&other)`.
    pub fn new(credentials: impl Into<Credentials>) -> Result<Self> {
        ApiBuilder::new().credentials_from(credentials).build()
    }

    /// Create a client over a caller-owned `reqwest::Client`.
    ///
    /// [`Api::close`] only drops this client's handle; the caller's copy keeps working.
    pub fn with_http_client(
        credentials: impl Into<Credentials>,
        http_client: reqwest::Client,
    ) -> Result<Self> {
        ApiBuilder::new()
            .credentials_from(credentials)
            .http_client(http_client)
            .build()
    }

    pub fn builder() -> ApiBuilder {
        ApiBuilder::new()
    }

    pub(crate) fn from_parts(credentials: Credentials, transport: HttpTransport) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn access_key(&self) -> &str {
        self.credentials.access_key()
    }

    pub fn endpoint(&self) -> &str {
        self.credentials.endpoint()
    }

    pub fn transport_ownership(&self) -> Ownership {
        self.transport.ownership()
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_closed()
    }

    /// POST `fields` plus the access key to `{endpoint}/{path}` and return the payload.
    pub async fn send(&self, path: &str, fields: &[(&str, &str)]) -> Result<Value> {
        Ok(self.send_form(path, true, fields).await?.value)
    }

    /// Like [`Api::send`] but without injecting the access key.
    pub async fn send_without_key(&self, path: &str, fields: &[(&str, &str)]) -> Result<Value> {
        Ok(self.send_form(path, false, fields).await?.value)
    }

    /// Like [`Api::send`], keeping the response's request id for later diagnostics.
    pub async fn request(&self, path: &str, fields: &[(&str, &str)]) -> Result<Payload> {
        self.send_form(path, true, fields).await
    }

    async fn send_form(
        &self,
        path: &str,
        include_access_key: bool,
        fields: &[(&str, &str)],
    ) -> Result<Payload> {
        let mut form: Vec<(&str, &str)> = fields.to_vec();
        if include_access_key {
            form.retain(|(name, _)| *name != ACCESS_KEY_FIELD);
            form.push((ACCESS_KEY_FIELD, self.credentials.access_key()));
        }

        let url = self.credentials.url_for(path);
        let raw = self.transport.post_form(&url, &form).await?;

        let response = ApiError::parse_and_raise(raw.status, &raw.body, raw.request_id.as_deref())
            .map_err(|e| {
                warn!(
                    path,
                    status = e.status_code,
                    kind = %e.kind,
                    request_id = ?e.request_id,
                    "coffeehouse error: {}",
                    e.message
                );
                e
            })?;
        let value = extract_payload(response, path, raw.request_id.clone())?;
        Ok(Payload {
            value,
            request_id: raw.request_id,
        })
    }

    /// Release this client's HTTP transport.
    ///
    /// Safe to call repeatedly: returns `true` only on the call that actually
    /// closed it. Requests sent afterwards fail with
    /// [`TransportError::Closed`](crate::transport::TransportError::Closed).
    pub fn close(&mut self) -> bool {
        let closed = self.transport.close();
        if closed {
            info!(
                endpoint = self.credentials.endpoint(),
                ownership = ?self.transport.ownership(),
                "coffeehouse transport closed"
            );
        }
        closed
    }
}

impl From<&Api> for Credentials {
    fn from(api: &Api) -> Self {
        api.credentials.clone()
    }
}

fn extract_payload(mut response: Value, path: &str, request_id: Option<String>) -> Result<Value> {
    match response.get_mut(PAYLOAD_FIELD) {
        Some(payload) => Ok(payload.take()),
        None => Err(Error::malformed_with_context(
            format!("response to {} has no payload", path),
            ErrorContext::new()
                .with_field_path(PAYLOAD_FIELD)
                .with_source("api")
                .with_request_id(request_id),
        )),
    }
}
