use crate::api::{Api, Credentials, DEFAULT_ENDPOINT};
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};

/// Builder for [`Api`].
///
/// Values are checked in `build()`: the access key must be non-empty and the
/// endpoint must be an absolute `http`/`https` URL.
#[derive(Debug, Default)]
pub struct ApiBuilder {
    access_key: Option<String>,
    endpoint: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl ApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Base URL for all requests. Trailing slashes are removed.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Take access key and endpoint from existing credentials or another client.
    pub fn credentials_from(mut self, credentials: impl Into<Credentials>) -> Self {
        let credentials = credentials.into();
        self.access_key = Some(credentials.access_key().to_string());
        self.endpoint = Some(credentials.endpoint().to_string());
        self
    }

    /// Use a caller-owned HTTP client instead of creating one.
    ///
    /// Timeouts, proxies and pool sizing are configured on this client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<Api> {
        let access_key = self
            .access_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "access key must be specified",
                    ErrorContext::new().with_field_path("access_key"),
                )
            })?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        validate_endpoint(&endpoint)?;

        let transport = match self.http_client {
            Some(client) => HttpTransport::with_client(client),
            None => HttpTransport::new()?,
        };
        Ok(Api::from_parts(
            Credentials::new(access_key, endpoint),
            transport,
        ))
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let parsed = url::Url::parse(endpoint).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid endpoint {:?}", endpoint),
            ErrorContext::new()
                .with_field_path("endpoint")
                .with_details(e.to_string()),
        )
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::configuration_with_context(
            format!("unsupported endpoint scheme {:?}", other),
            ErrorContext::new().with_field_path("endpoint"),
        )),
    }
}
