use std::fmt;

/// Base URL used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.intellivoid.net/coffeehouse";

/// Access key and endpoint, fixed for the lifetime of a client.
///
/// Converting from an existing client copies its values verbatim; the new
/// client never shares the other one's HTTP transport.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    endpoint: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Base URL without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }
}

impl From<&str> for Credentials {
    fn from(access_key: &str) -> Self {
        Self::new(access_key, DEFAULT_ENDPOINT)
    }
}

impl From<String> for Credentials {
    fn from(access_key: String) -> Self {
        Self::new(access_key, DEFAULT_ENDPOINT)
    }
}

impl From<&Credentials> for Credentials {
    fn from(other: &Credentials) -> Self {
        other.clone()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &redact(&self.access_key))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn redact(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if visible.len() == key.len() {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}
