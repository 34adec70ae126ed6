//! Error kinds reported by the CoffeeHouse API.
//!
//! The service signals failures through the HTTP status code. Each mapped
//! status has a dedicated kind; everything else (including bodies that are not
//! JSON at all) lands in [`ApiErrorKind::Unknown`].
//!
//! | Status | Kind              | Name                |
//! |--------|-------------------|---------------------|
//! | 400    | `SessionInvalid`  | `session_invalid`   |
//! | 401    | `InvalidApiKey`   | `invalid_api_key`   |
//! | 403    | `ApiSuspended`    | `api_suspended`     |
//! | 404    | `SessionNotFound` | `session_not_found` |
//! | 503    | `AiError`         | `ai_error`          |
//! | other  | `Unknown`         | `unknown`           |
//!
//! ## Example
//!
//! ```rust
//! use coffeehouse::ApiErrorKind;
//!
//! let kind = ApiErrorKind::from_http_status(401);
//! assert_eq!(kind, ApiErrorKind::InvalidApiKey);
//! assert_eq!(kind.name(), "invalid_api_key");
//! assert_eq!(ApiErrorKind::from_http_status(500), ApiErrorKind::Unknown);
//! ```

use std::fmt;

/// Discriminant of an [`ApiError`](crate::ApiError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Unmapped status, or a response body that could not be parsed.
    Unknown,
    /// 400: the session exists but can no longer be used.
    SessionInvalid,
    /// 401: the access key was rejected.
    InvalidApiKey,
    /// 403: the access key has been suspended.
    ApiSuspended,
    /// 404: no session with the given id.
    SessionNotFound,
    /// 503: the AI backend failed to produce a response.
    AiError,
}

impl ApiErrorKind {
    /// Maps an HTTP status to its kind by exact match.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::SessionInvalid,
            401 => Self::InvalidApiKey,
            403 => Self::ApiSuspended,
            404 => Self::SessionNotFound,
            503 => Self::AiError,
            _ => Self::Unknown,
        }
    }

    /// The status code this kind is mapped from, `None` for `Unknown`.
    #[inline]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::SessionInvalid => Some(400),
            Self::InvalidApiKey => Some(401),
            Self::ApiSuspended => Some(403),
            Self::SessionNotFound => Some(404),
            Self::AiError => Some(503),
            Self::Unknown => None,
        }
    }

    /// Snake-case identifier (e.g. `"session_not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::SessionInvalid => "session_invalid",
            Self::InvalidApiKey => "invalid_api_key",
            Self::ApiSuspended => "api_suspended",
            Self::SessionNotFound => "session_not_found",
            Self::AiError => "ai_error",
        }
    }

    /// Whether the error concerns the session rather than the caller's key.
    #[inline]
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::SessionInvalid | Self::SessionNotFound)
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
