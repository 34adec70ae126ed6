use crate::error_kind::ApiErrorKind;
use crate::transport::TransportError;
use serde_json::Value;
use thiserror::Error;

/// Fallback message when the error body carries none.
pub const UNKNOWN_MESSAGE: &str = "Unknown";

/// Structured error context for debugging malformed responses and bad configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// JSON field or configuration key involved (e.g. `"payload.output"`, `"endpoint"`)
    pub field_path: Option<String>,
    /// Additional detail, usually the underlying parser message
    pub details: Option<String>,
    /// Component that raised the error (e.g. `"api"`, `"lydia"`)
    pub source: Option<String>,
    /// Server-assigned request id, when the failure happened on a response
    pub request_id: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_request_id(mut self, request_id: Option<impl Into<String>>) -> Self {
        self.request_id = request_id.map(Into::into);
        self
    }
}

/// An error reported by the CoffeeHouse service.
///
/// One struct for every kind; dispatch on [`ApiError::kind`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} (HTTP {status_code}): {message}{}", format_request_id(.request_id))]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status_code: u16,
    /// Parsed error body; `None` when the body was not valid JSON.
    pub content: Option<Value>,
    pub request_id: Option<String>,
    /// `content["message"]` when present, otherwise `"Unknown"`.
    pub message: String,
}

impl ApiError {
    pub fn new(
        kind: ApiErrorKind,
        status_code: u16,
        content: Option<Value>,
        request_id: Option<String>,
    ) -> Self {
        let message = derive_message(content.as_ref());
        Self {
            kind,
            status_code,
            content,
            request_id,
            message,
        }
    }

    /// Return the parsed response for a 200, otherwise the mapped error.
    ///
    /// A body that is not JSON always yields an `Unknown` error with no
    /// content, whatever the status.
    pub fn parse_and_raise(
        status_code: u16,
        body: &str,
        request_id: Option<&str>,
    ) -> std::result::Result<Value, ApiError> {
        let request_id = request_id.map(str::to_string);
        let response: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) => {
                return Err(ApiError::new(
                    ApiErrorKind::Unknown,
                    status_code,
                    None,
                    request_id,
                ))
            }
        };
        if status_code != 200 {
            return Err(ApiError::new(
                ApiErrorKind::from_http_status(status_code),
                status_code,
                Some(response),
                request_id,
            ));
        }
        Ok(response)
    }
}

/// See [`ApiError::parse_and_raise`].
pub fn parse_and_raise(
    status_code: u16,
    body: &str,
    request_id: Option<&str>,
) -> std::result::Result<Value, ApiError> {
    ApiError::parse_and_raise(status_code, body, request_id)
}

fn derive_message(content: Option<&Value>) -> String {
    let message = content
        .and_then(Value::as_object)
        .filter(|obj| !obj.is_empty())
        .and_then(|obj| obj.get("message"));
    match message {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => UNKNOWN_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}

fn format_request_id(request_id: &Option<String>) -> String {
    match request_id {
        Some(id) => format!(" [request id: {}]", id),
        None => String::new(),
    }
}

/// Unified error type for the client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed response: {message}{}", format_context(.context))]
    MalformedResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if let Some(ref request_id) = ctx.request_id {
        parts.push(format!("request id: {}", request_id));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn malformed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MalformedResponse {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// The service error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Kind of the service error, if this is one.
    pub fn kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(|e| e.kind)
    }

    /// Request id from the response that caused this error, when known.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Api(e) => e.request_id.as_deref(),
            Error::MalformedResponse { context, .. } => context.request_id.as_deref(),
            _ => None,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::MalformedResponse { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
