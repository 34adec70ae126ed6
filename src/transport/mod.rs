//! HTTP transport for the CoffeeHouse API.
//!
//! A thin layer over `reqwest`: one form-encoded POST per call, returning the
//! status, body text and `x-request-id` header as plain data.

mod http;

pub use http::{HttpTransport, Ownership, RawResponse, REQUEST_ID_HEADER};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The client was closed before this request was issued.
    #[error("transport is closed")]
    Closed,
}
