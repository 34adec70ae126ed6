//! # coffeehouse
//!
//! Async client for the CoffeeHouse API and its Lydia conversational AI.
//!
//! ## Overview
//!
//! The library is a thin, typed layer over the service's HTTP interface:
//! it authenticates every request with an access key, sends form-encoded
//! POSTs and turns the service's JSON error envelope into an [`ApiError`]
//! with a dispatchable [`ApiErrorKind`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coffeehouse::LydiaAi;
//!
//! #[tokio::main]
//! async fn main() -> coffeehouse::Result<()> {
//!     let mut lydia = LydiaAi::new("your-access-key")?;
//!
//!     {
//!         let session = lydia.create_session().await?;
//!         println!("session {} ({})", session, session.language());
//!
//!         let reply = session.think_thought("Hello!").await?;
//!         println!("{reply}");
//!     }
//!
//!     lydia.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Service errors arrive as [`Error::Api`]. Match on the kind for
//! differentiated handling:
//!
//! ```rust,no_run
//! # async fn run(lydia: &coffeehouse::LydiaAi) {
//! use coffeehouse::ApiErrorKind;
//!
//! match lydia.get_session("abc123").await {
//!     Ok(session) => println!("available: {}", session.available()),
//!     Err(e) if e.kind() == Some(ApiErrorKind::SessionNotFound) => println!("gone"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Credentials, builder and the base [`Api`] client |
//! | [`lydia`] | Lydia service client and session handles |
//! | [`transport`] | Form-POST transport over `reqwest` |
//! | [`error_kind`] | Status-code to error-kind mapping |
//!
//! No retries, timeouts or backoff are applied by this crate. Inject a
//! configured `reqwest::Client` through [`ApiBuilder::http_client`] to control
//! timeouts and pooling.

pub mod api;
pub mod error_kind;
pub mod lydia;
pub mod prelude;
pub mod transport;

pub use api::{Api, ApiBuilder, Credentials, DEFAULT_ENDPOINT};
pub use error_kind::ApiErrorKind;
pub use lydia::{LydiaAi, LydiaSession, Session, SessionInfo};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{parse_and_raise, ApiError, Error, ErrorContext};
