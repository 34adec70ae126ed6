//! Minimal prelude for application code.

pub use crate::api::{Api, ApiBuilder, Credentials};
pub use crate::error::{ApiError, Error};
pub use crate::error_kind::ApiErrorKind;
pub use crate::lydia::{LydiaAi, LydiaSession, SessionInfo};
pub use crate::Result;
