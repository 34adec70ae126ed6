//! Lydia conversational AI: sessions and thoughts.

mod client;
mod session;
mod types;

pub use client::{LydiaAi, CREATE_SESSION_PATH, DEFAULT_LANGUAGE, GET_SESSION_PATH, THINK_PATH};
pub use session::{LydiaSession, Session};
pub use types::SessionInfo;
