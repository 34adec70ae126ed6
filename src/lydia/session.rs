//! Session handle.

use super::client::LydiaAi;
use super::types::SessionInfo;
use crate::Result;
use std::fmt;
use std::time::SystemTime;
use tracing::debug;

/// A read-only snapshot of a Lydia session, bound to the client that produced it.
///
/// The fields reflect the server state as of the create/get call that built
/// this handle. [`LydiaSession::think_thought`] changes the remote session but
/// never these fields; use [`LydiaSession::refresh`] for a fresh snapshot.
///
/// The handle only borrows its client. It never closes the shared transport,
/// and the client cannot be closed while a handle is alive.
#[derive(Clone)]
pub struct LydiaSession<'a> {
    client: &'a LydiaAi,
    info: SessionInfo,
}

/// Older name for [`LydiaSession`].
pub type Session<'a> = LydiaSession<'a>;

impl<'a> LydiaSession<'a> {
    pub(crate) fn new(info: SessionInfo, client: &'a LydiaAi) -> Self {
        Self { client, info }
    }

    pub fn id(&self) -> &str {
        &self.info.session_id
    }

    pub fn language(&self) -> &str {
        &self.info.language
    }

    pub fn available(&self) -> bool {
        self.info.available
    }

    /// Unix timestamp (seconds) at which the session expires.
    pub fn expires(&self) -> i64 {
        self.info.expires
    }

    pub fn expires_at(&self) -> SystemTime {
        self.info.expires_at()
    }

    pub fn info(&self) -> &SessionInfo {
        &self.info
    }

    /// Detach the snapshot, e.g. to store the session id for later.
    pub fn into_info(self) -> SessionInfo {
        self.info
    }

    pub fn client(&self) -> &'a LydiaAi {
        self.client
    }

    /// Send `text` to this session and return the AI's reply.
    pub async fn think_thought(&self, text: &str) -> Result<String> {
        self.client.think_thought(self.id(), text).await
    }

    /// Fetch the current server state as a new handle.
    pub async fn refresh(&self) -> Result<LydiaSession<'a>> {
        self.client.get_session(self.id()).await
    }

    /// Release this handle.
    ///
    /// The underlying transport belongs to the [`LydiaAi`] and stays open for
    /// the client and any other sessions; close it with [`LydiaAi::close`].
    pub fn close(self) {
        debug!(session_id = %self.info.session_id, "lydia session handle released");
    }
}

impl fmt::Display for LydiaSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Debug for LydiaSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LydiaSession")
            .field("info", &self.info)
            .field("endpoint", &self.client.endpoint())
            .finish()
    }
}
