//! Lydia service client.

use super::session::LydiaSession;
use super::types::{decode_payload, SessionInfo, ThoughtPayload};
use crate::api::{Api, Credentials};
use crate::transport::Ownership;
use crate::Result;
use tracing::debug;

pub const CREATE_SESSION_PATH: &str = "v1/lydia/session/create";
pub const GET_SESSION_PATH: &str = "v1/lydia/session/get";
pub const THINK_PATH: &str = "v1/lydia/session/think";

/// Language used by [`LydiaAi::create_session`].
pub const DEFAULT_LANGUAGE: &str = "en";

/// Client for the Lydia conversational AI.
///
/// Sessions returned by this client borrow it, so it cannot be closed (or
/// moved) while any [`LydiaSession`] is alive.
#[derive(Debug)]
pub struct LydiaAi {
    api: Api,
}

impl LydiaAi {
    /// See [`Api::new`]: accepts a raw access key or another client's credentials.
    pub fn new(credentials: impl Into<Credentials>) -> Result<Self> {
        Ok(Self::from_api(Api::new(credentials)?))
    }

    /// See [`Api::with_http_client`].
    pub fn with_http_client(
        credentials: impl Into<Credentials>,
        http_client: reqwest::Client,
    ) -> Result<Self> {
        Ok(Self::from_api(Api::with_http_client(
            credentials,
            http_client,
        )?))
    }

    pub fn from_api(api: Api) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn into_api(self) -> Api {
        self.api
    }

    pub fn access_key(&self) -> &str {
        self.api.access_key()
    }

    pub fn endpoint(&self) -> &str {
        self.api.endpoint()
    }

    pub fn transport_ownership(&self) -> Ownership {
        self.api.transport_ownership()
    }

    pub fn is_closed(&self) -> bool {
        self.api.is_closed()
    }

    /// Create a new session in [`DEFAULT_LANGUAGE`].
    pub async fn create_session(&self) -> Result<LydiaSession<'_>> {
        self.create_session_with_language(DEFAULT_LANGUAGE).await
    }

    /// Create a new session conversing in `language`.
    pub async fn create_session_with_language(&self, language: &str) -> Result<LydiaSession<'_>> {
        let payload = self
            .api
            .request(CREATE_SESSION_PATH, &[("target_language", language)])
            .await?;
        let info: SessionInfo =
            decode_payload(payload, CREATE_SESSION_PATH, SessionInfo::SCHEMA)?;
        debug!(session_id = %info.session_id, language = %info.language, "lydia session created");
        Ok(LydiaSession::new(info, self))
    }

    /// Fetch an existing session by id.
    pub async fn get_session(&self, session_id: &str) -> Result<LydiaSession<'_>> {
        let payload = self
            .api
            .request(GET_SESSION_PATH, &[("session_id", session_id)])
            .await?;
        let info: SessionInfo = decode_payload(payload, GET_SESSION_PATH, SessionInfo::SCHEMA)?;
        Ok(LydiaSession::new(info, self))
    }

    /// Send `text` to the session and return the AI's reply.
    pub async fn think_thought(&self, session_id: &str, text: &str) -> Result<String> {
        let payload = self
            .api
            .request(THINK_PATH, &[("session_id", session_id), ("input", text)])
            .await?;
        let thought: ThoughtPayload =
            decode_payload(payload, THINK_PATH, ThoughtPayload::SCHEMA)?;
        Ok(thought.output)
    }

    /// Close the HTTP transport. See [`Api::close`].
    pub fn close(&mut self) -> bool {
        self.api.close()
    }
}

impl AsRef<Api> for LydiaAi {
    fn as_ref(&self) -> &Api {
        &self.api
    }
}

impl From<Api> for LydiaAi {
    fn from(api: Api) -> Self {
        Self::from_api(api)
    }
}

impl From<&LydiaAi> for Credentials {
    fn from(client: &LydiaAi) -> Self {
        Credentials::from(&client.api)
    }
}
