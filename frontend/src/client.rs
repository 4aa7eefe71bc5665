//! gloo-net implementation of the chat API

use crate::utils;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::api::endpoints;
use shared::{
    ApiClientConfig, ApiError, ChatApi, CreateSessionRequest, MessagesResponse, SessionInfo, Turn,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpChatApi {
    config: ApiClientConfig,
}

impl HttpChatApi {
    pub fn new(config: ApiClientConfig) -> Self {
        Self { config }
    }

    /// Client for the server that served this page
    pub fn from_location() -> Self {
        Self::new(ApiClientConfig::new(utils::get_base_url()))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.config.url(endpoint))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&impl serde::Serialize>,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.config.url(endpoint));
        let response = match body {
            Some(body) => request
                .json(body)
                .map_err(|e| ApiError::Parse(e.to_string()))?
                .send()
                .await,
            None => request.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        parse(response).await
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), message));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

impl ChatApi for HttpChatApi {
    async fn load_session_info(&self, session_id: &str) -> Result<SessionInfo, ApiError> {
        self.get(&endpoints::session_info(session_id)).await
    }

    async fn load_messages(&self, session_id: &str) -> Result<Vec<Turn>, ApiError> {
        let data: MessagesResponse = self.get(&endpoints::session_messages(session_id)).await?;
        Ok(data.messages)
    }

    async fn send_message(&self, session_id: &str, turn: &Turn) -> Result<Turn, ApiError> {
        self.post(&endpoints::session_messages(session_id), Some(turn))
            .await
    }

    async fn regenerate(&self, session_id: &str) -> Result<Turn, ApiError> {
        self.post(&endpoints::session_regenerate(session_id), None::<&()>)
            .await
    }

    async fn create_session(&self, req: &CreateSessionRequest) -> Result<SessionInfo, ApiError> {
        self.post(endpoints::SESSIONS, Some(req)).await
    }
}
