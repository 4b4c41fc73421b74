//! HTTP transport to the assistant endpoint, over the browser fetch API.

use async_trait::async_trait;
use gloo_net::http::Request;
use realty_chat_core::{ChatApiResponse, ChatExchange, ChatRequest, ChatTransport, TransportError};

pub struct HttpChatTransport {
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpChatTransport {
    async fn send(
        &self,
        message: &str,
        session_id: &str,
    ) -> Result<ChatExchange, TransportError> {
        let body = ChatRequest {
            message,
            session_id,
        };
        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|err| TransportError::Request(err.to_string()))?
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }
        let payload: ChatApiResponse = response
            .json()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))?;
        Ok(ChatExchange::from_api(payload))
    }
}
