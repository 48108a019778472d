use reqwest::Url;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

use super::types::{ChatMessage, ChatRequest, ChatResponse, ModelTag, TagsResponse};
use super::{ChatError, Responder};

pub const DEFAULT_MODEL: &str = "llama3.2:3b";
pub const DEFAULT_CHAT_URL: &str = "http://localhost:11434/api/chat";
/// 3 min for LLM generation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Blocking client for a local Ollama chat endpoint.
///
/// One prompt becomes one non-streaming `/api/chat` request with a single
/// user message; the assistant message content is the response.
pub struct ChatClient {
    http: Client,
    endpoint: Url,
    model: String,
}

impl ChatClient {
    pub fn new(endpoint: &str, model: impl Into<String>) -> Result<Self, ChatError> {
        Self::with_timeout(endpoint, model, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ChatError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one prompt and return the assistant's reply
    pub fn chat(&self, prompt: &str) -> Result<String, ChatError> {
        let req = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending chat request"
        );

        let response = self.http.post(self.endpoint.clone()).json(&req).send()?;
        let body = success_body(response)?;

        let res: ChatResponse = serde_json::from_str(&body)?;
        Ok(res.message.content)
    }

    /// List the models the server has pulled (`GET /api/tags` on the same host)
    pub fn health_check(&self) -> Result<Vec<ModelTag>, ChatError> {
        let url = self
            .endpoint
            .join("/api/tags")
            .map_err(|e| ChatError::InvalidUrl {
                url: self.endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let response = self.http.get(url).send()?;
        let body = success_body(response)?;

        let res: TagsResponse = serde_json::from_str(&body)?;
        Ok(res.models)
    }
}

impl Responder for ChatClient {
    fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        self.chat(prompt)
    }
}

fn success_body(response: Response) -> Result<String, ChatError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ChatError::ServerError {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.text()?)
}
