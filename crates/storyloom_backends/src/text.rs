//! Chat-completion client for narrative text generation.

use crate::BackendConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use storyloom_core::Message;
use storyloom_error::{StoryloomResult, TextError, TextErrorKind};
use storyloom_interface::{Health, HealthStatus, TextGenerator};
use tracing::{debug, error, instrument};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// Chat-completion API client.
///
/// Makes exactly one attempt per call. Creative text calls are not
/// idempotent-safe to blindly retry and a fresh call costs real quota, so
/// failures propagate immediately to the caller.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    config: BackendConfig,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Pull the first completion's content out of a response, rejecting empty
/// or missing content.
fn extract_content(response: ChatCompletionResponse) -> Result<String, TextError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();
    if content.trim().is_empty() {
        return Err(TextError::new(TextErrorKind::MalformedResponse(
            "response contained no completion content".to_string(),
        )));
    }
    Ok(content)
}

impl ChatClient {
    /// Create a new chat client. No network I/O happens here.
    pub fn new(config: BackendConfig) -> Self {
        debug!(model = %config.text_model, "Creating new chat client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a full message list to the chat-completion endpoint.
    #[instrument(skip(self, messages), fields(model = %self.config.text_model))]
    pub async fn complete(&self, messages: &[Message]) -> StoryloomResult<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatCompletionRequest {
            model: &self.config.text_model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        debug!(url = %url, messages = messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat completion request");
                TextError::new(TextErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Text backend returned error");
            return Err(TextError::new(TextErrorKind::Api {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat completion response");
            TextError::new(TextErrorKind::MalformedResponse(e.to_string()))
        })?;

        let content = extract_content(parsed)?;
        debug!(chars = content.len(), "Received narrative text");
        Ok(content)
    }
}

#[async_trait]
impl TextGenerator for ChatClient {
    #[instrument(skip_all)]
    async fn generate_text(&self, system: &str, user: &str) -> StoryloomResult<String> {
        let messages = [Message::system(system), Message::user(user)];
        self.complete(&messages).await
    }

    fn provider_name(&self) -> &'static str {
        "siliconflow"
    }

    fn model_name(&self) -> &str {
        &self.config.text_model
    }
}

#[async_trait]
impl Health for ChatClient {
    /// Probe the backend with a minimal single-message request.
    ///
    /// Spends a small amount of text quota; callers invoke it
    /// deliberately, never as a construction side effect.
    async fn health(&self) -> StoryloomResult<HealthStatus> {
        let probe = [Message::user("你好")];
        match self.complete(&probe).await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy {
                message: e.to_string(),
            }),
        }
    }
}
