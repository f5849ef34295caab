//! Outfit advice via an OpenAI-compatible chat-completions endpoint.
//!
//! [`AdviceClient::advise`] never fails: any upstream problem is logged and
//! replaced by [`FALLBACK_MESSAGE`].

use serde::{Deserialize, Serialize};
use wardrobe_core::advice::{build_conversation, ChatMessage, WeatherContext, FALLBACK_MESSAGE};

/// Sampling temperature sent with every completion request.
const TEMPERATURE: f64 = 0.7;

/// Cap on generated tokens per reply.
const MAX_TOKENS: u32 = 500;

/// HTTP client for the chat-completions API.
pub struct AdviceClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

/// Errors from a single completion attempt.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("Chat API key is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Chat API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Chat API returned no content")]
    EmptyReply,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl AdviceClient {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask for advice on the conversation so far. Returns the fallback text
    /// on any failure.
    pub async fn advise(&self, messages: &[ChatMessage], weather: Option<&WeatherContext>) -> String {
        match self.try_advise(messages, weather).await {
            Ok(reply) => reply,
            Err(AdviceError::MissingApiKey) => {
                tracing::debug!("Chat API key not configured, using fallback reply");
                FALLBACK_MESSAGE.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Outfit advice request failed, using fallback reply");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    /// One completion attempt, surfacing every failure.
    pub async fn try_advise(
        &self,
        messages: &[ChatMessage],
        weather: Option<&WeatherContext>,
    ) -> Result<String, AdviceError> {
        let api_key = self.api_key.as_deref().ok_or(AdviceError::MissingApiKey)?;
        let conversation = build_conversation(messages, weather);

        let body = CompletionRequest {
            model: &self.model,
            messages: &conversation,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AdviceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response.json().await?;
        first_reply(parsed).ok_or(AdviceError::EmptyReply)
    }
}

fn first_reply(response: CompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
