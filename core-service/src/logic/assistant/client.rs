//! Chat Forwarder
//!
//! Forwards a free-text question to an OpenAI-compatible chat completion
//! backend. Primary model first, then one fixed fallback model; total
//! failure yields a fixed offline reply instead of an error.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fallback::FallbackChain;
use super::prompt::system_prompt;
use crate::constants;

/// Reply used when no backend produced an answer
pub const OFFLINE_MESSAGE: &str = "Sentinel AI is currently offline. Please check your neural link.";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1024;

/// Chat backend configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub primary_model: String,
    pub fallback_model: String,
    /// Per attempt
    pub timeout_seconds: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: constants::get_chat_url(),
            api_key: constants::get_chat_api_key(),
            primary_model: constants::get_chat_model(),
            fallback_model: constants::get_chat_fallback_model(),
            timeout_seconds: constants::get_chat_timeout(),
        }
    }
}

// Request/Response types

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub current_stats: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Error,
}

/// Always success-shaped; `status` tells whether a backend answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub status: ChatStatus,
    pub response: String,
}

impl ChatReply {
    pub fn offline() -> Self {
        Self {
            status: ChatStatus::Error,
            response: OFFLINE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionContent,
}

#[derive(Debug, Deserialize)]
struct CompletionContent {
    content: String,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub enum ChatError {
    NetworkError(String),
    ServerError(u16, String),
    ParseError(String),
    NotConfigured,
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError(e) => write!(f, "Network error: {}", e),
            Self::ServerError(code, body) => write!(f, "Server error {}: {}", code, body),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::NotConfigured => write!(f, "Chat backend API key not configured"),
        }
    }
}

impl std::error::Error for ChatError {}

impl ChatError {
    /// Only a non-success status from the backend moves on to the fallback model
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ServerError(..))
    }
}

// ============================================================================
// FORWARDER
// ============================================================================

pub struct ChatForwarder {
    config: ChatConfig,
    models: FallbackChain<String>,
    http_client: reqwest::Client,
}

impl ChatForwarder {
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        if config.api_key.is_none() {
            log::warn!("Chat backend API key not set. AI chat will answer offline.");
        }

        let models = FallbackChain::new(config.primary_model.clone(), config.fallback_model.clone());

        Ok(Self {
            config,
            models,
            http_client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Forward one question. Never fails: total failure maps to the
    /// offline reply.
    pub async fn chat(&self, request: &ChatRequest) -> ChatReply {
        match self.forward(request).await {
            Ok(text) => ChatReply {
                status: ChatStatus::Success,
                response: text,
            },
            Err(e) => {
                log::warn!("Chat forwarding failed: {}", e);
                ChatReply::offline()
            }
        }
    }

    async fn forward(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let api_key = self.config.api_key.as_deref().ok_or(ChatError::NotConfigured)?;
        let prompt = system_prompt(request.current_stats.as_ref());
        let prompt = prompt.as_str();
        let message = request.message.as_str();

        self.models
            .run(|model| {
                let model = model.clone();
                async move { self.complete(api_key, &model, prompt, message).await }
            }, ChatError::is_retryable)
            .await
    }

    async fn complete(
        &self,
        api_key: &str,
        model: &str,
        system: &str,
        message: &str,
    ) -> Result<String, ChatError> {
        let body = CompletionRequest {
            model,
            messages: [
                CompletionMessage { role: "system", content: system },
                CompletionMessage { role: "user", content: message },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self.http_client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            return Err(ChatError::ServerError(status, detail));
        }

        let completion: CompletionResponse = response.json().await
            .map_err(|e| ChatError::ParseError(e.to_string()))?;

        completion.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatError::ParseError("response has no choices".to_string()))
    }
}
