// src/handler.rs
// Request handler: topic + category in, prompt or error envelope out

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::category::Category;
use crate::error::{PromptForgeError, Result, StatusHint};
use crate::llm::{GatewayClient, Message};

/// A validated generation request. The topic is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub category: Category,
}

impl GenerationRequest {
    pub fn new(topic: &str, category: impl Into<Category>) -> Result<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PromptForgeError::EmptyTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            category: category.into(),
        })
    }

    pub fn system_instruction(&self) -> &'static str {
        self.category.system_prompt()
    }

    pub fn user_instruction(&self) -> String {
        format!(
            "Generate a high-quality, detailed prompt based on this topic: \"{}\". The prompt should be well-structured, actionable, and ready to use. Format it professionally with clear sections if needed.",
            self.topic
        )
    }

    pub fn messages(&self) -> Vec<Message> {
        vec![
            Message::system(self.system_instruction()),
            Message::user(self.user_instruction()),
        ]
    }
}

/// Uniform JSON envelope returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Prompt {
        prompt: String,
    },
    Error {
        error: String,
        #[serde(rename = "statusHint")]
        status_hint: StatusHint,
    },
}

impl GenerationResult {
    pub fn from_error(err: &PromptForgeError) -> Self {
        Self::Error {
            error: err.user_message(),
            status_hint: err.status_hint(),
        }
    }

    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt { .. })
    }

    /// Convert back into a `Result`, rebuilding the error from its hint
    pub fn into_result(self) -> Result<String> {
        match self {
            Self::Prompt { prompt } => Ok(prompt),
            Self::Error { error, status_hint } => Err(PromptForgeError::Remote {
                message: error,
                hint: status_hint,
            }),
        }
    }
}

impl From<Result<String>> for GenerationResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(prompt) => Self::Prompt { prompt },
            Err(err) => Self::from_error(&err),
        }
    }
}

/// Anything that can turn a request into a prompt
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// In-process handler backed by the chat-completion gateway. Stateless.
pub struct RequestHandler {
    gateway: GatewayClient,
}

impl RequestHandler {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// Validate, generate, and normalize into an envelope
    pub async fn handle(&self, topic: &str, category: &str) -> GenerationResult {
        self.try_handle(topic, category).await.into()
    }

    /// Like `handle` but keeps the typed error (the HTTP layer needs its status)
    pub async fn try_handle(&self, topic: &str, category: &str) -> Result<String> {
        let request = GenerationRequest::new(topic, category)?;
        self.generate(&request).await
    }
}

#[async_trait]
impl PromptGenerator for RequestHandler {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        info!(category = %request.category, topic_len = request.topic.len(), "Generating prompt");
        match self.gateway.chat(request.messages()).await {
            Ok(prompt) => {
                info!(category = %request.category, "Prompt generated successfully");
                Ok(prompt)
            }
            Err(e) => {
                warn!(category = %request.category, error = %e, "Prompt generation failed");
                Err(e)
            }
        }
    }
}
