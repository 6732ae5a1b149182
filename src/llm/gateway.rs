// src/llm/gateway.rs
// Gateway client: one chat-completion call per generation

use crate::config::GatewayConfig;
use crate::error::{PromptForgeError, Result};
use crate::llm::http_client::GatewayHttpClient;
use crate::llm::request::{ChatRequest, Message};
use crate::llm::response::parse_chat_response;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

pub struct GatewayClient {
    config: GatewayConfig,
    http: GatewayHttpClient,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: GatewayHttpClient::new(),
        }
    }

    /// Send messages and return the first choice's content
    #[instrument(skip(self, messages), fields(request_id, model = %self.config.model, message_count = messages.len()))]
    pub async fn chat(&self, messages: Vec<Message>) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| PromptForgeError::Config("PROMPTFORGE_API_KEY not configured".into()))?;

        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();
        Span::current().record("request_id", &request_id);

        info!(request_id = %request_id, "Starting gateway chat request");

        let body = serde_json::to_string(&ChatRequest::new(&self.config.model, messages))?;
        debug!(request_id = %request_id, "Gateway request: {}", body);

        let response_body = self
            .http
            .execute(&request_id, &self.config.api_url, api_key, body)
            .await?;
        let content = parse_chat_response(&response_body)?;

        info!(
            request_id = %request_id,
            duration_ms = start_time.elapsed().as_millis() as u64,
            content_len = content.len(),
            "Gateway chat complete"
        );

        Ok(content)
    }
}
