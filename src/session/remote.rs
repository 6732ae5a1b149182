// src/session/remote.rs
// Generator that calls a running PromptForge HTTP surface

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{PromptForgeError, Result};
use crate::handler::{GenerationRequest, GenerationResult, PromptGenerator};

pub struct RemoteGenerator {
    endpoint: String,
    client: Client,
    /// Sent as Bearer auth when the endpoint sits behind a gateway
    token: Option<String>,
}

impl RemoteGenerator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }
}

#[async_trait]
impl PromptGenerator for RemoteGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let mut builder = self.client.post(&self.endpoint).json(&json!({
            "topic": request.topic,
            "category": request.category,
        }));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "Handler unreachable");
            PromptForgeError::Transport(e)
        })?;
        let status = response.status();
        let body = response.text().await?;
        debug!(endpoint = %self.endpoint, status = %status, "Handler responded");

        // Error envelopes arrive with non-2xx statuses; the body carries the detail
        let envelope: GenerationResult = serde_json::from_str(&body).map_err(|e| {
            PromptForgeError::MalformedResponse(format!("handler replied {}: {}", status, e))
        })?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_blank_token_ignored() {
        let remote = RemoteGenerator::new("http://localhost:8787/generate-prompt")
            .with_token(Some("  ".into()));
        assert!(remote.token.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_handler_is_transport_failure() {
        let remote = RemoteGenerator::new("http://127.0.0.1:1/generate-prompt");
        let request = GenerationRequest::new("topic", "coding").unwrap();
        let err = remote.generate(&request).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
        assert_eq!(err.user_message(), crate::error::TRANSPORT_FAILURE_MESSAGE);
    }
}
