// src/llm/http_client.rs
// Single-attempt HTTP execution against the chat-completion gateway

use crate::error::{PromptForgeError, Result};
use crate::llm::response::extract_api_error;
use reqwest::{Client, StatusCode};
use tracing::{error, warn};

/// Shared HTTP client for gateway calls. Failures are surfaced, never retried.
#[derive(Debug, Clone, Default)]
pub struct GatewayHttpClient {
    client: Client,
}

impl GatewayHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// POST a JSON body with Bearer auth. Returns the response body on success.
    pub async fn execute(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(request_id = %request_id, error = %e, "Gateway request failed");
                PromptForgeError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = %status,
                error = %extract_api_error(&error_body),
                "Gateway returned an error"
            );
            return Err(classify_failure(status));
        }

        Ok(response.text().await?)
    }
}

/// Map a non-success gateway status onto the error taxonomy
pub fn classify_failure(status: StatusCode) -> PromptForgeError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => PromptForgeError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => PromptForgeError::Unavailable,
        other => PromptForgeError::Upstream {
            status: other.as_u16(),
        },
    }
}
