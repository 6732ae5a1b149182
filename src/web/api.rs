// src/web/api.rs
// Endpoint handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;

use super::AppState;
use crate::error::PromptForgeError;
use crate::handler::GenerationResult;

/// Inbound body. Missing fields fall through to validation and the category default.
#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub topic: String,
    /// Any JSON value; only a string can name a category
    #[serde(default)]
    pub category: Option<Value>,
}

impl GenerateBody {
    /// Category name as sent, empty when absent or not a string (resolves to coding)
    pub fn category_name(&self) -> &str {
        match &self.category {
            Some(Value::String(name)) => name,
            _ => "",
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn generate_prompt(
    State(state): State<AppState>,
    body: Result<Json<GenerateBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(&PromptForgeError::InvalidRequest(rejection.body_text()));
        }
    };

    match state.handler.try_handle(&body.topic, body.category_name()).await {
        Ok(prompt) => (StatusCode::OK, Json(GenerationResult::Prompt { prompt })).into_response(),
        Err(e) => {
            error!(error = %e, kind = ?e.kind(), "Error in generate-prompt");
            error_response(&e)
        }
    }
}

fn error_response(err: &PromptForgeError) -> Response {
    (err.http_status(), Json(GenerationResult::from_error(err))).into_response()
}
