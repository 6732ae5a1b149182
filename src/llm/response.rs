// src/llm/response.rs
// OpenAI-compatible chat response parsing

use crate::error::{PromptForgeError, Result};
use serde::Deserialize;

/// Non-streaming chat response. Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ResponseChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract `choices[0].message.content` verbatim
pub fn parse_chat_response(response_body: &str) -> Result<String> {
    let data: ChatResponse = serde_json::from_str(response_body)
        .map_err(|e| PromptForgeError::MalformedResponse(format!("failed to parse body: {}", e)))?;

    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PromptForgeError::MalformedResponse("response has no choices".into()))?;

    choice
        .message
        .content
        .ok_or_else(|| PromptForgeError::MalformedResponse("first choice has no content".into()))
}

/// Pull a readable message out of an upstream error body, for logs
pub fn extract_api_error(body: &str) -> String {
    #[derive(Debug, Deserialize)]
    struct ErrorEnvelope {
        error: Option<ApiError>,
    }
    #[derive(Debug, Deserialize)]
    struct ApiError {
        message: Option<String>,
        #[serde(rename = "type")]
        kind: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(err) = parsed.error
    {
        let message = err.message.unwrap_or_else(|| "unknown error".to_string());
        return match err.kind {
            Some(kind) => format!("{} (type={})", message, kind),
            None => message,
        };
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_simple_response() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": "Hello, world!"}}]}"#;
        assert_eq!(parse_chat_response(json).unwrap(), "Hello, world!");
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let json = r#"{"choices": [{"message": {"content": "  X\n\n"}}]}"#;
        assert_eq!(parse_chat_response(json).unwrap(), "  X\n\n");
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let json = r#"{"choices": [{"message": {"content": "first"}}, {"message": {"content": "second"}}]}"#;
        assert_eq!(parse_chat_response(json).unwrap(), "first");
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_chat_response("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_parse_empty_choices() {
        let err = parse_chat_response(r#"{"choices": []}"#).unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_parse_missing_fields() {
        for body in [
            r#"{}"#,
            r#"{"choices": [{}]}"#,
            r#"{"choices": [{"message": {}}]}"#,
            r#"{"choices": [{"message": {"content": null}}]}"#,
        ] {
            let err = parse_chat_response(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedResponse, "body {}", body);
        }
    }

    #[test]
    fn test_extract_api_error_envelope() {
        let body = r#"{"error": {"message": "quota exhausted", "type": "billing"}}"#;
        assert_eq!(extract_api_error(body), "quota exhausted (type=billing)");
    }

    #[test]
    fn test_extract_api_error_plain_body() {
        assert_eq!(extract_api_error(" upstream down \n"), "upstream down");
    }
}
