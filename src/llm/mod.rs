// src/llm/mod.rs
// Chat-completion gateway client (OpenAI-compatible wire format)

mod gateway;
mod http_client;
mod request;
mod response;

pub use gateway::GatewayClient;
pub use http_client::{GatewayHttpClient, classify_failure};
pub use request::{ChatRequest, Message};
pub use response::{ChatResponse, ResponseChoice, extract_api_error, parse_chat_response};
