// src/lib.rs
// PromptForge - turn a topic into a ready-to-use AI prompt

pub mod category;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod handler;
pub mod llm;
pub mod session;
pub mod web;

pub use category::Category;
pub use error::{PromptForgeError, Result};
pub use handler::{GenerationRequest, GenerationResult, PromptGenerator, RequestHandler};
