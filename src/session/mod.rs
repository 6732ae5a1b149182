// src/session/mod.rs
// Session controller: drives one generation at a time and owns the history

mod history;
mod remote;

pub use history::{HISTORY_LIMIT, History, HistoryEntry};
pub use remote::RemoteGenerator;

use std::fmt;
use tracing::{debug, warn};

use crate::category::Category;
use crate::clipboard::{Clipboard, copy_verified};
use crate::error::{PromptForgeError, Result};
use crate::handler::{GenerationRequest, PromptGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Generating,
    ResultShown,
}

/// User-visible status line produced by a session action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Info(m) | Self::Error(m) => m,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(m) => write!(f, "✔ {}", m),
            Self::Info(m) => write!(f, "· {}", m),
            Self::Error(m) => write!(f, "✖ {}", m),
        }
    }
}

/// Per-session state. Owned by the UI and passed by `&mut`; nothing is shared.
#[derive(Debug)]
pub struct SessionController {
    state: SessionState,
    current_prompt: Option<String>,
    history: History,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            current_prompt: None,
            history: History::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_prompt(&self) -> Option<&str> {
        self.current_prompt.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the generate action is enabled
    pub fn can_submit(&self) -> bool {
        self.state != SessionState::Generating
    }

    /// Validate and enter `Generating`. Rejections leave the state untouched.
    pub fn begin(&mut self, topic: &str, category: impl Into<Category>) -> Result<GenerationRequest> {
        if !self.can_submit() {
            return Err(PromptForgeError::Busy);
        }
        let request = GenerationRequest::new(topic, category)?;
        self.state = SessionState::Generating;
        debug!(category = %request.category, "Session generating");
        Ok(request)
    }

    /// Apply the generator's outcome for a request started with `begin`
    pub fn finish(
        &mut self,
        request: &GenerationRequest,
        outcome: Result<String>,
    ) -> Result<&HistoryEntry> {
        match outcome {
            Ok(prompt) => {
                self.state = SessionState::ResultShown;
                let entry = self.history.push(&request.topic, request.category, &prompt);
                self.current_prompt = Some(prompt);
                Ok(entry)
            }
            Err(e) => {
                warn!(error = %e, "Generation failed, session back to idle");
                self.state = SessionState::Idle;
                Err(e)
            }
        }
    }

    /// Run one full generation cycle
    pub async fn submit(
        &mut self,
        generator: &dyn PromptGenerator,
        topic: &str,
        category: impl Into<Category>,
    ) -> Result<&HistoryEntry> {
        let request = self.begin(topic, category)?;
        let outcome = generator.generate(&request).await;
        self.finish(&request, outcome)
    }

    /// Show a history entry's prompt as current. No generator call.
    pub fn select(&mut self, id: &str) -> Option<&str> {
        let prompt = self.history.get(id)?.prompt.clone();
        Some(self.show(prompt))
    }

    /// Same as `select`, by 1-based position (most recent first)
    pub fn select_nth(&mut self, position: usize) -> Option<&str> {
        let prompt = self.history.nth(position)?.prompt.clone();
        Some(self.show(prompt))
    }

    fn show(&mut self, prompt: String) -> &str {
        if self.state != SessionState::Generating {
            self.state = SessionState::ResultShown;
        }
        self.current_prompt.insert(prompt)
    }

    pub fn copy_current(&self, clipboard: &mut dyn Clipboard) -> Notice {
        let Some(prompt) = self.current_prompt() else {
            return Notice::Info("Nothing to copy yet".into());
        };
        match copy_verified(clipboard, prompt) {
            Ok(()) => Notice::Success("Prompt copied to clipboard!".into()),
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                Notice::Error(e.user_message())
            }
        }
    }

    pub fn copy_entry(&self, position: usize, clipboard: &mut dyn Clipboard) -> Notice {
        let Some(entry) = self.history.nth(position) else {
            return Notice::Error(format!("No history entry #{}", position));
        };
        match copy_verified(clipboard, &entry.prompt) {
            Ok(()) => Notice::Success("Prompt copied!".into()),
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                Notice::Error("Failed to copy".into())
            }
        }
    }
}
