// src/clipboard.rs
// Host clipboard access through platform commands, plus an in-memory clipboard

use std::io::{Read, Write};
use std::process::{Command, Stdio};

use crate::error::{PromptForgeError, Result};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn get_text(&mut self) -> Result<String>;
}

/// Platform clipboard via pbcopy / clip / wl-copy / xclip / xsel
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if cfg!(target_os = "macos") {
            return run_copy_command("pbcopy", &[], text);
        }
        if cfg!(target_os = "windows") {
            return run_copy_command("clip", &[], text);
        }

        run_copy_command("wl-copy", &[], text)
            .or_else(|_| run_copy_command("xclip", &["-selection", "clipboard"], text))
            .or_else(|_| run_copy_command("xsel", &["--clipboard", "--input"], text))
            .map_err(|_| {
                PromptForgeError::Clipboard(
                    "no clipboard command available (tried wl-copy, xclip, xsel)".into(),
                )
            })
    }

    fn get_text(&mut self) -> Result<String> {
        if cfg!(target_os = "macos") {
            return run_paste_command("pbpaste", &[]);
        }
        if cfg!(target_os = "windows") {
            return run_paste_command("powershell", &["-NoProfile", "-Command", "Get-Clipboard -Raw"])
                .map(strip_console_newline);
        }

        run_paste_command("wl-paste", &["--no-newline"])
            .or_else(|_| run_paste_command("xclip", &["-selection", "clipboard", "-o"]))
            .or_else(|_| run_paste_command("xsel", &["--clipboard", "--output"]))
            .map_err(|_| {
                PromptForgeError::Clipboard(
                    "no clipboard command available (tried wl-paste, xclip, xsel)".into(),
                )
            })
    }
}

/// Copy `text`, then read it back and fail unless the clipboard holds exactly `text`
pub fn copy_verified(clipboard: &mut dyn Clipboard, text: &str) -> Result<()> {
    clipboard.set_text(text)?;
    if clipboard.get_text()? == text {
        Ok(())
    } else {
        Err(PromptForgeError::Clipboard(
            "clipboard contents differ after copy".into(),
        ))
    }
}

/// PowerShell terminates its output with one CRLF that is not part of the clipboard
fn strip_console_newline(mut text: String) -> String {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    }
    text
}

fn run_copy_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PromptForgeError::Clipboard(format!("{}: {}", cmd, e)))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PromptForgeError::Clipboard(format!("{}: {}", cmd, e)))?;
    }
    let status = child
        .wait()
        .map_err(|e| PromptForgeError::Clipboard(format!("{}: {}", cmd, e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(PromptForgeError::Clipboard(format!("clipboard command '{}' failed", cmd)))
    }
}

fn run_paste_command(cmd: &str, args: &[&str]) -> Result<String> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PromptForgeError::Clipboard(format!("{}: {}", cmd, e)))?;
    let mut text = String::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout
            .read_to_string(&mut text)
            .map_err(|e| PromptForgeError::Clipboard(format!("{}: {}", cmd, e)))?;
    }
    let status = child
        .wait()
        .map_err(|e| PromptForgeError::Clipboard(format!("{}: {}", cmd, e)))?;
    if status.success() {
        Ok(text)
    } else {
        Err(PromptForgeError::Clipboard(format!("clipboard command '{}' failed", cmd)))
    }
}

/// Process-local clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Result<String> {
        self.contents
            .clone()
            .ok_or_else(|| PromptForgeError::Clipboard("clipboard is empty".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip_is_exact() {
        let mut clipboard = MemoryClipboard::new();
        let text = "  # Title\n\n* bullet with trailing space \n\t";
        clipboard.set_text(text).unwrap();
        assert_eq!(clipboard.get_text().unwrap(), text);
    }

    #[test]
    fn test_memory_empty_is_error() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.get_text().is_err());
    }

    /// Stores what it is given plus a trailing newline
    #[derive(Default)]
    struct NewlineClipboard(String);

    impl Clipboard for NewlineClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.0 = format!("{}\n", text);
            Ok(())
        }
        fn get_text(&mut self) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_copy_verified_exact_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        copy_verified(&mut clipboard, "## Prompt\n\n- step \n").unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "## Prompt\n\n- step \n");
    }

    #[test]
    fn test_copy_verified_rejects_altered_text() {
        let err = copy_verified(&mut NewlineClipboard::default(), "prompt").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::ClipboardFailure);
    }

    #[test]
    fn test_strip_console_newline_removes_one_crlf() {
        assert_eq!(strip_console_newline("line\r\n".into()), "line");
        assert_eq!(strip_console_newline("a\r\nb\r\n\r\n".into()), "a\r\nb\r\n");
        assert_eq!(strip_console_newline("no newline".into()), "no newline");
        assert_eq!(strip_console_newline("unix\n".into()), "unix\n");
    }

    #[test]
    fn test_missing_command_is_clipboard_error() {
        let err = run_copy_command("promptforge-no-such-binary", &[], "x").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::ClipboardFailure);
    }
}
