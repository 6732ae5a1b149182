// src/cli/repl.rs
// Line-oriented session UI over a SessionController

use anyhow::Result;
use chrono::Local;
use std::io::{BufRead, Write};

use crate::category::Category;
use crate::clipboard::Clipboard;
use crate::handler::PromptGenerator;
use crate::session::{HistoryEntry, Notice, SessionController};

const HELP: &str = "\
Type a topic and press Enter to generate a prompt.
Commands:
  :category <name>  switch category (coding, art, business, research, fun)
  :categories       list categories
  :history          list recent prompts
  :show <n>         show history entry n
  :copy [n]         copy the current prompt, or history entry n
  :help             show this help
  :quit             leave the session";

const PREVIEW_CHARS: usize = 72;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Generate(String),
    SetCategory(String),
    Categories,
    History,
    Show(usize),
    Copy(Option<usize>),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.trim_start().strip_prefix(':') else {
        return ReplCommand::Generate(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("q" | "quit" | "exit", _) => ReplCommand::Quit,
        ("h" | "help", _) => ReplCommand::Help,
        ("categories", _) => ReplCommand::Categories,
        ("category" | "c", Some(value)) => ReplCommand::SetCategory(value.to_string()),
        ("category" | "c", None) => ReplCommand::Invalid("usage: :category <name>".into()),
        ("history", _) => ReplCommand::History,
        ("show", Some(n)) => match n.parse() {
            Ok(n) => ReplCommand::Show(n),
            Err(_) => ReplCommand::Invalid(format!("not a history number: {}", n)),
        },
        ("show", None) => ReplCommand::Invalid("usage: :show <n>".into()),
        ("copy", None) => ReplCommand::Copy(None),
        ("copy", Some(n)) => match n.parse() {
            Ok(n) => ReplCommand::Copy(Some(n)),
            Err(_) => ReplCommand::Invalid(format!("not a history number: {}", n)),
        },
        (other, _) => ReplCommand::Invalid(format!("unknown command :{} (try :help)", other)),
    }
}

/// Drive a session until `:quit` or end of input
pub async fn run_session<R: BufRead, W: Write>(
    session: &mut SessionController,
    generator: &dyn PromptGenerator,
    clipboard: &mut dyn Clipboard,
    mut category: Category,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "PromptForge session (:help to list commands)")?;
    write_prompt_marker(output, category)?;

    for line in input.lines() {
        match parse_line(&line?) {
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(output, "{}", HELP)?,
            ReplCommand::Categories => {
                for c in Category::ALL {
                    let marker = if c == category { "*" } else { " " };
                    writeln!(output, "{} {} {:<9} {}", marker, c.emoji(), c.as_str(), c.label())?;
                }
            }
            ReplCommand::SetCategory(name) => {
                category = Category::parse_or_default(&name);
                if category.as_str() != name.trim().to_lowercase() {
                    writeln!(
                        output,
                        "{}",
                        Notice::Info(format!("Unknown category '{}', using {}", name, category))
                    )?;
                } else {
                    writeln!(
                        output,
                        "{}",
                        Notice::Success(format!("Category: {} {}", category.emoji(), category.label()))
                    )?;
                }
            }
            ReplCommand::History => write_history(session.history().iter(), output)?,
            ReplCommand::Show(n) => match session.select_nth(n) {
                Some(prompt) => write_result(prompt, output)?,
                None => writeln!(output, "{}", Notice::Error(format!("No history entry #{}", n)))?,
            },
            ReplCommand::Copy(None) => writeln!(output, "{}", session.copy_current(clipboard))?,
            ReplCommand::Copy(Some(n)) => writeln!(output, "{}", session.copy_entry(n, clipboard))?,
            ReplCommand::Invalid(message) => writeln!(output, "{}", Notice::Error(message))?,
            ReplCommand::Generate(topic) => {
                if session.can_submit() && !topic.trim().is_empty() {
                    writeln!(output, "Generating...")?;
                    output.flush()?;
                }
                match session.submit(generator, &topic, category).await {
                    Ok(entry) => {
                        let prompt = entry.prompt.clone();
                        write_result(&prompt, output)?;
                        writeln!(output, "{}", Notice::Success("Prompt generated successfully!".into()))?;
                    }
                    Err(e) => writeln!(output, "{}", Notice::Error(e.user_message()))?,
                }
            }
        }
        write_prompt_marker(output, category)?;
    }

    Ok(())
}

fn write_prompt_marker<W: Write>(output: &mut W, category: Category) -> Result<()> {
    write!(output, "{} {}> ", category.emoji(), category.as_str())?;
    output.flush()?;
    Ok(())
}

fn write_result<W: Write>(prompt: &str, output: &mut W) -> Result<()> {
    writeln!(output, "── Generated Prompt ──")?;
    writeln!(output, "{}", prompt)?;
    writeln!(output, "──────────────────────")?;
    Ok(())
}

fn write_history<'a, W: Write>(
    entries: impl Iterator<Item = &'a HistoryEntry>,
    output: &mut W,
) -> Result<()> {
    let mut empty = true;
    for (idx, entry) in entries.enumerate() {
        empty = false;
        writeln!(
            output,
            "{:>2}. {} {}  [{}]",
            idx + 1,
            entry.category.emoji(),
            entry.topic,
            entry.timestamp.with_timezone(&Local).format("%H:%M:%S")
        )?;
        writeln!(output, "    {}", preview(&entry.prompt))?;
    }
    if empty {
        writeln!(output, "Your prompt history will appear here")?;
    }
    Ok(())
}

/// First line of a prompt, cut to a fixed number of characters
fn preview(prompt: &str) -> String {
    let first_line = prompt.lines().find(|l| !l.trim().is_empty()).unwrap_or_default().trim();
    if first_line.chars().count() > PREVIEW_CHARS {
        let cut: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        first_line.to_string()
    }
}
