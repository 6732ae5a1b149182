// src/cli/mod.rs
// CLI definitions for PromptForge commands

use clap::{Args, Parser, Subcommand};

pub mod repl;

pub use repl::{ReplCommand, parse_line, run_session};

use crate::config::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "promptforge")]
#[command(about = "Turn your ideas into ready-to-use AI prompts")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP generation endpoint
    Serve {
        /// Address to bind
        #[arg(long, env = "PROMPTFORGE_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PROMPTFORGE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        #[command(flatten)]
        gateway: GatewayArgs,
    },

    /// Generate one prompt and print it
    Generate {
        /// Topic or idea (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,

        /// Category: coding, art, business, research, fun
        #[arg(short, long, default_value = "coding")]
        category: String,

        /// Also copy the prompt to the clipboard
        #[arg(long)]
        copy: bool,

        #[command(flatten)]
        source: GeneratorArgs,
    },

    /// Interactive session with history
    Session {
        /// Starting category
        #[arg(short, long, default_value = "coding")]
        category: String,

        #[command(flatten)]
        source: GeneratorArgs,
    },

    /// List available categories
    Categories,
}

/// Where generation happens. Without `--endpoint` the gateway is called in-process.
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// URL of a running `promptforge serve` generate endpoint
    #[arg(long, env = "PROMPTFORGE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Bearer token sent to --endpoint
    #[arg(long, env = "PROMPTFORGE_ENDPOINT_TOKEN", hide_env_values = true)]
    pub endpoint_token: Option<String>,

    #[command(flatten)]
    pub gateway: GatewayArgs,
}

/// Upstream gateway overrides on top of the environment
#[derive(Args, Debug, Clone, Default)]
pub struct GatewayArgs {
    /// Gateway API key (overrides PROMPTFORGE_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Chat-completions URL (overrides PROMPTFORGE_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Model name (overrides PROMPTFORGE_MODEL)
    #[arg(long)]
    pub model: Option<String>,
}
