// src/main.rs
// PromptForge CLI entry point

use anyhow::{Result, anyhow};
use clap::Parser;
use promptforge::category::Category;
use promptforge::cli::{Cli, Commands, GatewayArgs, GeneratorArgs, run_session};
use promptforge::clipboard::{SystemClipboard, copy_verified};
use promptforge::config::{GatewayConfig, ServerConfig};
use promptforge::handler::{GenerationRequest, PromptGenerator, RequestHandler};
use promptforge::llm::GatewayClient;
use promptforge::session::{RemoteGenerator, SessionController};
use promptforge::web;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve { host, port, gateway } => {
            let config = gateway_config(&gateway);
            info!(model = %config.model, "Starting PromptForge server");
            let handler = RequestHandler::new(GatewayClient::new(config));
            web::run(&ServerConfig { host, port }, handler).await
        }
        Commands::Generate {
            topic,
            category,
            copy,
            source,
        } => {
            let generator = build_generator(&source);
            let request = GenerationRequest::new(&topic.join(" "), category.as_str())
                .map_err(|e| anyhow!(e.user_message()))?;
            let prompt = generator
                .generate(&request)
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            println!("{}", prompt);

            if copy {
                match copy_verified(&mut SystemClipboard::new(), &prompt) {
                    Ok(()) => eprintln!("Prompt copied to clipboard!"),
                    Err(e) => eprintln!("{}: {}", e.user_message(), e),
                }
            }
            Ok(())
        }
        Commands::Session { category, source } => {
            let generator = build_generator(&source);
            let mut session = SessionController::new();
            let mut clipboard = SystemClipboard::new();
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_session(
                &mut session,
                generator.as_ref(),
                &mut clipboard,
                Category::parse_or_default(&category),
                stdin.lock(),
                &mut stdout,
            )
            .await
        }
        Commands::Categories => {
            for category in Category::ALL {
                println!("{} {:<9} {}", category.emoji(), category.as_str(), category.label());
            }
            Ok(())
        }
    }
}

fn gateway_config(args: &GatewayArgs) -> GatewayConfig {
    GatewayConfig::from_env().with_overrides(
        args.api_key.clone(),
        args.api_url.clone(),
        args.model.clone(),
    )
}

/// Remote handler when `--endpoint` is given, in-process gateway otherwise
fn build_generator(args: &GeneratorArgs) -> Box<dyn PromptGenerator> {
    match &args.endpoint {
        Some(endpoint) => {
            info!(endpoint = %endpoint, "Using remote generator");
            Box::new(RemoteGenerator::new(endpoint.clone()).with_token(args.endpoint_token.clone()))
        }
        None => Box::new(RequestHandler::new(GatewayClient::new(gateway_config(&args.gateway)))),
    }
}
