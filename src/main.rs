use std::path::PathBuf;
#[cfg(feature = "web")]
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use chatwarden::config::Config;
use chatwarden::relay::Relay;

/// Chatwarden: context-aware chat moderation for live streams.
///
/// Lets playful trash talk through and flags slurs, harassment and other
/// truly harmful messages, using a local blocklist and an LLM provider.
#[derive(Parser)]
#[command(name = "chatwarden", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single message
    Classify {
        /// The message text
        text: String,
    },

    /// Classify every non-blank line of a file
    Batch {
        /// Path to a text file, one message per line
        file: PathBuf,

        /// Number of messages to classify in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: u32,

        /// Print every verdict, not just the summary
        #[arg(long)]
        verbose: bool,
    },

    /// Run the moderation HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8000)
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Show configured providers, blocklist size and telemetry target
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chatwarden=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Classify { text } => {
            warn_if_unconfigured(&config);
            let relay = Relay::from_config(&config)?;
            let decision = relay.evaluate(&text).await;
            chatwarden::output::terminal::display_decision(&text, &decision);
        }

        Commands::Batch {
            file,
            concurrency,
            verbose,
        } => {
            warn_if_unconfigured(&config);
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let messages = chatwarden::pipeline::batch::parse_messages(&contents);
            if messages.is_empty() {
                println!("No messages found in {}", file.display());
                return Ok(());
            }

            println!("Classifying {} messages...", messages.len());
            let relay = Relay::from_config(&config)?;
            let items =
                chatwarden::pipeline::batch::run(&relay, messages, concurrency as usize, true)
                    .await;

            if verbose {
                for item in &items {
                    chatwarden::output::terminal::display_decision(&item.text, &item.decision);
                }
            }
            chatwarden::output::terminal::display_batch_summary(&items);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            warn_if_unconfigured(&config);
            let relay = Arc::new(Relay::from_config(&config)?);
            chatwarden::web::run_server(config, relay, port, &bind).await?;
        }

        Commands::Status => {
            let relay = Relay::from_config(&config)?;
            let blocklist_len = relay.classifier().blocklist().len();
            chatwarden::output::terminal::display_status(&config, blocklist_len);
            if let Err(e) = config.require_provider() {
                println!("\n{} {}", "Warning:".yellow(), e);
            }
        }
    }

    Ok(())
}

/// Running without a provider is allowed but almost never intended.
fn warn_if_unconfigured(config: &Config) {
    if config.allow_no_llm {
        return;
    }
    if let Err(e) = config.require_provider() {
        warn!(error = %e, "Starting without an LLM provider");
    }
}
