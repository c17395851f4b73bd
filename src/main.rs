// ABOUTME: CLI entry point: render the widget, print its link or schema, or serve a preview.
// ABOUTME: Initializes logging, loads config with env overrides, and dispatches subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use whatsapp_button::{admin_schema, config::AppConfig, render_button, server};

#[derive(Parser)]
#[command(name = "whatsapp-button")]
#[command(about = "Floating WhatsApp contact button widget")]
struct Args {
    /// Path to the TOML configuration file (default: button.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the widget's HTML fragment to stdout
    Render,
    /// Print the chat deep link to stdout
    Link,
    /// Print the CMS admin schema as JSON to stdout
    Schema,
    /// Serve a local preview of the widget
    Serve {
        /// Bind host, overriding the configured one
        #[arg(long)]
        host: Option<String>,
        /// Bind port, overriding the configured one
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whatsapp_button=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let app_config = AppConfig::load(args.config.as_deref())?;
    let button = app_config.button.clone().resolve_or_default()?;

    match args.command {
        Command::Render => {
            println!("{}", render_button(&button)?);
        }
        Command::Link => {
            println!("{}", button.deep_link());
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&admin_schema())?);
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or(app_config.preview.host);
            let port = port.unwrap_or(app_config.preview.port);
            tracing::info!(
                logo = %button.logo,
                phone = %button.phone,
                width = button.width,
                height = button.height,
                "Configuration loaded"
            );
            server::serve(button, &host, port).await?;
        }
    }

    Ok(())
}
