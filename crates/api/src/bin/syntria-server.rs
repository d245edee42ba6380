//! Syntria server binary entry point
//!
//! Loads configuration, initializes tracing, and starts the API server.
//! Also offers a one-shot client mode that scores a subject against a
//! running server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use syntria_common::SystemConfig;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "syntria-server")]
#[command(version = "0.1.0")]
#[command(about = "Onboarding and risk-scoring API for the Syntria demo")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.dev.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
    /// Score one onboarding subject via a running server (client mode)
    Score {
        /// Path to a JSON file with the onboarding subject
        subject: String,

        /// API server URL
        #[arg(long, default_value = "http://localhost:8787")]
        server_url: String,
    },
    /// Validate configuration
    ValidateConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    syntria_common::init_tracing_with_level(log_level)?;

    let config = SystemConfig::from_file(&cli.config).map_err(|e| {
        error!("Failed to load configuration from {}: {}", cli.config, e);
        e
    })?;

    info!("Configuration loaded from {}", cli.config);

    match cli.command {
        Some(Commands::ValidateConfig) => {
            println!("✓ Configuration is valid");
            println!("  Bind address: {}", config.bind_addr());
            println!("  Risk model: {}", config.risk.model);
            println!(
                "  Gemini key: {}",
                if syntria_common::config::gemini_api_key().is_some() {
                    "configured"
                } else {
                    "absent (rule-based scoring only)"
                }
            );
            Ok(())
        }
        Some(Commands::Score {
            subject,
            server_url,
        }) => score_via_server(&subject, &server_url).await,
        Some(Commands::Server { host, port }) => {
            let mut config = config;
            if let Some(h) = host {
                config.server.host = h;
            }
            if let Some(p) = port {
                config.server.port = p;
            }
            start_server(config).await
        }
        None => start_server(config).await,
    }
}

/// Score a subject via the HTTP endpoint (client mode)
async fn score_via_server(subject_path: &str, server_url: &str) -> Result<()> {
    info!("Scoring subject via API server: {}", server_url);

    let subject: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(subject_path)?)?;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/risk-score", server_url))
        .json(&subject)
        .send()
        .await?;

    if !response.status().is_success() {
        error!("Server returned error status: {}", response.status());
        return Err(anyhow::anyhow!("Server error: {}", response.status()));
    }

    let assessment: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}

/// Start the API server
async fn start_server(config: SystemConfig) -> Result<()> {
    info!("Starting API server on {}", config.bind_addr());

    let server = syntria_api::ApiServer::new(config);
    server.run().await
}
