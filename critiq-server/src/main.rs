//! critiq server binary
//!
//! AI-assisted code review over HTTP with an embedded web UI.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use critiq_core::{Config, ReviewService, Secrets};
use critiq_db::Database;
use critiq_openrouter::OpenRouterClient;
use critiq_server::{AppState, Server};

/// critiq: AI-assisted code review with persistent history
#[derive(Parser, Debug)]
#[command(name = "critiq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (overrides the default location)
    #[arg(long, env = "CRITIQ_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind (overrides config and env)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides config and env)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file path (overrides config and env)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Model to use (overrides config and env)
    #[arg(long, env = "CRITIQ_MODEL")]
    model: Option<String>,

    /// Write a secrets file template and exit
    #[arg(long)]
    init_secrets: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "critiq=debug,critiq_server=debug,critiq_core=debug,critiq_openrouter=debug,critiq_db=debug,tower_http=debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();

    if cli.init_secrets {
        let path = Secrets::create_template()?;
        println!("Created secrets template at {}", path.display());
        println!("Add your OpenRouter API key there and re-run critiq.");
        return Ok(());
    }

    // Load configuration with overrides
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?
            .with_env_overrides()
            .with_cli_overrides(cli.bind, cli.port, cli.db_path, cli.model),
        None => Config::load_with_overrides(cli.bind, cli.port, cli.db_path, cli.model)?,
    };

    if cli.verbose {
        tracing::info!(
            bind = %config.server.bind,
            port = config.server.port,
            model = %config.generator.model,
            "Configuration loaded"
        );
    }

    // The server refuses to start without an API key
    let api_key = Secrets::load()?.openrouter_api_key().ok_or_else(|| {
        let hint = Secrets::default_secrets_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.config/critiq/secrets.toml".to_string());
        anyhow::anyhow!(
            "No OpenRouter API key configured. Set OPENROUTER_API_KEY or add it to {} \
             (run `critiq --init-secrets` to create a template)",
            hint
        )
    })?;

    let db_path = match &config.database.path {
        Some(path) => path.clone(),
        None => Database::default_path()?,
    };
    let db = Database::new(&db_path).await?;

    let generator = Arc::new(OpenRouterClient::new(config.generator.clone(), api_key)?);
    let service = Arc::new(ReviewService::new(generator, db));

    tracing::info!(
        model = %config.generator.model,
        db = %db_path.display(),
        "Starting critiq server"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;
    Server::new(addr, AppState::new(service)).run().await
}
