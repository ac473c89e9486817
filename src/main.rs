use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vinyl_chat_server::config::{AppConfig, CliConfig, FileConfig};
use vinyl_chat_server::{run_server, ChatService, CollectionStore, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file, its values override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the collection CSV export.
    #[clap(long, env = "VINYL_COLLECTION_PATH", value_parser = parse_path)]
    pub collection_path: Option<PathBuf>,

    /// URL of the collection CSV export.
    #[clap(long, env = "VINYL_COLLECTION_URL")]
    pub collection_url: Option<String>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Timeout in seconds for fetching the collection over HTTP.
    #[clap(long, default_value_t = 30)]
    pub fetch_timeout_sec: u64,

    /// Load the collection before accepting requests instead of on first query.
    #[clap(long)]
    pub preload: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        collection_path: cli_args.collection_path,
        collection_url: cli_args.collection_url,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        fetch_timeout_sec: cli_args.fetch_timeout_sec,
        preload: cli_args.preload,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let source = config.collection_source()?;
    info!("Collection source: {}", source.describe());
    let store = Arc::new(CollectionStore::new(source));

    if config.preload {
        store
            .load()
            .await
            .context("Failed to preload the collection")?;
    }

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level.clone(),
        port: config.port,
    };
    info!(
        "Starting server on port {} (request logging: {})",
        config.port, config.logging_level
    );
    run_server(server_config, ChatService::new(store)).await
}
