use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vinyl_chat_server::config::{AppConfig, CliConfig, FileConfig};
use vinyl_chat_server::tools::{render_output, tool_definitions};
use vinyl_chat_server::{ChatRequest, ChatService, CollectionStore};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path = PathBuf::from(s);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path))
}

/// Ask questions about a vinyl collection from the terminal.
///
/// Without a message, starts an interactive prompt.
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

    /// Timeout in seconds for fetching the collection over HTTP.
    #[clap(long, default_value_t = 30)]
    pub fetch_timeout_sec: u64,

    /// Invoke this tool directly instead of routing a message.
    #[clap(long)]
    pub tool: Option<String>,

    /// JSON arguments for --tool.
    #[clap(long, default_value = "{}")]
    pub args: String,

    /// A single message to answer.
    pub message: Vec<String>,
}

const PROMPT: &str = "vinyl> ";

const HELP: &str = "Type a question about your collection, or one of:\n  \
    :tools   list the available tools\n  \
    :reload  fetch the collection again\n  \
    :help    show this help\n  \
    :quit    exit";

#[derive(Debug, PartialEq)]
enum ReplCommand {
    Empty,
    Help,
    Tools,
    Reload,
    Quit,
    Unknown(String),
    Message(String),
}

fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    match line.strip_prefix(':') {
        Some("help") | Some("h") => ReplCommand::Help,
        Some("tools") => ReplCommand::Tools,
        Some("reload") => ReplCommand::Reload,
        Some("quit") | Some("q") | Some("exit") => ReplCommand::Quit,
        Some(other) => ReplCommand::Unknown(other.to_string()),
        None => ReplCommand::Message(line.to_string()),
    }
}

async fn answer(service: &ChatService, message: &str) -> Result<()> {
    let response = service.handle_chat(&ChatRequest::new(message)).await?;
    if let (Some(name), Some(args)) = (&response.tool_name, &response.tool_args) {
        println!("-> {} {}", name, args);
    }
    println!("{}", response.answer);
    Ok(())
}

async fn invoke(service: &ChatService, tool: &str, args: &str) -> Result<()> {
    let arguments: Value =
        serde_json::from_str(args).with_context(|| format!("Invalid JSON arguments: {}", args))?;
    let output = service.invoke_tool(tool, arguments).await?;
    println!("{}", render_output(&output));
    Ok(())
}

fn print_tools() {
    for tool in tool_definitions() {
        println!("{}: {}", tool.name, tool.description);
        println!("  {}", tool.input_schema);
    }
}

async fn run_repl(service: &ChatService) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("{}", HELP);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match parse_line(&line) {
                    ReplCommand::Empty => {}
                    ReplCommand::Help => println!("{}", HELP),
                    ReplCommand::Tools => print_tools(),
                    ReplCommand::Reload => match service.store().reload().await {
                        Ok(collection) => println!("Reloaded {} records.", collection.len()),
                        Err(err) => eprintln!("Error: {}", err),
                    },
                    ReplCommand::Quit => break,
                    ReplCommand::Unknown(command) => {
                        eprintln!("Unknown command :{}, try :help", command)
                    }
                    ReplCommand::Message(message) => {
                        if let Err(err) = answer(service, &message).await {
                            eprintln!("Error: {}", err);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        collection_path: cli_args.collection_path,
        collection_url: cli_args.collection_url,
        fetch_timeout_sec: cli_args.fetch_timeout_sec,
        ..Default::default()
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;
    let store = Arc::new(CollectionStore::new(config.collection_source()?));
    let service = ChatService::new(store);

    if let Some(tool) = &cli_args.tool {
        return invoke(&service, tool, &cli_args.args).await;
    }
    if !cli_args.message.is_empty() {
        return answer(&service, &cli_args.message.join(" ")).await;
    }
    run_repl(&service).await
}
