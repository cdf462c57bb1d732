//! FAQ Desk CLI
//!
//! Main entry point for the faqdesk command-line tool.
//! Search and browse the sublease marketplace FAQ, or chat with its assistant.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    AskCommand, BrowseCommand, CategoriesCommand, ChatCommand, ExportCommand, SearchCommand,
};
use faqdesk_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// FAQ Desk - search, browse and chat over the sublease marketplace FAQ
#[derive(Parser, Debug)]
#[command(name = "faqdesk")]
#[command(about = "Search, browse and chat over the sublease marketplace FAQ", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "FAQDESK_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "FAQDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Knowledge file (YAML or JSON) to use instead of the built-in FAQ
    #[arg(short, long, global = true, env = "FAQDESK_KNOWLEDGE")]
    knowledge: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (NO_COLOR accepts any non-falsey value)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search FAQs by free text
    Search(SearchCommand),

    /// Browse FAQs by category
    Browse(BrowseCommand),

    /// List FAQ categories
    Categories(CategoriesCommand),

    /// Ask the assistant a single question
    Ask(AskCommand),

    /// Chat with the assistant interactively
    Chat(ChatCommand),

    /// Export the active knowledge base as YAML
    Export(ExportCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_with(cli.workspace, cli.config)?;

    let config = config.with_overrides(cli.knowledge, cli.log_level, cli.verbose, cli.no_color);

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("FAQ desk starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Knowledge file: {:?}", config.knowledge_path());

    config.validate()?;

    let command_name = match &cli.command {
        Commands::Search(_) => "search",
        Commands::Browse(_) => "browse",
        Commands::Categories(_) => "categories",
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Export(_) => "export",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Search(cmd) => cmd.execute(&config).await,
        Commands::Browse(cmd) => cmd.execute(&config).await,
        Commands::Categories(cmd) => cmd.execute(&config).await,
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Export(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
