mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::handle::{self, HandleCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::jira::JiraClient;
use crate::workflow::skill::JiraSkill;

#[derive(Parser)]
#[command(
    name = "jira-skill",
    author,
    version,
    about = "Voice skill that answers Jira status questions"
)]
struct Cli {
    /// Path to the JSON config file (defaults to $JIRA_SKILL_CONFIG, then ./config.json).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Handle one skill request envelope and print the response envelope.
    Handle(HandleArgs),
    /// Inspect the skill configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct HandleArgs {
    /// Read the request from this file instead of stdin.
    #[arg(short, long)]
    request: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        error!(error = %err, "request failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries the response envelope.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command, cli.config),
        Commands::Handle(args) => run_handle(cli.config, args).await,
    }
}

async fn run_handle(config_path: Option<PathBuf>, args: HandleArgs) -> AppResult<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    info!(
        endpoint = %config.endpoint,
        max_results = config.max_results,
        app_id = config.app_id.as_deref().unwrap_or("<not set>"),
        "configuration loaded"
    );
    if config.username.is_none() || config.password.is_none() {
        warn!("Jira credentials not configured; searches will be sent unauthenticated.");
    }

    let issue_tracker = Arc::new(JiraClient::from_config(&config));
    let skill = JiraSkill::new(AppContext::new(config, issue_tracker));

    let response = handle::run(
        &skill,
        HandleCommandArgs {
            request: args.request,
        },
    )
    .await?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
