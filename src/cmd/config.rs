use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::AppConfig;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand, config_path: Option<PathBuf>) -> AppResult<()> {
    match command {
        ConfigCommand::Show => run_show(config_path),
    }
}

fn run_show(config_path: Option<PathBuf>) -> AppResult<()> {
    let cfg = AppConfig::load(config_path.as_deref())?;
    for line in describe(&cfg) {
        println!("{line}");
    }
    Ok(())
}

fn describe(cfg: &AppConfig) -> Vec<String> {
    let source = cfg
        .source
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<environment only>".to_string());
    vec![
        format!("Configuration file: {source}"),
        format!("Search endpoint: {}", cfg.endpoint),
        format!("Username: {}", display_value(&cfg.username)),
        format!("Password: {}", mask_secret(&cfg.password)),
        format!("Max results: {}", cfg.max_results),
        format!("Skill application id: {}", display_value(&cfg.app_id)),
    ]
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
