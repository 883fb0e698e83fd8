use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/spesa.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the ledger file.
    pub file: String,
    /// Display-only currency label appended to amounts.
    pub currency: String,
    pub log_level: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file: "expenses.csv".to_string(),
            currency: "€".to_string(),
            log_level: "info".to_string(),
            log_file: "spesa.log".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spesa_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the ledger file path.
    #[arg(long)]
    file: Option<String>,
    /// Override the currency label.
    #[arg(long)]
    currency: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SPESA"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(file) = args.file {
        settings.file = file;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
