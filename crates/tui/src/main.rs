mod app;
mod config;
mod error;
mod quick_add;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;
    tracing::info!(file = %config.file, "starting");

    let mut app = app::App::new(config)?;
    app.run()
}

/// Logs go to a file; stdout belongs to the raw-mode terminal.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spesa_tui={level},ledger={level}",
            level = config.log_level
        ))
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();

    Ok(())
}
