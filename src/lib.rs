pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::upload::baseline_trends;
use crate::core::{CurrencyFormatter, FileHandle, UploadSimulator};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Currencies,
    Format {
        amounts: Vec<f64>,
    },
    Dashboard,
    Analytics,
    Pricing,
    Trends,
    Upload {
        path: PathBuf,
        content_type: Option<String>,
        json: bool,
    },
}

/// Builds the display formatter from config, letting `currency` override it.
pub fn build_formatter(config: &AppConfig, currency: Option<&str>) -> CurrencyFormatter {
    let mut formatter = CurrencyFormatter::new();
    formatter.set_currency(&config.currency);
    if let Some(code) = currency {
        formatter.set_currency(code);
    }
    formatter
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    currency: Option<&str>,
) -> Result<()> {
    info!("hotelrev starting...");

    let config = AppConfig::load_or_default(config_path)?;
    debug!("Loaded config: {config:#?}");

    let formatter = build_formatter(&config, currency);
    debug!(currency = %formatter.selected_currency().code, "Display currency");

    match command {
        AppCommand::Currencies => cli::currency::list(&formatter),
        AppCommand::Format { amounts } => cli::currency::format(&formatter, &amounts),
        AppCommand::Dashboard => cli::dashboard::run(&formatter),
        AppCommand::Analytics => cli::dashboard::run_analytics(&formatter),
        AppCommand::Pricing => cli::dashboard::run_pricing(&formatter),
        AppCommand::Trends => cli::upload::show_trends(&baseline_trends(), &formatter),
        AppCommand::Upload {
            path,
            content_type,
            json,
        } => {
            if !path.is_file() {
                anyhow::bail!("File not found: {}", path.display());
            }
            let mut file = FileHandle::from_path(&path);
            if let Some(content_type) = content_type {
                file.content_type = content_type;
            }

            let delays = config.upload.delays()?;
            let progress = cli::ui::new_spinner();
            let notifier = Arc::new(cli::upload::ConsoleNotifier::new(progress.clone()));
            let mut simulator = UploadSimulator::with_seed(delays, config.seed, notifier);

            cli::upload::run(&mut simulator, &file, &progress, &formatter, json).await?;
        }
    }

    Ok(())
}
