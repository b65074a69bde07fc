use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use hotelrev::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Display currency (USD, INR, EUR or JPY); unknown codes are ignored
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for hotelrev::AppCommand {
    fn from(cmd: Commands) -> hotelrev::AppCommand {
        match cmd {
            Commands::Currencies => hotelrev::AppCommand::Currencies,
            Commands::Format { amounts } => hotelrev::AppCommand::Format { amounts },
            Commands::Dashboard => hotelrev::AppCommand::Dashboard,
            Commands::Analytics => hotelrev::AppCommand::Analytics,
            Commands::Pricing => hotelrev::AppCommand::Pricing,
            Commands::Trends => hotelrev::AppCommand::Trends,
            Commands::Upload {
                path,
                content_type,
                json,
            } => hotelrev::AppCommand::Upload {
                path,
                content_type,
                json,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List supported display currencies
    Currencies,
    /// Format amounts in the display currency
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        amounts: Vec<f64>,
    },
    /// Display revenue dashboard
    Dashboard,
    /// Display daily, monthly and hourly revenue analytics
    Analytics,
    /// Display room pricing recommendations
    Pricing,
    /// Display baseline historical trends
    Trends,
    /// Upload booking data for simulated trend analysis
    Upload {
        /// CSV, XLS, XLSX or JSON file
        path: PathBuf,

        /// Declared content type; guessed from the extension when omitted
        #[arg(long)]
        content_type: Option<String>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => hotelrev::cli::setup::setup(),
        Some(cmd) => {
            hotelrev::run_command(
                cmd.into(),
                cli.config_path.as_deref(),
                cli.currency.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
