mod config;
mod logging;
mod screen;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mimalloc::MiMalloc;
use tempconvert::TempConvertModule;
use tempconvert::infra::network::StaticNetworkStatus;
use tempconvert::presenter::Notice;
use tempconvert_sdk::{ConversionRequest, Direction, TemperatureConverterClient};

use crate::config::AppConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Celsius/Fahrenheit converter backed by a public SOAP service
#[derive(Parser)]
#[command(name = "tempconvert")]
#[command(about = "Celsius/Fahrenheit converter backed by a public SOAP service")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Skip the host network check and always attempt the call
    #[arg(long)]
    assume_online: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive converter screen (default)
    Interactive,
    /// Convert a single value and print the result
    Convert {
        /// Conversion direction
        #[arg(value_enum)]
        direction: DirectionArg,
        /// Value in the source scale, sent as typed
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Validate configuration and exit
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// Celsius to Fahrenheit
    C2f,
    /// Fahrenheit to Celsius
    F2c,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::C2f => Direction::CelsiusToFahrenheit,
            DirectionArg::F2c => Direction::FahrenheitToCelsius,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (TEMPCONVERT__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init(&config.logging);

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    let module = if cli.assume_online {
        TempConvertModule::init_with_network(
            &config.tempconvert,
            Arc::new(StaticNetworkStatus(true)),
        )?
    } else {
        TempConvertModule::init(&config.tempconvert)?
    };

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => screen::run_interactive(&module).await,
        Commands::Convert { direction, value } => {
            convert_once(&module, direction.into(), value).await
        }
        Commands::Check => {
            check_config(&config);
            Ok(())
        }
    }
}

/// One-shot conversion with the same gating as the interactive screen.
async fn convert_once(module: &TempConvertModule, direction: Direction, value: String) -> Result<()> {
    if !module.network().is_reachable() {
        anyhow::bail!("{}", Notice::NotConnected);
    }

    let Ok(request) = ConversionRequest::new(direction, value) else {
        anyhow::bail!("{}", Notice::EmptyInput);
    };

    match module.client().try_convert(&request).await {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(operation = %direction, error = %e, "conversion failed");
            anyhow::bail!("{} ({e})", Notice::RemoteCallFailed)
        }
    }
}

fn check_config(config: &AppConfig) {
    tracing::info!("Checking configuration...");
    // Module init already validated the endpoint and built the HTTP client
    println!("Configuration is valid");
    println!("  endpoint:  {}", config.tempconvert.endpoint);
    println!("  namespace: {}", config.tempconvert.namespace);
}
