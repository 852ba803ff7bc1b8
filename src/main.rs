use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use thermogate::{
    ConversionService, Session, TemperatureUnit, ThermoGateConfig, ThermoGateError, VERSION,
    logging,
};

#[derive(Parser)]
#[command(name = "thermogate")]
#[command(version)]
#[command(about = "Validated temperature conversion across Celsius, Fahrenheit, Kelvin and Réaumur", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging and print configuration details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the configured number of decimal places
    #[arg(long, global = true)]
    decimals: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two scales (units: C, F, K, R)
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// Describe a Celsius value with its temperature band
    Classify {
        #[arg(allow_negative_numbers = true)]
        celsius: f64,
    },
    /// Check whether a Celsius value is near water's freezing or boiling point
    Check {
        #[arg(allow_negative_numbers = true)]
        celsius: f64,
        /// Override the configured tolerance
        #[arg(long, allow_negative_numbers = true)]
        tolerance: Option<f64>,
    },
    /// Format a value with its unit symbol
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        unit: String,
    },
    /// List supported units
    Units,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ThermoGateError>() {
                Some(ThermoGateError::Config { .. }) | None => eprintln!("Error: {err:#}"),
                Some(app_err) => eprintln!("Error: {}", app_err.user_message()),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ThermoGateConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    if let Some(decimals) = cli.decimals {
        config.conversion.decimal_places = decimals;
        config.validate()?;
    }

    logging::init(&config.logging, cli.verbose)?;
    tracing::debug!(?config, "Configuration loaded");

    // No credential store is wired into the CLI; it runs as a trusted local caller.
    let session = Session::local();
    let service = ConversionService::new(&session, config.conversion.clone());

    let Some(command) = cli.command else {
        print_overview(cli.config.as_ref(), cli.verbose, &config);
        return Ok(());
    };

    match command {
        Commands::Convert { value, from, to } => {
            let report = service
                .convert(value, &from, &to)
                .map_err(ThermoGateError::from)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
                if let Some(category) = report.category {
                    println!("Category: {category}");
                }
            }
        }
        Commands::Classify { celsius } => {
            let category = service.classify(celsius).map_err(ThermoGateError::from)?;
            if cli.json {
                println!("{}", json!({ "celsius": celsius, "category": category }));
            } else {
                println!("{}: {category}", service.format(celsius, "C")?);
            }
        }
        Commands::Check { celsius, tolerance } => {
            let tolerance = tolerance.unwrap_or(service.settings().tolerance);
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ThermoGateError::validation(
                    "Tolerance must be a finite, non-negative number",
                )
                .into());
            }
            let points = service.reference_points_with(celsius, tolerance);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                println!("Freezing point: {}", yes_no(points.freezing));
                println!("Boiling point: {}", yes_no(points.boiling));
            }
        }
        Commands::Format { value, unit } => {
            let formatted = service.format(value, &unit).map_err(ThermoGateError::from)?;
            println!("{formatted}");
        }
        Commands::Units => {
            for unit in TemperatureUnit::ALL {
                println!(
                    "{} = {} ({}, absolute zero {})",
                    unit.code(),
                    unit.name(),
                    unit.symbol(),
                    unit.absolute_zero()
                );
            }
        }
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn print_overview(config_path: Option<&PathBuf>, verbose: bool, config: &ThermoGateConfig) {
    println!("ThermoGate v{VERSION}");
    println!("Supported units: C, F, K, R. Run with --help for commands.");

    if verbose {
        let config_path = config_path
            .cloned()
            .or_else(ThermoGateConfig::get_config_path)
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        println!("Using config from: {config_path}");
        println!("Decimal places: {}", config.conversion.decimal_places);
        println!("Tolerance: {}", config.conversion.tolerance);
        println!("Log level: {}", config.logging.level);
    }
}
