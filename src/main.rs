use clap::{Parser, Subcommand};
use std::io;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unit_converter::config::Config;
use unit_converter::convert;
use unit_converter::shell::Shell;
use unit_converter::units::{Magnitude, CATALOG};

const DEFAULT_CONFIG_PATH: &str = "unit-converter.toml";

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(about = "Convert lengths, weights and temperatures", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read requests interactively until "exit" (default)
    Repl,

    /// Convert a single request (e.g., "1 meter to kilometers")
    Convert {
        /// Request words
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        request: Vec<String>,
    },

    /// List the supported units
    Units {
        /// Only units of this magnitude (length, weight, temperature)
        #[arg(short, long)]
        magnitude: Option<Magnitude>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(cli.config.as_deref()),
        Commands::Convert { request } => convert_once(&request.join(" ")),
        Commands::Units { magnitude, json } => list_units(magnitude, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            if !Path::new(path).exists() {
                warn!(path, "config file not found, using defaults");
                return Ok(Config::default());
            }
            info!(path, "loading config");
            Ok(Config::load_from_file(path)?)
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            info!(path = DEFAULT_CONFIG_PATH, "loading config");
            Ok(Config::load_from_file(DEFAULT_CONFIG_PATH)?)
        }
        None => Ok(Config::default()),
    }
}

fn run_repl(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    let stdin = io::stdin();
    let mut shell = Shell::new(config.shell, stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}

fn convert_once(request: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = convert::convert_line(&request.to_lowercase())?;
    println!("{}", conversion);
    Ok(())
}

fn list_units(
    magnitude: Option<Magnitude>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let summaries = CATALOG.summaries(magnitude);
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let magnitudes: Vec<Magnitude> = match magnitude {
        Some(m) => vec![m],
        None => Magnitude::ALL.to_vec(),
    };

    for (i, magnitude) in magnitudes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let base = CATALOG
            .base_unit(*magnitude)
            .map(|unit| unit.singular)
            .unwrap_or("none");
        println!("{} (base unit: {}):", magnitude, base);
        for unit in CATALOG.units_of(*magnitude) {
            println!("  - {}", unit.summary());
        }
    }

    Ok(())
}
