//! Greeter CLI - prints a greeting and a factorial
//!
//! With no subcommand, prints `Hello, World!` and `Factorial of 5: 120`.

use std::path::PathBuf;

use clap::Parser;
use greeter::cli::{self, OutputFormat};
use greeter::commands::Commands;
use greeter::common::{config::Config, logging, ErrorReport, Result};

#[derive(Parser)]
#[command(name = "greeter", about = "Greeting and factorial demo")]
#[command(version, long_about = None)]
struct Cli {
    /// Print results and errors as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn run(cli: Cli, format: OutputFormat) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let command = cli.command.unwrap_or(Commands::Run);
    tracing::debug!(?command, "Dispatching");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::dispatch(command, &config, format, &mut out)
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if let Err(e) = run(cli, format) {
        match format {
            OutputFormat::Json => match serde_json::to_string(&ErrorReport::from(&e)) {
                Ok(json) => println!("{json}"),
                Err(_) => eprintln!("Error: {e}"),
            },
            OutputFormat::Text => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
