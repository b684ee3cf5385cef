//! CLI command handling
//!
//! Dispatches CLI commands to the library and formats output.

use std::io::Write;

use serde::Serialize;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::Result;
use crate::factorial::calculate_factorial;
use crate::greeting::greet;

/// How result lines are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct GreetingLine<'a> {
    greeting: &'a str,
}

#[derive(Serialize)]
struct FactorialLine {
    n: i64,
    factorial: u128,
}

/// Dispatch a CLI command, writing result lines to `out`
pub fn dispatch<W: Write>(
    command: Commands,
    config: &Config,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Run => {
            print_greeting(&config.demo.name, format, out)?;
            print_factorial(config.demo.factorial_input, format, out)
        }
        Commands::Greet { name } => print_greeting(&name, format, out),
        Commands::Factorial { n } => print_factorial(n, format, out),
    }
}

fn print_greeting<W: Write>(name: &str, format: OutputFormat, out: &mut W) -> Result<()> {
    let greeting = greet(name);
    match format {
        OutputFormat::Text => writeln!(out, "{}", greeting)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &GreetingLine { greeting: &greeting })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_factorial<W: Write>(n: i64, format: OutputFormat, out: &mut W) -> Result<()> {
    let factorial = calculate_factorial(n)?;
    match format {
        OutputFormat::Text => writeln!(out, "Factorial of {}: {}", n, factorial)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &FactorialLine { n, factorial })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
