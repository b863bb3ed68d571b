//! # cart-parser Command Line Tool
//!
//! ## Usage
//! ```bash
//! # Parse a cart and print it as JSON
//! cart-parser parse samples/cart.csv
//!
//! # List every problem in a cart file
//! cart-parser validate samples/cart.csv --compact
//!
//! # More logging
//! cart-parser --log cart_parser=debug parse samples/cart.csv
//! ```
//!
//! ## Exit Codes
//! - `0` - parsed, or validated without violations
//! - `1` - validation failed, violations found, or the file could not be read
//! - `2` - invalid arguments or configuration

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use cart_parser::logging::init_tracing;
use cart_parser::{CartParser, ContentReader, IdSource, ParserConfig, ParserError};

const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_CONFIG: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "cart-parser")]
#[command(about = "Validate and parse shopping cart CSV files")]
struct Cli {
    /// Tracing filter directive (overrides CART_PARSER_LOG).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a cart file and print items and total as JSON.
    Parse(FileArgs),
    /// Print every violation in a cart file as JSON.
    Validate(FileArgs),
}

impl Command {
    fn compact(&self) -> bool {
        match self {
            Command::Parse(args) | Command::Validate(args) => args.compact,
        }
    }
}

#[derive(Debug, Args)]
struct FileArgs {
    /// Path to the cart CSV file.
    path: PathBuf,
    /// Print single-line JSON (overrides CART_PARSER_OUTPUT).
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    if let Err(e) = init_tracing(&config) {
        eprintln!("{}", e);
        return ExitCode::from(EXIT_CONFIG);
    }

    let parser = CartParser::from_filesystem();
    let code = run(
        &cli.command,
        &config,
        &parser,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    ExitCode::from(code)
}

/// Environment first, then flags on top.
fn load_config(cli: &Cli) -> Result<ParserConfig, ParserError> {
    Ok(ParserConfig::load()?.with_overrides(cli.log.clone(), cli.command.compact()))
}

/// Runs one subcommand, writing JSON to `out` and errors to `err`.
/// Returns the process exit code.
fn run<R, I>(
    command: &Command,
    config: &ParserConfig,
    parser: &CartParser<R, I>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8
where
    R: ContentReader,
    I: IdSource,
{
    match execute(command, config, parser, out) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            EXIT_FAILURE
        }
    }
}

fn execute<R, I>(
    command: &Command,
    config: &ParserConfig,
    parser: &CartParser<R, I>,
    out: &mut dyn Write,
) -> Result<u8, Box<dyn std::error::Error>>
where
    R: ContentReader,
    I: IdSource,
{
    match command {
        Command::Parse(args) => {
            let cart = parser.parse(&args.path)?;
            writeln!(out, "{}", config.output.render(&cart)?)?;
            Ok(EXIT_OK)
        }
        Command::Validate(args) => {
            let violations = parser.validate_file(&args.path)?;
            writeln!(out, "{}", config.output.render(&violations)?)?;

            if violations.is_empty() {
                Ok(EXIT_OK)
            } else {
                Ok(EXIT_FAILURE)
            }
        }
    }
}
