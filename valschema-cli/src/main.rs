//! # valschema-cli
//!
//! CLI for printing schema-AST batches as validator rule modules.
//!
//! ## Usage
//!
//! ```bash
//! # Print a module from an AST batch
//! valschema generate schemas.json --output schemas.js
//!
//! # Preview without writing
//! valschema generate schemas.json --output schemas.js --dry-run
//!
//! # Check a generated module is up to date
//! valschema validate schemas.json --path schemas.js
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use valschema::PrintOptions;
use valschema_cli::commands::{self, GenerateOutcome};
use valschema_cli::error::{CliError, CliResult};
use valschema_cli::writer::WriteResult;

#[derive(Parser)]
#[command(name = "valschema")]
#[command(version, about = "Print schema ASTs as validator rule modules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a validator module from a schema-AST batch
    Generate {
        /// Input file containing the JSON declaration batch
        input: PathBuf,

        /// Output file for the printed module (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap bare schema-reference names in quotes
        #[arg(long)]
        quote: bool,

        /// Emit per-declaration export markers instead of one aggregate block
        #[arg(long)]
        export: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate that a printed module is up-to-date
    Validate {
        /// Input file containing the JSON declaration batch
        input: PathBuf,

        /// Path to the generated module
        #[arg(short, long)]
        path: PathBuf,

        /// Wrap bare schema-reference names in quotes
        #[arg(long)]
        quote: bool,

        /// Emit per-declaration export markers instead of one aggregate block
        #[arg(long)]
        export: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            match e {
                CliError::Validation(_) => {
                    eprintln!("  Run 'valschema generate' to update");
                    ExitCode::from(2)
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            quote,
            export,
            dry_run,
        } => {
            let outcome =
                commands::generate(&input, output.as_deref(), options(quote, export), dry_run)?;
            report_generate(outcome);
            Ok(())
        }

        Commands::Validate {
            input,
            path,
            quote,
            export,
        } => {
            commands::validate(&input, &path, options(quote, export))?;
            println!("{} Module is up-to-date", "✓".green());
            Ok(())
        }
    }
}

fn options(quote: bool, export: bool) -> PrintOptions {
    PrintOptions::new().with_quote(quote).with_export(export)
}

fn report_generate(outcome: GenerateOutcome) {
    match outcome {
        GenerateOutcome::Stdout { content } => print!("{content}"),

        GenerateOutcome::File { schemas, result } => {
            println!("  Loaded {} schema(s)", schemas.to_string().green());
            match result {
                WriteResult::Written { path, bytes } => {
                    println!(
                        "{} Written {} bytes to {}",
                        "✓".green(),
                        bytes,
                        path.display()
                    );
                }
                WriteResult::DryRun { path, content } => {
                    println!(
                        "{} Would write to {}:",
                        "[dry-run]".yellow(),
                        path.display()
                    );
                    println!("{}", "─".repeat(60).dimmed());
                    println!("{content}");
                    println!("{}", "─".repeat(60).dimmed());
                }
            }
        }
    }
}
