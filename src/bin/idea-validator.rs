//! Idea validator CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use idea_validator::cli::args::*;
use idea_validator::cli::commands::*;
use idea_validator::error::ValidatorError;

fn main() {
    // Parse command line arguments using clap
    let args = ValidatorArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        match e.downcast_ref::<ValidatorError>() {
            Some(ValidatorError::Validation(validation)) => {
                eprintln!("{validation}");
                process::exit(2);
            }
            _ => {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }
}

fn run(args: ValidatorArgs) -> anyhow::Result<()> {
    let command = format!("{:?}", args.command);
    execute_command(args).with_context(|| format!("command failed: {command}"))
}
