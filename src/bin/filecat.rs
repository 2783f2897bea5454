//! filecat CLI Binary
//!
//! Command-line entry point for the file catalog.

use anyhow::Context;
use clap::Parser;
use filecat::logging::init_logging;
use filecat::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.load_config().context("Error loading configuration")?;
    init_logging(Some(&config.logging)).context("Error initializing logging")?;

    let mut context = CliContext::new(config).context("Error initializing catalog")?;
    let output = context.execute(&cli.command_or_default())?;
    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
