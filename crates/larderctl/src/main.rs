//! larderctl - terminal front-end for the larder ingredient catalog.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use larder_common::Catalog;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    let catalog = Catalog::builtin();

    match cli.command {
        cli::Commands::Search { query, limit, json } => {
            commands::search(&catalog, &query, limit, json)?;
        }
        cli::Commands::Normalize { name, json } => {
            commands::normalize(&catalog, &name, json)?;
        }
        cli::Commands::Match { a, b } => {
            if !commands::check_match(&catalog, &a, &b) {
                return Ok(ExitCode::FAILURE);
            }
        }
        cli::Commands::Categories { name, json } => {
            commands::categories(&catalog, name.as_deref(), json)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
