//! # jwshop
//!
//! Builds the JWShop landing page as a static HTML file and checks built
//! pages against the page's markup contract.
//!
//! ```bash
//! jwshop render --out dist/index.html
//! jwshop render --width 375 --out -
//! jwshop check dist/index.html
//! jwshop outline --json
//! jwshop catalog
//! ```

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Args, Command};
use commands::Outcome;
use config::SiteConfig;

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(args: Args) -> Result<Outcome> {
    match args.command {
        Command::Render { width, out } => {
            let config = SiteConfig::load(&args.config)?;
            commands::render(&config, width, out.as_deref())
        }
        Command::Check { file } => commands::check(&file),
        Command::Catalog => commands::catalog(),
        Command::Outline { width, json } => {
            let config = SiteConfig::load(&args.config)?;
            commands::outline(&config, width, json)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failure) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("[jwshop] Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
