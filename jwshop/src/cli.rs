//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jwshop")]
#[command(about = "Build and check the JWShop landing page")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Config file (optional; defaults apply when it does not exist)
    #[arg(long, global = true, default_value = "jwshop.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the landing page to an HTML file
    Render {
        /// Viewport width in CSS pixels (overrides config)
        #[arg(long)]
        width: Option<u32>,
        /// Output file, `-` for stdout (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Verify an HTML file against the landing page markup contract
    Check {
        /// HTML file to check
        file: PathBuf,
    },
    /// Print the page content (nav links, products, posts) as JSON
    Catalog,
    /// Print the page outline (headings, buttons, text fields in order)
    Outline {
        /// Viewport width in CSS pixels (overrides config)
        #[arg(long)]
        width: Option<u32>,
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
}
