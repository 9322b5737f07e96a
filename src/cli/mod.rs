//! CLI module - Command-line interface for repairdesk
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// repairdesk - Laptop repair orders with a normalization walkthrough
#[derive(Parser)]
#[command(name = "repairdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server until interrupted
    #[command(alias = "daemon", alias = "-d", alias = "--daemon")]
    Serve,

    /// List all repair orders, most recent first
    #[command(alias = "ls", alias = "list")]
    Orders,

    /// Record a repair order
    Submit {
        /// Customer username
        username: String,

        /// One or more laptop brands
        #[arg(required = true)]
        brands: Vec<String>,
    },

    /// Print the original, 1NF, 2NF and 3NF views of the repairs table
    #[command(alias = "nf")]
    Normalize,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
