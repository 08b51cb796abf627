//! CLI for the panel server

pub mod serve;

use clap::{Parser, Subcommand};

/// Pixel Panel - player stats panel with authenticated proxy lookups
#[derive(Parser)]
#[command(name = "pixel-panel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
