//! CLI module for the user registry
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API (default)
//! - `routes`: print the endpoint table and exit

pub mod routes;
pub mod serve;

use clap::{Parser, Subcommand};

/// User Registry - in-memory user store served over HTTP
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),

    /// Print the API endpoints
    Routes,
}
