use clap::{Args, Parser, Subcommand};

/// Shared secret expected verbatim in the `Authorization` header.
pub const DEFAULT_API_KEY: &str = "cvebuster-nested-key";

#[derive(Parser)]
#[command(
    name = "cvebuster",
    version,
    about = "Mock nested vulnerability API server for collector integration testing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate randomized asset and vulnerability fixture documents
    Generate(GenerateArgs),
    /// Start the mock HTTP API server
    Serve(ServeArgs),
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Number of asset records
    #[arg(long, default_value = "30")]
    pub assets: usize,

    /// Number of vulnerability records
    #[arg(long, default_value = "50")]
    pub vulns: usize,

    /// Output path for the asset document
    #[arg(long, default_value = "assets.json")]
    pub assets_file: String,

    /// Output path for the vulnerability document
    #[arg(long, default_value = "vulnerabilities.json")]
    pub vulns_file: String,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Asset document to serve
    #[arg(long, default_value = "assets.json")]
    pub assets_file: String,

    /// Vulnerability document to serve
    #[arg(long, default_value = "vulnerabilities.json")]
    pub vulns_file: String,

    /// Shared secret required in the Authorization header
    #[arg(long, default_value = DEFAULT_API_KEY)]
    pub api_key: String,
}
