use clap::{Args, Parser, Subcommand};
use crate::config::ServeOverrides;

#[derive(Parser)]
#[command(name = "navi", version, about = "Incident reporting and website scan record services")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the incident reporting API
    Incidents(ServeArgs),
    /// Serve the website scan API
    Scans(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database path (defaults to $NAVI_DATABASE, then ./navi.db)
    #[arg(long)]
    pub db: Option<String>,

    /// Seed for reproducible placeholder scan scores
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ServeArgs {
    pub fn overrides(&self) -> ServeOverrides {
        ServeOverrides {
            host: self.host.clone(),
            port: self.port,
            db: self.db.clone(),
            seed: self.seed,
        }
    }
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Configuration file to validate
    pub config: String,
}
