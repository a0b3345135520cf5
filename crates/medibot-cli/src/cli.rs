//! CLI argument definitions using clap.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Medibot - AI medical assistant in your terminal
#[derive(Parser, Debug)]
#[command(name = "medibot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Gemini API key
    #[arg(short = 'k', long, env = "GEMINI_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// Model to query
    #[arg(short = 'M', long, env = "MEDIBOT_MODEL", default_value = medibot_gateway::ClientConfig::DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Override the generative endpoint base URL
    #[arg(long, env = "MEDIBOT_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Maximum attempts per query (first try plus retries)
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with the medical assistant
    Chat(commands::chat::ChatArgs),

    /// Analyze symptoms and get a specialist recommendation
    Symptoms(commands::symptoms::SymptomsArgs),

    /// Search for doctors by specialty and location
    Doctors(commands::doctors::DoctorsArgs),

    /// List hospitals nearest to a location (works offline)
    Hospitals(commands::hospitals::HospitalsArgs),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        // Build the client from the global options before the match takes
        // ownership of the subcommand. Credentials are only checked on
        // first use, so offline commands still work without a key.
        let client = commands::build_client(&self)?;
        let json = self.json;

        match self.command {
            Commands::Chat(args) => commands::chat::execute(args, client, json).await,
            Commands::Symptoms(args) => commands::symptoms::execute(args, client, json).await,
            Commands::Doctors(args) => commands::doctors::execute(args, client, json).await,
            Commands::Hospitals(args) => commands::hospitals::execute(args, json),
        }
    }
}
