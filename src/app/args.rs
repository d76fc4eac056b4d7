use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "naavi", version, about = "Higher-education pathway coach")]
pub struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Seed perturbation for a reproducible run
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer the question catalog and request pathways (default)
    Chat,

    /// Extract pathways from saved model output
    Parse {
        file: PathBuf,

        /// Print JSON instead of a readable listing
        #[arg(long)]
        json: bool,
    },

    /// Check that the LLM endpoint is reachable
    Check,

    /// Write the current settings to disk
    InitSettings,
}
