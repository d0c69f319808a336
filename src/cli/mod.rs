//! CLI module for Podbotnik.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Podbotnik - Podcast Transcript Q&A
///
/// Ask natural-language questions about a library of podcast episode
/// transcripts and get answers grounded in the relevant passages, with
/// source citations and playback deep links.
#[derive(Parser, Debug)]
#[command(name = "podbotnik")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question about the podcast library
    Ask {
        /// Path to the transcripts JSON file
        transcripts: String,

        /// The question to ask
        question: String,

        /// Number of transcript segments to use as context
        #[arg(short = 'n', long, default_value = "3")]
        num_sources: usize,

        /// LLM model to use for answer generation
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Interactive question-answering session
    Chat {
        /// Path to the transcripts JSON file
        #[arg(short, long)]
        transcripts: Option<String>,

        /// LLM model to use for answer generation
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Search transcripts directly, without answer generation
    Search {
        /// Path to the transcripts JSON file
        transcripts: String,

        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// List all episodes in a transcripts file
    List {
        /// Path to the transcripts JSON file
        transcripts: String,
    },

    /// Start the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Path to the transcripts JSON file (falls back to config)
        #[arg(short, long)]
        transcripts: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
