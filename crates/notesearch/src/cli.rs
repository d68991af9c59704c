use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notesearch")]
#[command(version)]
#[command(about = "Full-text search, summaries and keyword clouds for study notes")]
pub struct Cli {
    /// Engine configuration (JSON); omitted fields keep their defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search text files for a word or phrase
    Search {
        query: String,

        /// Plain-text files to search
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the extractive summary and size statistics of a file
    Summarize { file: PathBuf },

    /// Print the keyword cloud of a file
    Keywords {
        file: PathBuf,

        /// Number of keywords to show
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Generate study notes for a file
    Notes {
        file: PathBuf,

        /// Write the notes here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load files and run commands interactively
    Shell { files: Vec<PathBuf> },

    /// Print version and effective engine settings
    Version,
}
