//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use transcript_core::{MatchMode, DEFAULT_MATCH_THRESHOLD, DEFAULT_MERGE_THRESHOLD};

/// CLI for formatting transcripts and locating claims
#[derive(Parser, Debug)]
#[command(name = "transcript")]
#[command(version)]
#[command(about = "Format video transcripts and locate claims for fact-checking")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output
    Json,
    /// Minimal text output (content only)
    Minimal,
}

/// Claim matching mode argument
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum MatchModeArg {
    /// Case-insensitive substring match
    Exact,
    /// Word-set overlap scoring
    #[default]
    Fuzzy,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Exact => MatchMode::Exact,
            MatchModeArg::Fuzzy => MatchMode::Fuzzy,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a merged transcript from a caption cue file
    Format {
        /// Caption cue JSON file, or - for stdin
        cues: PathBuf,

        /// Chapter marker JSON file to interleave
        #[arg(long)]
        chapters: Option<PathBuf>,

        /// List all chapters before the transcript
        #[arg(long)]
        summary: bool,

        /// Merge threshold in seconds
        #[arg(long, default_value_t = DEFAULT_MERGE_THRESHOLD)]
        threshold: f64,
    },

    /// List chapter markers from a chapter file
    Chapters {
        /// Chapter marker JSON file, or - for stdin
        chapters: PathBuf,
    },

    /// Locate a claim in a transcript
    Locate {
        /// Caption cue JSON file, or - for stdin
        cues: PathBuf,

        /// The claim to find
        claim: String,

        /// Matching mode
        #[arg(long, short, default_value = "fuzzy")]
        mode: MatchModeArg,

        /// Minimum fuzzy score for a match to qualify
        #[arg(long, default_value_t = DEFAULT_MATCH_THRESHOLD)]
        threshold: f64,
    },

    /// Extract a context window around a timestamp
    Window {
        /// Caption cue JSON file, or - for stdin
        cues: PathBuf,

        /// Target timestamp (MM:SS or HH:MM:SS)
        timestamp: String,

        /// Seconds of context before and after
        #[arg(short = 'C', long, default_value = "30")]
        context: f64,

        /// Chapter marker JSON file, for naming the containing chapter
        #[arg(long)]
        chapters: Option<PathBuf>,
    },
}
