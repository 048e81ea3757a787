//! transcript - format video transcripts and locate claims for fact-checking

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Format {
            cues,
            chapters,
            summary,
            threshold,
        } => commands::format::run(&cli, cues, chapters.as_deref(), *summary, *threshold),

        Command::Chapters { chapters } => commands::chapters::run(&cli, chapters),

        Command::Locate {
            cues,
            claim,
            mode,
            threshold,
        } => commands::locate::run(&cli, cues, claim, (*mode).into(), *threshold),

        Command::Window {
            cues,
            timestamp,
            context,
            chapters,
        } => commands::window::run(&cli, cues, timestamp, *context, chapters.as_deref()),
    }
}
