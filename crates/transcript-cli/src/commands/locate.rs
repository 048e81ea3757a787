//! Locate command - find a claim in a transcript

use anyhow::Result;
use std::path::Path;
use transcript_core::{locate_claim, merge_cues, MatchMode, DEFAULT_MERGE_THRESHOLD};

use crate::cli::{Cli, OutputFormat};
use crate::output::{human, json};

pub fn run(
    cli: &Cli,
    cues_path: &Path,
    claim: &str,
    mode: MatchMode,
    threshold: f64,
) -> Result<()> {
    let cues = super::read_cues(cues_path)?;
    let segments = merge_cues(&cues, DEFAULT_MERGE_THRESHOLD);

    let result = locate_claim(&segments, claim, mode, threshold)?;

    match cli.format {
        OutputFormat::Human => {
            println!("{}", human::format_match(&result, claim));
        }

        OutputFormat::Json => {
            println!("{}", json::format_match(&result));
        }

        OutputFormat::Minimal => {
            if result.found {
                println!("{} {}", result.timestamp(), result.matched_text);
            }
        }
    }

    Ok(())
}
