//! Window command - extract transcript context around a timestamp

use anyhow::Result;
use std::path::Path;
use transcript_core::{
    current_chapter, extract_window, merge_cues, parse_timestamp, format_timestamp,
    DEFAULT_MERGE_THRESHOLD,
};

use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, human, json};

pub fn run(
    cli: &Cli,
    cues_path: &Path,
    timestamp: &str,
    context: f64,
    chapters_path: Option<&Path>,
) -> Result<()> {
    let target = parse_timestamp(timestamp)? as f64;

    let cues = super::read_cues(cues_path)?;
    let segments = merge_cues(&cues, DEFAULT_MERGE_THRESHOLD);
    let window = extract_window(&segments, target, context)?;

    let chapter = match chapters_path {
        Some(path) => current_chapter(&super::read_chapters(path)?, target),
        None => None,
    };

    match cli.format {
        OutputFormat::Human => {
            println!(
                "{}",
                colors::header(&format!(
                    "Context around {} (±{}s)",
                    format_timestamp(target),
                    context
                ))
            );
            if let Some(chapter) = &chapter {
                println!("{}: {}", colors::label("Chapter"), colors::colored_chapter(&chapter.title));
            }
            println!();
            for segment in &window {
                println!("{}", human::format_segment(segment));
            }
        }

        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "timestamp": format_timestamp(target),
                    "timestamp_seconds": target,
                    "context_seconds": context,
                    "chapter": chapter.as_ref().map(|c| c.title.as_str()),
                    "segments": window
                })
            );
        }

        OutputFormat::Minimal => {
            for segment in &window {
                println!("{}", segment.text);
            }
        }
    }

    Ok(())
}
