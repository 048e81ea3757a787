//! Format command - render a merged transcript with chapters interleaved

use anyhow::Result;
use std::path::Path;
use transcript_core::{chapter_summary, interleave, merge_cues, AnnotatedLine};

use crate::cli::{Cli, OutputFormat};
use crate::output::{human, json};

pub fn run(
    cli: &Cli,
    cues_path: &Path,
    chapters_path: Option<&Path>,
    summary: bool,
    threshold: f64,
) -> Result<()> {
    let cues = super::read_cues(cues_path)?;
    let chapters = match chapters_path {
        Some(path) => super::read_chapters(path)?,
        None => Vec::new(),
    };

    let segments = merge_cues(&cues, threshold);
    let lines = interleave(&segments, &chapters);

    match cli.format {
        OutputFormat::Human => {
            if summary && !chapters.is_empty() {
                println!("{}", chapter_summary(&chapters));
                println!();
            }
            for line in &lines {
                println!("{}", human::format_line(line));
            }
        }

        OutputFormat::Json => {
            for line in &lines {
                match line {
                    AnnotatedLine::Segment(segment) => println!("{}", json::format_segment(segment)),
                    AnnotatedLine::Chapter(chapter) => println!("{}", json::format_chapter(chapter)),
                }
            }
        }

        OutputFormat::Minimal => {
            for segment in &segments {
                println!("{}", segment.text);
            }
        }
    }

    Ok(())
}
