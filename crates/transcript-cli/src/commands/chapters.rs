//! Chapters command - list chapter markers

use anyhow::Result;
use std::path::Path;
use transcript_core::dedup_chapters;

use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, human, json};

pub fn run(cli: &Cli, chapters_path: &Path) -> Result<()> {
    let chapters = dedup_chapters(&super::read_chapters(chapters_path)?);

    match cli.format {
        OutputFormat::Human => {
            if chapters.is_empty() {
                println!("No chapters found");
            } else {
                println!("{}", colors::header(&format!("Chapters ({})", chapters.len())));
                for chapter in &chapters {
                    println!("{}", human::format_chapter_entry(chapter));
                }
            }
        }

        OutputFormat::Json => {
            for chapter in &chapters {
                println!("{}", json::format_chapter(chapter));
            }
        }

        OutputFormat::Minimal => {
            for chapter in &chapters {
                println!("{}", chapter.title);
            }
        }
    }

    Ok(())
}
