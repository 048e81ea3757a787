//! CLI command implementations

pub mod chapters;
pub mod format;
pub mod locate;
pub mod window;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use transcript_core::{validate_cues, ChapterMarker, RawCaptionCue};

/// Read a file, or stdin when the path is `-`
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Load and validate a caption cue list (the transcript fetcher's output)
pub fn read_cues(path: &Path) -> Result<Vec<RawCaptionCue>> {
    let raw = read_input(path)?;
    let cues: Vec<RawCaptionCue> =
        serde_json::from_str(&raw).with_context(|| format!("invalid cue JSON in {}", path.display()))?;
    validate_cues(&cues)?;
    Ok(cues)
}

/// Load a chapter marker list
pub fn read_chapters(path: &Path) -> Result<Vec<ChapterMarker>> {
    let raw = read_input(path)?;
    let chapters: Vec<ChapterMarker> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid chapter JSON in {}", path.display()))?;
    Ok(chapters)
}
