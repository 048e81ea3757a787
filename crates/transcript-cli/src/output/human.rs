//! Human-readable output formatting

use super::colors::*;
use transcript_core::{AnnotatedLine, ChapterMarker, ClaimMatch, MergedSegment};

/// Format an annotated transcript line with colors
pub fn format_line(line: &AnnotatedLine) -> String {
    match line {
        AnnotatedLine::Segment(segment) => format_segment(segment),
        AnnotatedLine::Chapter(chapter) => format_chapter_line(chapter),
    }
}

/// Format a merged segment as `[MM:SS] text`
pub fn format_segment(segment: &MergedSegment) -> String {
    format!(
        "[{}] {}",
        colored_time(&segment.timestamp()),
        segment.text
    )
}

/// Format an interleaved chapter marker line
pub fn format_chapter_line(chapter: &ChapterMarker) -> String {
    format!(
        "[CHAPTER] {} - {}",
        colored_time(&chapter.timestamp()),
        colored_chapter(&chapter.title)
    )
}

/// Format a chapter summary entry
pub fn format_chapter_entry(chapter: &ChapterMarker) -> String {
    format!(
        "{} - {}",
        colored_time(&chapter.timestamp()),
        colored_chapter(&chapter.title)
    )
}

/// Format a claim match result
pub fn format_match(result: &ClaimMatch, claim: &str) -> String {
    if result.found {
        let mut lines = vec![success(&format!(
            "Found at [{}] ({}, score {})",
            result.timestamp(),
            result.mode,
            colored_score(result.score)
        ))];
        lines.push(format!("  {}", result.matched_text));
        lines.join("\n")
    } else {
        warning(&format!("No {} match for: {}", result.mode, claim))
    }
}
