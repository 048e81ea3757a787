//! JSON output formatting

use transcript_core::{ChapterMarker, ClaimMatch, MergedSegment};

/// Output a merged segment as a JSON line
pub fn format_segment(segment: &MergedSegment) -> String {
    serde_json::json!({
        "start": segment.start,
        "timestamp": segment.timestamp(),
        "text": segment.text
    })
    .to_string()
}

/// Output a chapter marker as a JSON line
pub fn format_chapter(chapter: &ChapterMarker) -> String {
    serde_json::json!({
        "start": chapter.start,
        "timestamp": chapter.timestamp(),
        "title": chapter.title
    })
    .to_string()
}

/// Output a claim match result as JSON
pub fn format_match(result: &ClaimMatch) -> String {
    serde_json::json!({
        "found": result.found,
        "start": result.start,
        "timestamp": result.timestamp(),
        "matched_text": result.matched_text,
        "score": result.score,
        "mode": result.mode.to_string()
    })
    .to_string()
}
