//! Transcript rendering

use crate::chapters::{dedup_chapters, interleave};
use crate::error::Result;
use crate::timestamp::format_timestamp;
use crate::types::{AnnotatedLine, ChapterMarker, MergedSegment};

/// Render a merged segment as `[MM:SS] text`
pub fn render_segment(segment: &MergedSegment) -> String {
    format!("[{}] {}", segment.timestamp(), segment.text)
}

/// Render a chapter marker as `[CHAPTER] MM:SS - title`
pub fn render_chapter(chapter: &ChapterMarker) -> String {
    format!("[CHAPTER] {} - {}", chapter.timestamp(), chapter.title)
}

/// Render one annotated line
pub fn render_line(line: &AnnotatedLine) -> String {
    match line {
        AnnotatedLine::Segment(segment) => render_segment(segment),
        AnnotatedLine::Chapter(chapter) => render_chapter(chapter),
    }
}

/// Render a full transcript with chapter markers interleaved
///
/// With `with_summary` set and chapters present, a block listing every
/// chapter precedes the transcript.
pub fn render_transcript(
    segments: &[MergedSegment],
    chapters: &[ChapterMarker],
    with_summary: bool,
) -> String {
    let chapters = dedup_chapters(chapters);
    let mut parts = Vec::new();

    if with_summary && !chapters.is_empty() {
        for chapter in &chapters {
            parts.push(format!("{} - {}", format_timestamp(chapter.start), chapter.title));
        }
        parts.push(String::new());
    }

    for line in interleave(segments, &chapters) {
        parts.push(render_line(&line));
    }

    parts.join("\n")
}

/// Serialize merged segments as JSON for the tool-invocation boundary
pub fn format_transcript_json(segments: &[MergedSegment]) -> Result<String> {
    Ok(serde_json::to_string_pretty(segments)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, text: &str) -> MergedSegment {
        MergedSegment {
            start,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_render_segment() {
        assert_eq!(render_segment(&seg(65.0, "hello")), "[01:05] hello");
        assert_eq!(render_segment(&seg(3661.0, "late")), "[01:01:01] late");
    }

    #[test]
    fn test_render_chapter() {
        let chapter = ChapterMarker::new(600.0, "Q&A");
        assert_eq!(render_chapter(&chapter), "[CHAPTER] 10:00 - Q&A");
    }

    #[test]
    fn test_render_transcript_interleaved() {
        let segments = vec![seg(0.0, "intro words"), seg(12.0, "main topic")];
        let chapters = vec![ChapterMarker::new(12.0, "Main")];
        let text = render_transcript(&segments, &chapters, false);
        assert_eq!(
            text,
            "[00:00] intro words\n[CHAPTER] 00:12 - Main\n[00:12] main topic"
        );
    }

    #[test]
    fn test_render_transcript_with_summary() {
        let segments = vec![seg(0.0, "words")];
        let chapters = vec![ChapterMarker::new(0.0, "Intro")];
        let text = render_transcript(&segments, &chapters, true);
        assert_eq!(
            text,
            "00:00 - Intro\n\n[CHAPTER] 00:00 - Intro\n[00:00] words"
        );
    }

    #[test]
    fn test_summary_skipped_without_chapters() {
        let segments = vec![seg(0.0, "words")];
        let text = render_transcript(&segments, &[], true);
        assert_eq!(text, "[00:00] words");
    }
}
