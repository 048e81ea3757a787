//! Chapter alignment: dedup, summary listing, and interleaving with segments
//!
//! Also hosts the chapter extraction strategies that turn already-fetched
//! page data (description text, embedded player-response JSON) into chapter
//! markers. Fetching that page data is an external concern.

use std::collections::HashSet;

use crate::timestamp::{format_timestamp, parse_timestamp};
use crate::types::{AnnotatedLine, ChapterMarker, MergedSegment};

/// Deduplicate chapters by exact start time (first-encountered title wins)
/// and return them in ascending start order
pub fn dedup_chapters(chapters: &[ChapterMarker]) -> Vec<ChapterMarker> {
    let mut seen = HashSet::new();
    let mut result: Vec<ChapterMarker> = chapters
        .iter()
        .filter(|c| seen.insert(c.start.to_bits()))
        .cloned()
        .collect();
    // stable sort keeps first-encountered order among distinct equal keys
    result.sort_by(|a, b| a.start.total_cmp(&b.start));
    result
}

/// Render a chapter summary listing, one `MM:SS - title` line per chapter
pub fn chapter_summary(chapters: &[ChapterMarker]) -> String {
    dedup_chapters(chapters)
        .iter()
        .map(|c| format!("{} - {}", format_timestamp(c.start), c.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Interleave chapter markers into a merged segment stream
///
/// Stable two-pointer merge: each chapter lands immediately before the first
/// segment whose start is at or past the chapter's start; chapters past the
/// last segment are appended at the end. Every input item appears exactly
/// once.
pub fn interleave(segments: &[MergedSegment], chapters: &[ChapterMarker]) -> Vec<AnnotatedLine> {
    let chapters = dedup_chapters(chapters);
    let mut lines = Vec::with_capacity(segments.len() + chapters.len());
    let mut next_chapter = 0;

    for segment in segments {
        while next_chapter < chapters.len() && chapters[next_chapter].start <= segment.start {
            lines.push(AnnotatedLine::Chapter(chapters[next_chapter].clone()));
            next_chapter += 1;
        }
        lines.push(AnnotatedLine::Segment(segment.clone()));
    }

    for chapter in &chapters[next_chapter..] {
        lines.push(AnnotatedLine::Chapter(chapter.clone()));
    }

    lines
}

/// Find the chapter containing a timestamp: the last chapter whose start is
/// at or before it
pub fn current_chapter(chapters: &[ChapterMarker], seconds: f64) -> Option<ChapterMarker> {
    dedup_chapters(chapters)
        .into_iter()
        .take_while(|c| c.start <= seconds)
        .last()
}

/// Already-fetched page data that chapter markers can be extracted from
#[derive(Debug, Clone, Default)]
pub struct ChapterSource {
    /// Video description text
    pub description: Option<String>,
    /// Embedded player-response JSON from the watch page
    pub player_response: Option<serde_json::Value>,
}

/// Extract chapter markers from page data
///
/// Strategies run in order and the first non-empty result wins: timestamp
/// lines in the description, then chapter renderers in the player-response
/// JSON.
pub fn extract_chapters(source: &ChapterSource) -> Vec<ChapterMarker> {
    let strategies: [fn(&ChapterSource) -> Option<Vec<ChapterMarker>>; 2] =
        [from_description, from_player_response];

    for strategy in strategies {
        if let Some(chapters) = strategy(source) {
            if !chapters.is_empty() {
                return dedup_chapters(&chapters);
            }
        }
    }
    Vec::new()
}

/// Parse `MM:SS Title` / `HH:MM:SS - Title` lines out of a description
fn from_description(source: &ChapterSource) -> Option<Vec<ChapterMarker>> {
    let description = source.description.as_deref()?;
    let mut chapters = Vec::new();

    for line in description.lines() {
        let line = line.trim();
        let Some((stamp, rest)) = line.split_once(char::is_whitespace) else {
            continue;
        };
        let Ok(start) = parse_timestamp(stamp) else {
            continue;
        };
        let title = rest.trim_start_matches([' ', '-', '\u{2013}', ':']).trim();
        if !title.is_empty() {
            chapters.push(ChapterMarker::new(start as f64, title));
        }
    }

    chapters.sort_by(|a, b| a.start.total_cmp(&b.start));
    (!chapters.is_empty()).then_some(chapters)
}

/// Walk the player-response JSON for `chapterRenderer` objects
fn from_player_response(source: &ChapterSource) -> Option<Vec<ChapterMarker>> {
    let value = source.player_response.as_ref()?;
    let mut chapters = Vec::new();
    collect_chapter_renderers(value, &mut chapters);
    chapters.sort_by(|a, b| a.start.total_cmp(&b.start));
    (!chapters.is_empty()).then_some(chapters)
}

fn collect_chapter_renderers(value: &serde_json::Value, out: &mut Vec<ChapterMarker>) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(renderer) = map.get("chapterRenderer") {
                let title = renderer
                    .get("title")
                    .and_then(|t| t.get("simpleText"))
                    .and_then(|v| v.as_str());
                // timeRangeStartMillis appears both as number and string
                let millis = renderer.get("timeRangeStartMillis").and_then(|v| {
                    v.as_f64()
                        .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
                });
                if let (Some(title), Some(millis)) = (title, millis) {
                    out.push(ChapterMarker::new(millis / 1000.0, title));
                }
            }
            for nested in map.values() {
                collect_chapter_renderers(nested, out);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_chapter_renderers(item, out);
            }
        }
        _ => {}
    }
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
    fn test_dedup_keeps_first_title() {
        let chapters = vec![
            ChapterMarker::new(60.0, "Intro"),
            ChapterMarker::new(60.0, "Introduction"),
            ChapterMarker::new(0.0, "Start"),
        ];
        let deduped = dedup_chapters(&chapters);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "Start");
        assert_eq!(deduped[1].title, "Intro");
    }

    #[test]
    fn test_summary() {
        let chapters = vec![
            ChapterMarker::new(0.0, "Start"),
            ChapterMarker::new(3661.0, "Late"),
        ];
        assert_eq!(chapter_summary(&chapters), "00:00 - Start\n01:01:01 - Late");
    }

    #[test]
    fn test_interleave_before_matching_segment() {
        let segments = vec![seg(0.0, "a"), seg(10.0, "b"), seg(20.0, "c")];
        let chapters = vec![ChapterMarker::new(10.0, "Topic")];
        let lines = interleave(&segments, &chapters);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], AnnotatedLine::Segment(seg(0.0, "a")));
        assert_eq!(lines[1], AnnotatedLine::Chapter(ChapterMarker::new(10.0, "Topic")));
        assert_eq!(lines[2], AnnotatedLine::Segment(seg(10.0, "b")));
    }

    #[test]
    fn test_interleave_trailing_chapter() {
        let segments = vec![seg(0.0, "a")];
        let chapters = vec![ChapterMarker::new(99.0, "Outro")];
        let lines = interleave(&segments, &chapters);
        assert_eq!(lines.last(), Some(&AnnotatedLine::Chapter(ChapterMarker::new(99.0, "Outro"))));
    }

    #[test]
    fn test_interleave_same_insertion_point_keeps_order() {
        let segments = vec![seg(0.0, "a"), seg(30.0, "b")];
        let chapters = vec![
            ChapterMarker::new(10.0, "First"),
            ChapterMarker::new(20.0, "Second"),
        ];
        let lines = interleave(&segments, &chapters);
        assert_eq!(lines[1], AnnotatedLine::Chapter(ChapterMarker::new(10.0, "First")));
        assert_eq!(lines[2], AnnotatedLine::Chapter(ChapterMarker::new(20.0, "Second")));
        assert_eq!(lines[3], AnnotatedLine::Segment(seg(30.0, "b")));
    }

    #[test]
    fn test_interleave_every_item_once() {
        let segments = vec![seg(0.0, "a"), seg(10.0, "b")];
        let chapters = vec![ChapterMarker::new(0.0, "Zero"), ChapterMarker::new(5.0, "Mid")];
        let lines = interleave(&segments, &chapters);
        assert_eq!(lines.len(), 4);
        let segs = lines.iter().filter(|l| matches!(l, AnnotatedLine::Segment(_))).count();
        assert_eq!(segs, 2);
    }

    #[test]
    fn test_current_chapter() {
        let chapters = vec![
            ChapterMarker::new(0.0, "Intro"),
            ChapterMarker::new(120.0, "Main"),
        ];
        assert_eq!(current_chapter(&chapters, 60.0).map(|c| c.title), Some("Intro".into()));
        assert_eq!(current_chapter(&chapters, 120.0).map(|c| c.title), Some("Main".into()));
        assert!(current_chapter(&[], 60.0).is_none());
    }

    #[test]
    fn test_extract_from_description() {
        let source = ChapterSource {
            description: Some(
                "Great video!\n00:00 Intro\n1:30 - The middle part\nnot a chapter\n1:01:01 Outro"
                    .to_string(),
            ),
            player_response: None,
        };
        let chapters = extract_chapters(&source);
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].title, "Intro");
        assert_eq!(chapters[1].start, 90.0);
        assert_eq!(chapters[1].title, "The middle part");
        assert_eq!(chapters[2].start, 3661.0);
    }

    #[test]
    fn test_extract_from_player_response() {
        let json = serde_json::json!({
            "playerOverlays": {
                "chapters": [
                    {"chapterRenderer": {"title": {"simpleText": "Intro"}, "timeRangeStartMillis": 0}},
                    {"chapterRenderer": {"title": {"simpleText": "Demo"}, "timeRangeStartMillis": "90000"}}
                ]
            }
        });
        let source = ChapterSource {
            description: None,
            player_response: Some(json),
        };
        let chapters = extract_chapters(&source);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].start, 90.0);
        assert_eq!(chapters[1].title, "Demo");
    }

    #[test]
    fn test_description_strategy_wins() {
        let source = ChapterSource {
            description: Some("00:00 From description".to_string()),
            player_response: Some(serde_json::json!({
                "chapterRenderer": {"title": {"simpleText": "From JSON"}, "timeRangeStartMillis": 0}
            })),
        };
        let chapters = extract_chapters(&source);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "From description");
    }
}
