//! Claim location: exact and fuzzy matching, context window extraction

use std::collections::HashSet;

use crate::error::{Result, TranscriptError};
use crate::types::{ClaimMatch, MatchMode, MergedSegment};

/// Default minimum fuzzy score for a match to qualify
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Locate a claim in a merged transcript
///
/// Exact mode is a case-insensitive substring search returning the first
/// containing segment. Fuzzy mode scores every segment by word-set overlap
/// with the claim and returns the best one at or above `threshold`, earliest
/// segment winning ties. Not finding the claim is a normal `found: false`
/// result.
pub fn locate_claim(
    transcript: &[MergedSegment],
    claim: &str,
    mode: MatchMode,
    threshold: f64,
) -> Result<ClaimMatch> {
    if transcript.is_empty() {
        return Err(TranscriptError::EmptyInput);
    }
    if claim.trim().is_empty() {
        return Err(TranscriptError::EmptyClaim);
    }
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(TranscriptError::InvalidThreshold(threshold));
    }

    match mode {
        MatchMode::Exact => Ok(locate_exact(transcript, claim)),
        MatchMode::Fuzzy => Ok(locate_fuzzy(transcript, claim, threshold)),
    }
}

fn locate_exact(transcript: &[MergedSegment], claim: &str) -> ClaimMatch {
    let needle = claim.trim().to_lowercase();

    for segment in transcript {
        if segment.text.to_lowercase().contains(&needle) {
            return ClaimMatch {
                found: true,
                start: segment.start,
                matched_text: segment.text.clone(),
                score: 1.0,
                mode: MatchMode::Exact,
            };
        }
    }
    ClaimMatch::not_found(MatchMode::Exact)
}

fn locate_fuzzy(transcript: &[MergedSegment], claim: &str, threshold: f64) -> ClaimMatch {
    let claim_words = normalize_words(claim);
    if claim_words.is_empty() {
        // claim was all punctuation; nothing to score against
        return ClaimMatch::not_found(MatchMode::Fuzzy);
    }

    let mut best: Option<(&MergedSegment, f64)> = None;
    for segment in transcript {
        let segment_words = normalize_words(&segment.text);
        let common = claim_words.intersection(&segment_words).count();
        let score = common as f64 / claim_words.len() as f64;

        // strictly-greater comparison keeps the earliest segment on ties
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((segment, score));
        }
    }

    match best {
        Some((segment, score)) if score >= threshold => ClaimMatch {
            found: true,
            start: segment.start,
            matched_text: segment.text.clone(),
            score,
            mode: MatchMode::Fuzzy,
        },
        _ => ClaimMatch::not_found(MatchMode::Fuzzy),
    }
}

/// Normalize text into a word set: lowercase, punctuation stripped,
/// whitespace-tokenized
fn normalize_words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Extract every segment whose time span intersects the window
/// `[timestamp - context, timestamp + context]`
///
/// A segment's span runs from its start to the next segment's start; the
/// last segment extends to the end of the video. Segments keep their
/// individual timestamps.
pub fn extract_window(
    transcript: &[MergedSegment],
    timestamp: f64,
    context: f64,
) -> Result<Vec<MergedSegment>> {
    if transcript.is_empty() {
        return Err(TranscriptError::EmptyInput);
    }

    let window_start = (timestamp - context).max(0.0);
    let window_end = timestamp + context;

    let mut result = Vec::new();
    for (i, segment) in transcript.iter().enumerate() {
        let span_end = transcript
            .get(i + 1)
            .map(|next| next.start)
            .unwrap_or(f64::INFINITY);
        if segment.start <= window_end && span_end > window_start {
            result.push(segment.clone());
        }
    }
    Ok(result)
}
