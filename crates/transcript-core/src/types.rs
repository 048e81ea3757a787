//! Core type definitions for transcript data

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranscriptError};
use crate::timestamp::format_timestamp;

/// A single raw caption cue as delivered by the upstream caption source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCaptionCue {
    /// Start time in seconds
    pub start: f64,
    /// Duration in seconds
    #[serde(default)]
    pub duration: f64,
    /// Caption text
    pub text: String,
}

impl RawCaptionCue {
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Result<Self> {
        let cue = Self {
            start,
            duration,
            text: text.into(),
        };
        cue.validate()?;
        Ok(cue)
    }

    /// Reject malformed records at the boundary
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(TranscriptError::InvalidCue(format!(
                "start time {} is negative or non-finite",
                self.start
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(TranscriptError::InvalidCue(format!(
                "duration {} is negative or non-finite",
                self.duration
            )));
        }
        Ok(())
    }

    /// End time in seconds
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Validate a cue list: each record well-formed, starts ascending
pub fn validate_cues(cues: &[RawCaptionCue]) -> Result<()> {
    let mut prev = 0.0f64;
    for (i, cue) in cues.iter().enumerate() {
        cue.validate()
            .map_err(|e| TranscriptError::InvalidCue(format!("index {}: {}", i, e)))?;
        if cue.start < prev {
            return Err(TranscriptError::InvalidCue(format!(
                "index {}: start {} is before preceding cue at {}",
                i, cue.start, prev
            )));
        }
        prev = cue.start;
    }
    Ok(())
}

/// A merged, readable block of one or more cues
///
/// The end time is implicit: the next segment's start, or the end of the
/// video for the last segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedSegment {
    /// Start time in seconds
    pub start: f64,
    /// Space-joined text of the composing cues
    pub text: String,
}

impl MergedSegment {
    /// Formatted start time (MM:SS or HH:MM:SS)
    pub fn timestamp(&self) -> String {
        format_timestamp(self.start)
    }
}

/// A creator-defined named time point dividing a video into sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterMarker {
    /// Start time in seconds
    pub start: f64,
    /// Chapter title
    pub title: String,
}

impl ChapterMarker {
    pub fn new(start: f64, title: impl Into<String>) -> Self {
        Self {
            start,
            title: title.into(),
        }
    }

    /// Formatted start time (MM:SS or HH:MM:SS)
    pub fn timestamp(&self) -> String {
        format_timestamp(self.start)
    }
}

/// One line of an annotated transcript: a merged segment or a chapter marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotatedLine {
    Segment(MergedSegment),
    Chapter(ChapterMarker),
}

impl AnnotatedLine {
    /// Start time of the underlying item
    pub fn start(&self) -> f64 {
        match self {
            AnnotatedLine::Segment(s) => s.start,
            AnnotatedLine::Chapter(c) => c.start,
        }
    }
}

/// Claim matching mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Exact,
    #[default]
    Fuzzy,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Result of locating a claim in a transcript
///
/// "Not found" is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimMatch {
    pub found: bool,
    /// Start time of the matched segment in seconds
    pub start: f64,
    /// Text of the matched segment
    pub matched_text: String,
    /// Match score in [0.0, 1.0]; 1.0 for exact matches
    pub score: f64,
    /// Mode that produced this result
    pub mode: MatchMode,
}

impl ClaimMatch {
    pub fn not_found(mode: MatchMode) -> Self {
        Self {
            found: false,
            start: 0.0,
            matched_text: String::new(),
            score: 0.0,
            mode,
        }
    }

    /// Formatted start time of the match
    pub fn timestamp(&self) -> String {
        format_timestamp(self.start)
    }
}
