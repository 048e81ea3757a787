//! Cue merging: fold fine-grained caption cues into readable segments

use crate::types::{MergedSegment, RawCaptionCue};

/// Default merge threshold in seconds
pub const DEFAULT_MERGE_THRESHOLD: f64 = 10.0;

/// Accumulator for the merge fold
struct Accumulator {
    text: String,
    start: f64,
    duration: f64,
}

impl Accumulator {
    fn from_cue(cue: &RawCaptionCue) -> Self {
        Self {
            text: cue.text.clone(),
            start: cue.start,
            duration: cue.duration,
        }
    }

    fn push(&mut self, cue: &RawCaptionCue) {
        if self.text.is_empty() {
            self.text = cue.text.clone();
        } else if !cue.text.is_empty() {
            self.text.push(' ');
            self.text.push_str(&cue.text);
        }
        self.duration += cue.duration;
    }

    fn flush(self) -> MergedSegment {
        MergedSegment {
            start: self.start,
            text: self.text,
        }
    }
}

/// Merge ordered caption cues into segments bounded by a duration threshold
///
/// A cue joins the current segment unless the accumulated duration would
/// exceed `threshold`, in which case the segment is flushed and the cue
/// starts a new one. A single cue longer than the threshold still forms its
/// own segment. Text is space-joined in cue order; nothing is dropped or
/// reordered.
pub fn merge_cues(cues: &[RawCaptionCue], threshold: f64) -> Vec<MergedSegment> {
    let mut segments = Vec::new();
    let mut acc: Option<Accumulator> = None;

    for cue in cues {
        acc = Some(match acc.take() {
            Some(a) if a.duration > 0.0 && a.duration + cue.duration > threshold => {
                segments.push(a.flush());
                Accumulator::from_cue(cue)
            }
            Some(mut a) => {
                a.push(cue);
                a
            }
            None => Accumulator::from_cue(cue),
        });
    }

    segments.extend(acc.map(Accumulator::flush));
    segments
}
