//! transcript-core - Core types and business logic for transcript fact-checking
//!
//! This crate turns raw caption cues into readable merged transcripts,
//! interleaves chapter markers, and locates claims by exact or fuzzy text
//! match. It consumes already-fetched cue and chapter lists; all network
//! fetching and page scraping is owned by external collaborators.

pub mod chapters;
pub mod error;
pub mod locate;
pub mod merge;
pub mod render;
pub mod timestamp;
pub mod types;
pub mod video_id;

pub use chapters::*;
pub use error::*;
pub use locate::*;
pub use merge::*;
pub use render::*;
pub use timestamp::*;
pub use types::*;
pub use video_id::*;
