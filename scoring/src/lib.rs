//! # Scoring Library
//!
//! This crate provides the core logic for scoring dictation submissions.
//! A user listens to an audio clip and types what they hear; this library
//! compares the typed transcript against the authoritative reference
//! transcript and produces both a quantitative score (marks, words per
//! minute, error counts) and a word-level visual diff.
//!
//! ## Key Concepts
//! - **Normalizer**: A pipeline that strips editor markup and splits raw
//!   text into comparable word tokens.
//! - **ScoringEngine**: Computes marks, WPM, and word counts for one
//!   submission using position-insensitive multiset word matching.
//! - **DiffBuilder**: Produces an ordered, position-sensitive sequence of
//!   diff segments (match / substitution / deletion / insertion) via
//!   LCS-based word alignment, for rendering a visual comparison.
//!
//! Everything here is a pure, synchronous function over immutable input
//! strings. There is no I/O and no shared mutable state; each scoring or
//! diff request is independent and may run in parallel with others.

pub mod aligner;
pub mod diff;
pub mod edit_distance;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod types;

pub use aligner::align;
pub use diff::{DiffBuilder, render_segment, render_text};
pub use edit_distance::edit_distance;
pub use engine::ScoringEngine;
pub use error::ScoringError;
pub use matcher::count_matches;
pub use normalizer::{EditorWrapper, Normalizer, TextTransform};
pub use types::{DiffSegment, ScoreReport, Token, WordCounts};
