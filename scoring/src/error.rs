//! Scoring Error Types
//!
//! The scoring core is total: every combination of string and number
//! inputs maps to defined numeric outputs rather than a failure. The one
//! exception is the guarded entry point, which rejects transcripts large
//! enough to make the quadratic alignment cost a resource concern.

use std::fmt;

/// Represents the error conditions the scoring crate can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// A transcript exceeds the configured token cap for alignment.
    TranscriptTooLong { tokens: usize, max_tokens: usize },
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::TranscriptTooLong { tokens, max_tokens } => write!(
                f,
                "transcript has {tokens} words, exceeding the limit of {max_tokens}"
            ),
        }
    }
}

impl std::error::Error for ScoringError {}
