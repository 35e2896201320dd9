//! Core data types shared across the scoring and diff pipelines.

use serde::Serialize;

/// A normalized whitespace-delimited word extracted from reference or
/// typed text. Equality is exact string match; no stemming or
/// case-folding happens beyond what the normalizer performs.
pub type Token = String;

/// Word-level counts produced by the multiset matcher.
///
/// Invariant: `total_words == correct_words + wrong_words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordCounts {
    /// Number of tokens in the reference transcript.
    pub total_words: usize,
    /// Reference tokens that appear (with multiplicity) in the typed text.
    pub correct_words: usize,
    /// Reference tokens the typed text is missing.
    pub wrong_words: usize,
}

/// The full set of metrics computed for one submission.
///
/// All values are non-negative integers. `errors` is the legacy
/// character-edit-distance count kept for backward compatibility with
/// older stored records; it never feeds into `marks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// Words typed per minute, rounded. `0` when no time has elapsed.
    pub wpm: u32,
    /// Percentage score derived from `correct_words / total_words`,
    /// rounded; `100` when the reference transcript is empty.
    pub marks: u32,
    /// Levenshtein distance between the trimmed raw typed and expected
    /// texts (legacy field).
    pub errors: usize,
    pub total_words: usize,
    pub correct_words: usize,
    pub wrong_words: usize,
}

/// One classified unit of diff output.
///
/// Segments are emitted left to right. Concatenating the typed-side
/// fields (`Match::value`, `Substitution::wrong`, `Deletion::wrong`)
/// reconstructs the typed token sequence exactly, and concatenating the
/// reference-side fields (`Match::value`, `Substitution::correct`,
/// `Insertion::correct`) reconstructs the reference token sequence; no
/// token is silently dropped. Segments are ephemeral and render-only,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffSegment {
    /// The same word at aligned positions on both sides.
    Match { value: String },
    /// A typed word paired with the reference word it displaced.
    Substitution { wrong: String, correct: String },
    /// An extra typed word with no reference counterpart.
    Deletion { wrong: String },
    /// A reference word missing from the typed text.
    Insertion { correct: String },
}
