//! Scoring engine: turns one submission into a [`ScoreReport`].

use crate::edit_distance::edit_distance;
use crate::error::ScoringError;
use crate::matcher::count_matches;
use crate::normalizer::Normalizer;
use crate::types::{ScoreReport, Token, WordCounts};

/// Computes the metrics for one submission from the raw expected text,
/// the raw typed text, and the elapsed time.
///
/// Word counts come from the position-insensitive multiset matcher; the
/// LCS aligner is reserved for visual diffing and never influences the
/// score. The engine is total: empty strings, zero elapsed time, and an
/// empty reference all map to defined outputs instead of failing.
pub struct ScoringEngine {
    normalizer: Normalizer,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

impl ScoringEngine {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Scores a submission.
    ///
    /// # Arguments
    ///
    /// * `expected` - The authoritative reference transcript, raw.
    /// * `typed` - The text the user entered, raw.
    /// * `time_taken_seconds` - Elapsed time; zero or negative yields a
    ///   WPM of 0.
    ///
    /// # Example
    ///
    /// ```
    /// use scoring::ScoringEngine;
    ///
    /// let engine = ScoringEngine::default();
    /// let report = engine.score("the quick brown fox", "the quick brown fox", 60);
    /// assert_eq!(report.wpm, 4);
    /// assert_eq!(report.marks, 100);
    /// assert_eq!(report.wrong_words, 0);
    /// ```
    pub fn score(&self, expected: &str, typed: &str, time_taken_seconds: i64) -> ScoreReport {
        let reference_tokens = self.normalizer.normalize(expected);
        let typed_tokens = self.normalizer.normalize(typed);
        self.score_tokens(expected, typed, &reference_tokens, &typed_tokens, time_taken_seconds)
    }

    /// Scores a submission after checking both transcripts against a
    /// token cap.
    ///
    /// Word alignment and the legacy edit distance are O(n·m), so
    /// callers handling untrusted input should bound token counts before
    /// paying that cost. Exceeding the cap is reported as
    /// [`ScoringError::TranscriptTooLong`] for the caller to surface as
    /// a resource-limit error.
    pub fn score_guarded(
        &self,
        expected: &str,
        typed: &str,
        time_taken_seconds: i64,
        max_tokens: usize,
    ) -> Result<ScoreReport, ScoringError> {
        let reference_tokens = self.normalizer.normalize(expected);
        let typed_tokens = self.normalizer.normalize(typed);
        let tokens = reference_tokens.len().max(typed_tokens.len());
        if tokens > max_tokens {
            return Err(ScoringError::TranscriptTooLong { tokens, max_tokens });
        }
        Ok(self.score_tokens(expected, typed, &reference_tokens, &typed_tokens, time_taken_seconds))
    }

    fn score_tokens(
        &self,
        expected: &str,
        typed: &str,
        reference_tokens: &[Token],
        typed_tokens: &[Token],
        time_taken_seconds: i64,
    ) -> ScoreReport {
        let counts = count_matches(reference_tokens, typed_tokens);

        // Legacy character-level error count over the trimmed raw texts,
        // with the original backend's guard: no expected text, no errors.
        let errors = if expected.is_empty() {
            0
        } else {
            edit_distance(typed.trim(), expected.trim())
        };

        ScoreReport {
            wpm: words_per_minute(typed_tokens.len(), time_taken_seconds),
            marks: marks_percentage(&counts),
            errors,
            total_words: counts.total_words,
            correct_words: counts.correct_words,
            wrong_words: counts.wrong_words,
        }
    }
}

/// Rounded words-per-minute. Never negative, never NaN or infinite:
/// zero or negative elapsed time yields 0.
fn words_per_minute(words_typed: usize, time_taken_seconds: i64) -> u32 {
    if time_taken_seconds <= 0 {
        return 0;
    }
    let rate = words_typed as f64 / (time_taken_seconds as f64 / 60.0);
    if rate.is_finite() { rate.round() as u32 } else { 0 }
}

/// Rounded percentage of reference words covered by the typed text.
/// An empty reference scores 100, never a division by zero.
fn marks_percentage(counts: &WordCounts) -> u32 {
    if counts.total_words == 0 {
        return 100;
    }
    let percentage = counts.correct_words as f64 / counts.total_words as f64 * 100.0;
    percentage.round().max(0.0) as u32
}
