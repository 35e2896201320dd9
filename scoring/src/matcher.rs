//! Multiset word matcher — the scoring-path word comparison.
//!
//! Unlike the LCS aligner, this comparison is position-insensitive: a
//! reference word is credited if it appears anywhere in the typed text,
//! with each typed occurrence consumable at most once. Scoring tolerates
//! word reordering and stray insertions this way; the visual diff does
//! not. That asymmetry is deliberate.

use std::collections::HashMap;

use crate::types::{Token, WordCounts};

/// Counts how many reference tokens are covered by the typed tokens,
/// treating both sides as multisets.
///
/// Builds a frequency map of typed tokens, then walks the reference
/// tokens in order, consuming one remaining occurrence per exact match.
/// `total_words` is always the reference length, and
/// `total_words == correct_words + wrong_words` holds for every input.
///
/// An empty reference yields `total_words == 0`; the caller must treat
/// accuracy as 100 in that case rather than dividing by zero.
///
/// # Example
///
/// ```
/// use scoring::count_matches;
///
/// let reference: Vec<String> = ["the", "quick", "brown", "fox"].iter().map(|s| s.to_string()).collect();
/// let typed: Vec<String> = ["the", "slow", "brown", "fox"].iter().map(|s| s.to_string()).collect();
/// let counts = count_matches(&reference, &typed);
/// assert_eq!(counts.correct_words, 3);
/// assert_eq!(counts.wrong_words, 1);
/// ```
pub fn count_matches(reference: &[Token], typed: &[Token]) -> WordCounts {
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for word in typed {
        *remaining.entry(word.as_str()).or_default() += 1;
    }

    let mut correct_words = 0;
    for word in reference {
        if let Some(count) = remaining.get_mut(word.as_str()) {
            if *count > 0 {
                *count -= 1;
                correct_words += 1;
            }
        }
    }

    let total_words = reference.len();
    WordCounts {
        total_words,
        correct_words,
        wrong_words: total_words - correct_words,
    }
}
