//! Diff builder and the fixed presentation contract.
//!
//! The UI renders each segment kind with a fixed visual marker: matches
//! as plain text, wrong words struck through, correct words in square
//! brackets. `render_segment` encodes that mapping; consumers that draw
//! their own styling still follow the same kind-to-marker contract.

use crate::aligner::align;
use crate::normalizer::Normalizer;
use crate::types::DiffSegment;

/// Builds word-level diffs between a reference transcript and a typed
/// submission for display.
///
/// Both inputs pass through the same normalization pipeline the scoring
/// engine uses, then the LCS word aligner produces the segments. Output
/// is ephemeral and render-only; nothing here is persisted.
pub struct DiffBuilder {
    normalizer: Normalizer,
}

impl Default for DiffBuilder {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

impl DiffBuilder {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Normalizes both raw texts and aligns them into diff segments.
    pub fn build(&self, reference_raw: &str, typed_raw: &str) -> Vec<DiffSegment> {
        let reference = self.normalizer.normalize(reference_raw);
        let typed = self.normalizer.normalize(typed_raw);
        align(&reference, &typed)
    }
}

/// Renders one segment with its contractual visual marker:
///
/// - `Match` → the word, unmarked;
/// - `Substitution` → struck-through wrong word, then the correct word
///   in brackets;
/// - `Deletion` → struck-through wrong word only;
/// - `Insertion` → bracketed correct word only.
pub fn render_segment(segment: &DiffSegment) -> String {
    match segment {
        DiffSegment::Match { value } => value.clone(),
        DiffSegment::Substitution { wrong, correct } => {
            format!("<del>{wrong}</del> [{correct}]")
        }
        DiffSegment::Deletion { wrong } => format!("<del>{wrong}</del>"),
        DiffSegment::Insertion { correct } => format!("[{correct}]"),
    }
}

/// Renders a whole segment sequence, space-separated.
pub fn render_text(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .map(render_segment)
        .collect::<Vec<_>>()
        .join(" ")
}
