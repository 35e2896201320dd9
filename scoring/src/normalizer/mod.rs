//! Text normalization pipeline.
//!
//! Both the scoring engine and the diff builder compare word tokens, not
//! raw strings. This module turns the raw text captured from the editor
//! into those tokens through a pipeline of independently testable stages:
//!
//! 1. strip the rich-text editor's outer wrapper (pluggable, see
//!    [`EditorWrapper`]);
//! 2. strip any remaining markup tags, keeping rendered text content only;
//! 3. apply an optional injected [`TextTransform`] (e.g. legacy-font to
//!    Unicode remapping, which is owned by the caller, not this crate);
//! 4. trim, split on whitespace runs, and discard empty tokens.
//!
//! The pipeline is deterministic and side-effect-free; empty input yields
//! an empty token sequence.

mod markup;
mod transform;

pub use markup::{EditorWrapper, strip_tags};
pub use transform::TextTransform;

use crate::types::Token;

/// Configurable normalization pipeline.
pub struct Normalizer {
    wrapper: Option<EditorWrapper>,
    transform: Option<Box<dyn TextTransform>>,
}

impl Default for Normalizer {
    /// The platform default: strip the paragraph wrapper the rich-text
    /// editor serializes, no script transform.
    fn default() -> Self {
        Self {
            wrapper: Some(EditorWrapper::paragraph()),
            transform: None,
        }
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pipeline with no wrapper stripping at all, for inputs that do
    /// not come from the rich-text editor.
    pub fn without_wrapper() -> Self {
        Self {
            wrapper: None,
            transform: None,
        }
    }

    /// Replaces the wrapper-stripping stage.
    pub fn with_wrapper(mut self, wrapper: EditorWrapper) -> Self {
        self.wrapper = Some(wrapper);
        self
    }

    /// Injects a post-markup transform such as a transliterator.
    pub fn with_transform(mut self, transform: Box<dyn TextTransform>) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Runs every stage except tokenization, returning trimmed plain
    /// text with all markup removed.
    pub fn plain_text(&self, raw: &str) -> String {
        let unwrapped = match &self.wrapper {
            Some(wrapper) => wrapper.strip(raw),
            None => raw,
        };
        let stripped = strip_tags(unwrapped);
        let transformed = match &self.transform {
            Some(transform) => transform.apply(&stripped),
            None => stripped,
        };
        transformed.trim().to_string()
    }

    /// Runs the full pipeline, producing word tokens.
    pub fn normalize(&self, raw: &str) -> Vec<Token> {
        tokenize(&self.plain_text(raw))
    }
}

/// Splits trimmed text on runs of whitespace, discarding empty tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(str::to_string).collect()
}
