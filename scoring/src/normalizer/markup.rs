//! Markup removal stages: the editor's outer wrapper and inline tags.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// The outer wrapper a specific rich-text editor serializes around its
/// content (the platform's editor emits `<p>...</p>`).
///
/// Stripping is strictly shape-checked: the wrapper is removed only when
/// both the opening and closing tag are actually present. Inputs that do
/// not carry the wrapper, including inputs shorter than the wrapper
/// itself, pass through untouched. An earlier revision removed a fixed
/// number of leading and trailing characters unconditionally, which
/// corrupted any text not produced by that exact editor and collapsed
/// short inputs to the empty string.
pub struct EditorWrapper {
    open: String,
    close: String,
}

impl EditorWrapper {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The `<p>` / `</p>` paragraph wrapper used by the platform editor.
    pub fn paragraph() -> Self {
        Self::new("<p>", "</p>")
    }

    /// Removes one layer of the wrapper if present, otherwise returns
    /// the input unchanged.
    pub fn strip<'a>(&self, text: &'a str) -> &'a str {
        text.strip_prefix(self.open.as_str())
            .and_then(|rest| rest.strip_suffix(self.close.as_str()))
            .unwrap_or(text)
    }
}

impl Default for EditorWrapper {
    fn default() -> Self {
        Self::paragraph()
    }
}

/// Strips remaining markup tags, keeping rendered text content only.
///
/// Tags are replaced with a space so adjacent elements do not fuse into
/// one token, and the small set of HTML entities the editor emits is
/// decoded. No script execution, ever.
pub fn strip_tags(text: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(text, " ");
    decode_entities(&without_tags)
}

fn decode_entities(text: &str) -> String {
    // The editor only emits this fixed set. `&amp;` goes last so decoded
    // ampersands cannot form new entities.
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
