/// TextTransform is a strategy trait for script-specific text rewriting.
///
/// It runs after tag stripping and before tokenization. The platform uses
/// it to remap legacy-font encodings (e.g. Kruti Dev) to Unicode before
/// comparison; that remapping table lives with the caller, not in this
/// crate, so the scoring core stays independent of any particular editor
/// or font-encoding scheme.
pub trait TextTransform: Send + Sync {
    /// Rewrites the markup-stripped text. Must be deterministic and
    /// side-effect-free.
    fn apply(&self, text: &str) -> String;
}
