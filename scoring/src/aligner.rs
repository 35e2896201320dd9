//! LCS-based word aligner — the diff-path comparison.
//!
//! Computes a position-aware alignment between the reference and typed
//! token sequences and classifies every token into a display segment.
//! The walk order and tie-break below are part of the output contract:
//! several alignments can be equally valid under the LCS metric, and the
//! renderer needs the same one every time.

use crate::types::{DiffSegment, Token};

/// Raw alignment event emitted by the LCS walk, before segment merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlignEvent<'a> {
    /// Equal tokens at aligned positions.
    Match(&'a str),
    /// A reference token with no typed counterpart at this position.
    ReferenceOnly(&'a str),
    /// A typed token with no reference counterpart at this position.
    TypedOnly(&'a str),
}

/// Aligns the typed tokens against the reference tokens and returns the
/// classified diff segments in left-to-right order.
///
/// The alignment maximizes the longest common subsequence at word
/// granularity. Where both branches of the dynamic program are equally
/// good, the reference token is consumed first; this tie-break pins down
/// which of the equally-valid alignments is produced.
///
/// O(n·m) time and space in the two token counts, which is acceptable
/// for transcripts of a few hundred words; callers with untrusted input
/// should cap token counts first (see `ScoringEngine::score_guarded`).
pub fn align(reference: &[Token], typed: &[Token]) -> Vec<DiffSegment> {
    merge_events(walk(reference, typed))
}

/// Runs the LCS dynamic program and walks it from the front, emitting
/// one event per consumed token.
fn walk<'a>(reference: &'a [Token], typed: &'a [Token]) -> Vec<AlignEvent<'a>> {
    let n = reference.len();
    let m = typed.len();

    // table[i][j] = LCS length of reference[i..] vs typed[j..].
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if reference[i] == typed[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut events = Vec::with_capacity(n + m);
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if reference[i] == typed[j] {
            events.push(AlignEvent::Match(&reference[i]));
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            // Tie-break: consume the reference token first.
            events.push(AlignEvent::ReferenceOnly(&reference[i]));
            i += 1;
        } else {
            events.push(AlignEvent::TypedOnly(&typed[j]));
            j += 1;
        }
    }
    while i < n {
        events.push(AlignEvent::ReferenceOnly(&reference[i]));
        i += 1;
    }
    while j < m {
        events.push(AlignEvent::TypedOnly(&typed[j]));
        j += 1;
    }

    events
}

/// Collapses the raw event stream into display segments.
///
/// A typed-only event adjacent to a reference-only event, in either
/// order, is one substituted word and merges into a single
/// `Substitution { wrong, correct }`. Standalone typed-only events are
/// extra words (`Deletion`); standalone reference-only events are missed
/// words (`Insertion`). The scan is greedy left to right, so the merge
/// is deterministic. Every event is consumed exactly once, which is what
/// makes the two-sided token reconstruction invariant hold.
fn merge_events(events: Vec<AlignEvent<'_>>) -> Vec<DiffSegment> {
    let mut segments = Vec::with_capacity(events.len());
    let mut idx = 0;
    while idx < events.len() {
        match (events[idx], events.get(idx + 1).copied()) {
            (AlignEvent::TypedOnly(wrong), Some(AlignEvent::ReferenceOnly(correct)))
            | (AlignEvent::ReferenceOnly(correct), Some(AlignEvent::TypedOnly(wrong))) => {
                segments.push(DiffSegment::Substitution {
                    wrong: wrong.to_string(),
                    correct: correct.to_string(),
                });
                idx += 2;
            }
            (AlignEvent::Match(value), _) => {
                segments.push(DiffSegment::Match {
                    value: value.to_string(),
                });
                idx += 1;
            }
            (AlignEvent::TypedOnly(wrong), _) => {
                segments.push(DiffSegment::Deletion {
                    wrong: wrong.to_string(),
                });
                idx += 1;
            }
            (AlignEvent::ReferenceOnly(correct), _) => {
                segments.push(DiffSegment::Insertion {
                    correct: correct.to_string(),
                });
                idx += 1;
            }
        }
    }
    segments
}
