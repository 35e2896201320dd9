//! Character-level Levenshtein distance.
//!
//! This populates the backward-compatible `errors` field on stored
//! submissions. Earlier revisions of the platform derived accuracy from
//! this count; the current scoring path uses word-level multiset matching
//! instead, and this value is kept only so older records and newer ones
//! remain comparable.

/// Computes the Levenshtein distance between two strings, counting
/// insertions, deletions, and substitutions of single characters at unit
/// cost.
///
/// Runs in O(n·m) time and O(min(n, m)) space over character counts.
///
/// # Example
///
/// ```
/// use scoring::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", ""), 0);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Row axis follows the shorter string to keep the rows small.
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, long_ch) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_ch) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(long_ch != short_ch);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
