//! Divergence between two messages
//!
//! This is a position-aligned mismatch count plus a length penalty. It is
//! reported as the "Levenshtein distance" but performs no alignment search,
//! so a single insertion near the front shifts every later character and
//! counts each of them.

/// Count of differing characters over the shared prefix, plus the difference
/// in lengths. Lengths are measured in `char`s.
pub fn distance(a: &str, b: &str) -> usize {
    let mismatches = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    mismatches + a.chars().count().abs_diff(b.chars().count())
}
