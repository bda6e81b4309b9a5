//! Probabilistic repair of a received message against the original
//!
//! Repair is deliberately imperfect: each mismatched character is fixed
//! only with the given probability, so a message need not converge.

use crate::rng::RandomSource;

/// One reviewer's pass over `received`.
///
/// If the lengths differ, `received` is first replaced by the leading
/// `min(len(received), len(original))` characters of `original`, discarding
/// what was actually received. Then every position that still differs from
/// `original` is repaired with probability `p`.
///
/// The output has `min(len(received), len(original))` characters.
pub fn correct<R>(original: &str, received: &str, p: f64, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let original: Vec<char> = original.chars().collect();
    let mut repaired: Vec<char> = received.chars().collect();

    if repaired.len() != original.len() {
        let keep = repaired.len().min(original.len());
        repaired = original[..keep].to_vec();
    }

    for (slot, &want) in repaired.iter_mut().zip(&original) {
        if *slot != want && rng.chance(p) {
            *slot = want;
        }
    }

    repaired.into_iter().collect()
}

/// `passes` reviewers in a row, each seeing the previous one's output and
/// always comparing against the same `original`. No early exit.
pub fn group_correct<R>(original: &str, received: &str, p: f64, passes: usize, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let mut current = received.to_string();
    for _ in 0..passes {
        current = correct(original, &current, p, rng);
    }
    current
}
