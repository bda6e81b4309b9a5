//! Random corruption applied once per hop

use crate::consts::SUBSTITUTION_PROBABILITY;
use crate::rng::RandomSource;

/// What a single call to [`distort_with`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distortion {
    Unchanged,
    /// The character at `index` was replaced by `letter`.
    Substituted { index: usize, letter: char },
    /// `letter` was inserted before `index`.
    Inserted { index: usize, letter: char },
}

/// Distort `message` with probability `p`.
///
/// On a hit, an index is drawn uniformly from the message, then a fair coin
/// picks substitution or insertion, then a lowercase letter is drawn. An
/// empty message is returned unchanged after the first draw.
pub fn distort_with<R>(message: &str, p: f64, rng: &mut R) -> (String, Distortion)
where
    R: RandomSource + ?Sized,
{
    if !rng.chance(p) {
        return (message.to_string(), Distortion::Unchanged);
    }

    let mut chars: Vec<char> = message.chars().collect();
    if chars.is_empty() {
        tracing::warn!("distortion drawn for an empty message, leaving it unchanged");
        return (String::new(), Distortion::Unchanged);
    }

    let index = rng.index(chars.len());
    let outcome = if rng.chance(SUBSTITUTION_PROBABILITY) {
        let letter = rng.lowercase();
        chars[index] = letter;
        Distortion::Substituted { index, letter }
    } else {
        let letter = rng.lowercase();
        chars.insert(index, letter);
        Distortion::Inserted { index, letter }
    };

    (chars.into_iter().collect(), outcome)
}

/// Distort `message` with probability `p`, discarding what happened.
pub fn distort<R>(message: &str, p: f64, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    distort_with(message, p, rng).0
}
