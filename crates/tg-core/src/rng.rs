//! Random number generation for the simulation
//!
//! Every operator draws through [`RandomSource`], so a run can be driven by a
//! seeded ChaCha generator for reproducibility or by a [`ScriptedRng`] that
//! replays exact draws.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The draws the distortion and correction operators need.
pub trait RandomSource {
    /// Returns true with probability `p` (a uniform draw in `[0, 1)` below `p`).
    fn chance(&mut self, p: f64) -> bool;

    /// Returns a uniform index in `[0, len)`.
    ///
    /// Returns 0 if len is 0.
    fn index(&mut self, len: usize) -> usize;

    /// Returns a uniform lowercase ASCII letter, `'a'..='z'`.
    fn lowercase(&mut self) -> char;
}

/// One recorded draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    Chance { p: f64, hit: bool },
    Index { len: usize, value: usize },
    Lowercase { value: char },
}

/// An RNG call trace entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RngTraceEntry {
    /// Sequence number (0-indexed)
    pub seq: u64,
    pub draw: Draw,
}

/// Simulation random number generator
///
/// Wraps ChaCha8Rng for reproducible runs.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: ChaCha8Rng,
    seed: u64,
    call_count: u64,
    tracing: bool,
    trace: Vec<RngTraceEntry>,
}

impl SimRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            call_count: 0,
            tracing: false,
            trace: Vec::new(),
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Start recording every draw, discarding any earlier trace.
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }

    /// Total number of draws made since creation
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    fn record(&mut self, draw: Draw) {
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count,
                draw,
            });
        }
        self.call_count += 1;
    }
}

impl RandomSource for SimRng {
    fn chance(&mut self, p: f64) -> bool {
        let hit = self.rng.gen_range(0.0..1.0) < p;
        self.record(Draw::Chance { p, hit });
        hit
    }

    fn index(&mut self, len: usize) -> usize {
        let value = if len == 0 { 0 } else { self.rng.gen_range(0..len) };
        self.record(Draw::Index { len, value });
        value
    }

    fn lowercase(&mut self) -> char {
        let value = char::from(self.rng.gen_range(b'a'..=b'z'));
        self.record(Draw::Lowercase { value });
        value
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays fixed draws, for deterministic tests of the operators.
///
/// Each kind of draw has its own queue. An exhausted queue yields a miss,
/// index 0 or `'a'`. Scripted indices are clamped to `len - 1`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    chances: VecDeque<bool>,
    indices: VecDeque<usize>,
    letters: VecDeque<char>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    pub fn indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    pub fn letters(mut self, letters: impl IntoIterator<Item = char>) -> Self {
        self.letters.extend(letters);
        self
    }

    /// True once every scripted draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.chances.is_empty() && self.indices.is_empty() && self.letters.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.indices.pop_front().unwrap_or(0);
        value.min(len.saturating_sub(1))
    }

    fn lowercase(&mut self) -> char {
        self.letters.pop_front().unwrap_or('a')
    }
}
