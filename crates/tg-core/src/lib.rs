//! tg-core: the telephone game simulation
//!
//! A message is passed along a chain of hops. Each hop may corrupt it, and
//! depending on the [`Variant`] one or several reviewers then try to repair
//! it against the original. Repeating the chain over several trials and
//! averaging the [`distance`] from the original measures how well each
//! arrangement preserves the message.
//!
//! All randomness goes through [`RandomSource`]; this crate does no I/O
//! apart from emitting `tracing` events and reading config files.

pub mod chain;
pub mod config;
pub mod correct;
pub mod distance;
pub mod distort;
pub mod harness;
pub mod report;
pub mod rng;

mod consts;

pub use chain::{Variant, run_chain, step};
pub use config::{ConfigError, ExperimentConfig};
pub use consts::*;
pub use correct::{correct, group_correct};
pub use distance::distance;
pub use distort::{Distortion, distort, distort_with};
pub use harness::{TrialReport, run_all, run_selected, run_trials};
pub use rng::{Draw, RandomSource, RngTraceEntry, ScriptedRng, SimRng};
