//! Chain driver: threads a message through a sequence of hops
//!
//! All three experiments share one driver loop; the [`Variant`] picks what
//! happens after each distortion.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::config::ExperimentConfig;
use crate::correct::{correct, group_correct};
use crate::distort::distort;
use crate::rng::RandomSource;

/// Which experiment a chain runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Variant {
    /// Person to person, distortion only
    Plain,
    /// Person to person, each person corrects once
    Verified,
    /// Group to group, every other group member corrects in turn
    GroupVerified,
}

impl Variant {
    /// Label for the chain length in report summaries.
    pub fn chain_label(self) -> &'static str {
        match self {
            Variant::Plain | Variant::Verified => "NPEOPLE",
            Variant::GroupVerified => "NGROUPS",
        }
    }

    pub fn corrects(self) -> bool {
        !matches!(self, Variant::Plain)
    }
}

/// One hop: distort `current`, then correct it against the original as the
/// variant requires.
pub fn step<R>(config: &ExperimentConfig, variant: Variant, current: &str, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let distorted = distort(current, config.distortion_probability, rng);
    match variant {
        Variant::Plain => distorted,
        Variant::Verified => correct(
            &config.message,
            &distorted,
            config.correction_probability,
            rng,
        ),
        Variant::GroupVerified => group_correct(
            &config.message,
            &distorted,
            config.correction_probability,
            config.reviewers(),
            rng,
        ),
    }
}

/// Run one full chain of `config.chain_length` hops from the original
/// message and return the final message.
pub fn run_chain<R>(config: &ExperimentConfig, variant: Variant, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let mut current = config.message.clone();
    for hop in 0..config.chain_length {
        current = step(config, variant, &current, rng);
        tracing::trace!(%variant, hop, len = current.chars().count(), "hop complete");
    }
    current
}
