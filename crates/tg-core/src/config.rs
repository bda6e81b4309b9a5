//! Experiment parameters
//!
//! Defaults reproduce the fixed constants of the experiments. A JSON file
//! may override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("At least one trial is required")]
    NoTrials,

    #[error("A group needs at least one member")]
    EmptyGroup,
}

/// Parameters for one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Original message, held constant for every trial
    pub message: String,
    /// Hops per chain (people, or groups for the group variant)
    pub chain_length: usize,
    pub trials: usize,
    pub distortion_probability: f64,
    pub correction_probability: f64,
    /// Group size; `group_size - 1` reviewers correct after each distortion
    pub group_size: usize,
    /// Seed for the simulation RNG; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            message: consts::STARTING_MESSAGE.to_string(),
            chain_length: consts::CHAIN_LENGTH,
            trials: consts::TRIALS,
            distortion_probability: consts::DISTORTION_PROBABILITY,
            correction_probability: consts::CORRECTION_PROBABILITY,
            group_size: consts::GROUP_SIZE,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("distortion_probability", self.distortion_probability)?;
        check_probability("correction_probability", self.correction_probability)?;
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if self.group_size == 0 {
            return Err(ConfigError::EmptyGroup);
        }
        Ok(())
    }

    /// Correction passes per group: everyone except the member who distorted.
    pub fn reviewers(&self) -> usize {
        self.group_size.saturating_sub(1)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
