//! Trial harness: repeats a chain and averages the resulting distances

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::chain::{Variant, run_chain};
use crate::config::{ConfigError, ExperimentConfig};
use crate::distance::distance;
use crate::rng::RandomSource;

/// Outcome of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    pub variant: Variant,
    pub original: String,
    /// Final message of the last trial only.
    pub final_message: String,
    /// One distance per trial, in run order.
    pub distances: Vec<usize>,
    /// Arithmetic mean of `distances`.
    pub average: f64,
}

impl TrialReport {
    pub fn trials(&self) -> usize {
        self.distances.len()
    }
}

/// Run `config.trials` independent chains from the original message.
pub fn run_trials<R>(
    config: &ExperimentConfig,
    variant: Variant,
    rng: &mut R,
) -> Result<TrialReport, ConfigError>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;

    let mut distances = Vec::with_capacity(config.trials);
    let mut final_message = config.message.clone();
    for trial in 0..config.trials {
        final_message = run_chain(config, variant, rng);
        let d = distance(&config.message, &final_message);
        tracing::debug!(%variant, trial, distance = d, "trial complete");
        distances.push(d);
    }

    let average = distances.iter().sum::<usize>() as f64 / distances.len() as f64;
    tracing::info!(%variant, trials = config.trials, average, "experiment complete");

    Ok(TrialReport {
        variant,
        original: config.message.clone(),
        final_message,
        distances,
        average,
    })
}

/// Run the given variants in order, sharing one random stream.
pub fn run_selected<R>(
    config: &ExperimentConfig,
    variants: &[Variant],
    rng: &mut R,
) -> Result<Vec<TrialReport>, ConfigError>
where
    R: RandomSource + ?Sized,
{
    variants
        .iter()
        .map(|&variant| run_trials(config, variant, rng))
        .collect()
}

/// Run every variant: plain, verified, then group-verified.
pub fn run_all<R>(config: &ExperimentConfig, rng: &mut R) -> Result<Vec<TrialReport>, ConfigError>
where
    R: RandomSource + ?Sized,
{
    let variants: Vec<Variant> = Variant::iter().collect();
    run_selected(config, &variants, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;

    #[test]
    fn test_zero_hops_average_is_zero() {
        let config = ExperimentConfig {
            chain_length: 0,
            ..Default::default()
        };
        let report = run_trials(&config, Variant::Plain, &mut SimRng::new(1)).unwrap();
        assert_eq!(report.final_message, config.message);
        assert_eq!(report.distances, vec![0; 10]);
        assert_eq!(report.average, 0.0);
    }

    #[test]
    fn test_average_is_mean_of_distances() {
        let config = ExperimentConfig {
            message: "the quick brown fox".to_string(),
            chain_length: 40,
            trials: 7,
            ..Default::default()
        };
        let report = run_trials(&config, Variant::Plain, &mut SimRng::new(99)).unwrap();
        assert_eq!(report.trials(), 7);
        let sum: usize = report.distances.iter().sum();
        assert!((report.average - sum as f64 / 7.0).abs() < 1e-12);
        assert!(report.average >= 0.0);
    }

    #[test]
    fn test_last_trial_message_is_reported() {
        let config = ExperimentConfig {
            message: "abcdefghij".to_string(),
            chain_length: 20,
            trials: 4,
            ..Default::default()
        };
        let report = run_trials(&config, Variant::Plain, &mut SimRng::new(5)).unwrap();
        assert_eq!(
            distance(&config.message, &report.final_message),
            *report.distances.last().unwrap()
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ExperimentConfig {
            trials: 0,
            ..Default::default()
        };
        let err = run_trials(&config, Variant::Plain, &mut SimRng::new(1)).unwrap_err();
        assert!(matches!(err, ConfigError::NoTrials));
    }

    #[test]
    fn test_run_all_order() {
        let config = ExperimentConfig {
            chain_length: 3,
            trials: 2,
            ..Default::default()
        };
        let reports = run_all(&config, &mut SimRng::new(8)).unwrap();
        let variants: Vec<Variant> = reports.iter().map(|r| r.variant).collect();
        assert_eq!(variants, vec![Variant::Plain, Variant::Verified, Variant::GroupVerified]);
    }

    #[test]
    fn test_run_selected_keeps_given_order() {
        let config = ExperimentConfig {
            chain_length: 3,
            trials: 2,
            ..Default::default()
        };
        let reports = run_selected(
            &config,
            &[Variant::GroupVerified, Variant::Plain],
            &mut SimRng::new(8),
        )
        .unwrap();
        let variants: Vec<Variant> = reports.iter().map(|r| r.variant).collect();
        assert_eq!(variants, vec![Variant::GroupVerified, Variant::Plain]);
        assert!(run_selected(&config, &[], &mut SimRng::new(8)).unwrap().is_empty());
    }

    #[test]
    fn test_run_all_matches_run_selected() {
        let config = ExperimentConfig {
            message: "abcdef".to_string(),
            chain_length: 5,
            trials: 3,
            ..Default::default()
        };
        let all = run_all(&config, &mut SimRng::new(31)).unwrap();
        let selected = run_selected(
            &config,
            &[Variant::Plain, Variant::Verified, Variant::GroupVerified],
            &mut SimRng::new(31),
        )
        .unwrap();
        assert_eq!(all, selected);
    }
}
