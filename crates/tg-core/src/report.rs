//! Presentation of experiment results, human-readable and JSON

use crate::chain::Variant;
use crate::config::ExperimentConfig;
use crate::consts::SEPARATOR_WIDTH;
use crate::harness::TrialReport;

fn percent(p: f64) -> u32 {
    (p * 100.0).round() as u32
}

/// Parameter summary, e.g. `NPEOPLE: 150 | TRIALS: 10 | DISORT: 30%`.
pub fn summary_line(config: &ExperimentConfig, variant: Variant) -> String {
    let mut line = format!(
        "{}: {} | TRIALS: {} | DISORT: {}%",
        variant.chain_label(),
        config.chain_length,
        config.trials,
        percent(config.distortion_probability)
    );
    if variant.corrects() {
        line.push_str(&format!(" | CORR: {}%", percent(config.correction_probability)));
    }
    if variant == Variant::GroupVerified {
        let share = config.reviewers() as f64 / config.group_size as f64;
        line.push_str(&format!(" | G-CORR: {}%", percent(share)));
    }
    line
}

/// The five-line report block, newline-terminated.
pub fn render(config: &ExperimentConfig, report: &TrialReport) -> String {
    // `{:?}` keeps a trailing `.0` on whole averages.
    format!(
        "{}\nOriginal Message: {}\nFinal Message: {}\nAverage Final Levenshtein Distance: {:?} over {} trials\n{}\n",
        summary_line(config, report.variant),
        report.original,
        report.final_message,
        report.average,
        report.trials(),
        "-".repeat(SEPARATOR_WIDTH)
    )
}

/// Serialize reports to a pretty JSON array.
pub fn to_json(reports: &[TrialReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(variant: Variant) -> TrialReport {
        TrialReport {
            variant,
            original: "abcdef".to_string(),
            final_message: "abzdef".to_string(),
            distances: vec![1, 0, 2, 1],
            average: 1.0,
        }
    }

    #[test]
    fn test_summary_lines() {
        let config = ExperimentConfig::default();
        assert_eq!(
            summary_line(&config, Variant::Plain),
            "NPEOPLE: 150 | TRIALS: 10 | DISORT: 30%"
        );
        assert_eq!(
            summary_line(&config, Variant::Verified),
            "NPEOPLE: 150 | TRIALS: 10 | DISORT: 30% | CORR: 50%"
        );
        assert_eq!(
            summary_line(&config, Variant::GroupVerified),
            "NGROUPS: 150 | TRIALS: 10 | DISORT: 30% | CORR: 50% | G-CORR: 90%"
        );
    }

    #[test]
    fn test_render_block() {
        let config = ExperimentConfig {
            message: "abcdef".to_string(),
            trials: 4,
            ..Default::default()
        };
        let text = render(&config, &report(Variant::Plain));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "NPEOPLE: 150 | TRIALS: 4 | DISORT: 30%");
        assert_eq!(lines[1], "Original Message: abcdef");
        assert_eq!(lines[2], "Final Message: abzdef");
        assert_eq!(lines[3], "Average Final Levenshtein Distance: 1.0 over 4 trials");
        assert_eq!(lines[4], "-".repeat(57));
    }

    #[test]
    fn test_fractional_average() {
        let config = ExperimentConfig::default();
        let mut r = report(Variant::Verified);
        r.average = 12.3;
        assert!(render(&config, &r).contains("Distance: 12.3 over"));
    }

    #[test]
    fn test_json_round_trip() {
        let reports = vec![report(Variant::GroupVerified)];
        let json = to_json(&reports).unwrap();
        assert!(json.contains("\"group-verified\""));
        let back: Vec<TrialReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reports);
    }
}
