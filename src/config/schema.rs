use crate::quiz::{OverallScoreMode, CONFIDENCE_MAX};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration.
///
/// Every section is optional; an empty file gives the defaults.
///
/// Example YAML:
/// ```yaml
/// quiz:
///   confidence_max: 15
/// premium:
///   overall_score: normalized
/// payment:
///   success_rate: 0.8
///   processing_delay: 3s
/// store:
///   path: /tmp/premium-store.json
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,

    #[serde(default)]
    pub premium: PremiumConfig,

    #[serde(default)]
    pub payment: PaymentConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// Score that maps to 100% confidence in the stream recommendation
    #[serde(default = "default_confidence_max")]
    pub confidence_max: u32,
}

fn default_confidence_max() -> u32 {
    CONFIDENCE_MAX
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            confidence_max: CONFIDENCE_MAX,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PremiumConfig {
    /// `literal` (default) or `normalized`
    #[serde(default)]
    pub overall_score: OverallScoreMode,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaymentConfig {
    /// Probability in [0, 1] that a simulated charge is approved
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,

    /// Pause before the outcome, humantime syntax ("3s", "500ms")
    #[serde(default = "default_processing_delay")]
    pub processing_delay: String,
}

fn default_success_rate() -> f64 {
    crate::payment::DEFAULT_SUCCESS_RATE
}

fn default_processing_delay() -> String {
    "3s".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            success_rate: default_success_rate(),
            processing_delay: default_processing_delay(),
        }
    }
}

impl PaymentConfig {
    /// Parsed delay. Falls back to the default when the string is invalid;
    /// `validate_config` reports that case at startup.
    pub fn delay(&self) -> Duration {
        humantime::parse_duration(&self.processing_delay)
            .unwrap_or(crate::payment::DEFAULT_PROCESSING_DELAY)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Overrides the premium store file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.quiz.confidence_max, 15);
        assert_eq!(config.premium.overall_score, OverallScoreMode::Literal);
        assert_eq!(config.payment.delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
quiz:
  confidence_max: 20
premium:
  overall_score: normalized
payment:
  success_rate: 1.0
  processing_delay: 250ms
store:
  path: /tmp/career-guide-store.json
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.quiz.confidence_max, 20);
        assert_eq!(config.premium.overall_score, OverallScoreMode::Normalized);
        assert_eq!(config.payment.success_rate, 1.0);
        assert_eq!(config.payment.delay(), Duration::from_millis(250));
        assert_eq!(
            config.store.path,
            Some(PathBuf::from("/tmp/career-guide-store.json"))
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let yaml = "payment:\n  success_rate: 0.5\n";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.payment.success_rate, 0.5);
        assert_eq!(config.payment.processing_delay, "3s");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "quiz:\n  confidence: 15\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_invalid_delay_falls_back() {
        let config = PaymentConfig {
            success_rate: 0.8,
            processing_delay: "soon".to_string(),
        };
        assert_eq!(config.delay(), Duration::from_secs(3));
    }
}
