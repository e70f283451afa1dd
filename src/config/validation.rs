use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.quiz.confidence_max == 0 {
        errors.push("quiz.confidence_max: must be greater than zero".to_string());
    }

    let rate = config.payment.success_rate;
    if !(0.0..=1.0).contains(&rate) {
        errors.push(format!(
            "payment.success_rate: must be between 0 and 1, got {}",
            rate
        ));
    }

    if let Err(e) = humantime::parse_duration(&config.payment.processing_delay) {
        errors.push(format!(
            "payment.processing_delay: invalid '{}' - {}",
            config.payment.processing_delay, e
        ));
    }

    if let Some(ref path) = config.store.path {
        if path.as_os_str().is_empty() {
            errors.push("store.path: must not be empty".to_string());
        } else if path.is_dir() {
            errors.push(format!(
                "store.path: '{}' is a directory, expected a file",
                path.display()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
