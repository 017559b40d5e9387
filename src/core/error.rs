// Configuration errors

/// Rejected configuration values, raised at construction time
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("Activation threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f32),
}

/// Require a finite value strictly above zero
pub fn require_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(value)
}

/// Require a finite value at or above zero
pub fn require_non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("x", 0.5), Ok(0.5));
        assert_eq!(
            require_positive("x", 0.0),
            Err(ConfigError::NotPositive {
                field: "x",
                value: 0.0
            })
        );
        assert_eq!(
            require_positive("x", f32::NAN),
            Err(ConfigError::NonFinite { field: "x" })
        );
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("x", 0.0), Ok(0.0));
        assert!(matches!(
            require_non_negative("x", -0.1),
            Err(ConfigError::Negative { field: "x", .. })
        ));
        assert!(require_non_negative("x", f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NotPositive {
            field: "cooldown_seconds",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "cooldown_seconds must be greater than zero, got -1"
        );
    }
}
