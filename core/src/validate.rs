//! Partial-configuration validation.
//!
//! [`validate_partial`] is the late safety net that runs after per-key
//! coercion: it checks a fully-assembled candidate config against its
//! domain's schema, enforcing value kinds, inclusive numeric ranges, and
//! choice membership. Any subset of keys is accepted; all keys are optional.
//!
//! Callers that need all-or-nothing semantics (the parser does) treat a
//! non-empty error list as "discard the entire candidate".
//!
//! # Examples
//!
//! ```
//! use prompt_config_core::{DomainSchema, PartialConfig, validate_partial};
//!
//! let schema = DomainSchema::chat();
//!
//! let mut config = PartialConfig::new();
//! config.insert("temperature", 0.7.into());
//! assert!(validate_partial(&schema, &config).is_empty());
//!
//! // Out of range: temperature must be within [0, 2]
//! config.insert("temperature", 3.0.into());
//! assert!(!validate_partial(&schema, &config).is_empty());
//! ```

use thiserror::Error;

use crate::{ConfigValue, DomainSchema, PartialConfig, ValueKind};

/// Configuration validation errors.
///
/// Each variant describes a specific constraint violation found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Key is not part of the domain's vocabulary.
    #[error("unrecognized key: {0}")]
    UnrecognizedKey(String),
    /// Value has a different kind than the key declares.
    #[error("wrong value kind for '{key}': expected {expected}")]
    WrongKind {
        /// Offending key.
        key: String,
        /// Label of the declared kind.
        expected: &'static str,
    },
    /// Numeric value falls outside the key's inclusive range.
    #[error("value {value} for '{key}' is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        /// Offending key.
        key: String,
        /// Value that was rejected.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Value is not a member of the key's closed choice set.
    #[error("invalid choice for '{key}': {value}")]
    InvalidChoice {
        /// Offending key.
        key: String,
        /// Value that was rejected.
        value: String,
    },
}

/// Validates a candidate configuration against a domain schema.
///
/// Accepts any subset of recognized keys. Returns the constraint violations
/// found; an empty vector means the candidate is valid.
///
/// # Examples
///
/// ```
/// use prompt_config_core::{DomainSchema, PartialConfig, ValidationError, validate_partial};
///
/// let schema = DomainSchema::image();
///
/// let mut config = PartialConfig::new();
/// config.insert("style_preset", "Anime".into());
/// assert!(validate_partial(&schema, &config).is_empty());
///
/// config.insert("style_preset", "Vaporwave".into());
/// let errors = validate_partial(&schema, &config);
/// assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidChoice { .. })));
/// ```
pub fn validate_partial(schema: &DomainSchema, candidate: &PartialConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (key, value) in candidate.iter() {
        let Some(spec) = schema.find_key(key) else {
            errors.push(ValidationError::UnrecognizedKey(key.clone()));
            return errors;
        };

        match (&spec.kind, value) {
            (ValueKind::Number, ConfigValue::Number(n)) => {
                if let (Some(min), Some(max)) = (spec.min, spec.max) {
                    if *n < min || *n > max {
                        errors.push(ValidationError::OutOfRange {
                            key: key.clone(),
                            value: *n,
                            min,
                            max,
                        });
                        return errors;
                    }
                }
            }
            (ValueKind::Bool, ConfigValue::Bool(_)) => {}
            (ValueKind::Text, ConfigValue::Text(_)) => {}
            (ValueKind::Choice(choices), ConfigValue::Text(text)) => {
                if !choices.iter().any(|choice| choice == text) {
                    errors.push(ValidationError::InvalidChoice {
                        key: key.clone(),
                        value: text.clone(),
                    });
                    return errors;
                }
            }
            _ => {
                errors.push(ValidationError::WrongKind {
                    key: key.clone(),
                    expected: spec.kind.label(),
                });
                return errors;
            }
        }
    }

    errors
}
