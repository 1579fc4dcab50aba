//! Per-key coercion of raw text values into typed configuration values.

use prompt_config_core::{ConfigValue, KeySpec, ValueKind};

/// Coerces a raw text value by its key's declared kind.
///
/// Returns `None` only for numeric text that fails to parse or parses to
/// NaN; the key is then dropped without affecting its siblings. Boolean
/// coercion always succeeds: anything other than a case-insensitive "true"
/// yields `false`. Text and choice values are kept verbatim, with choice
/// membership enforced later by schema validation.
pub(crate) fn coerce_value(spec: &KeySpec, raw: &str) -> Option<ConfigValue> {
    match &spec.kind {
        ValueKind::Number => {
            let number: f64 = raw.parse().ok()?;
            if number.is_nan() {
                return None;
            }
            Some(ConfigValue::Number(number))
        }
        ValueKind::Bool => Some(ConfigValue::Bool(raw.eq_ignore_ascii_case("true"))),
        ValueKind::Text | ValueKind::Choice(_) => Some(ConfigValue::Text(raw.to_string())),
    }
}
