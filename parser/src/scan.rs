//! Segment scan: extracting candidate key/value pairs from comma-delimited
//! command text.

use prompt_config_core::DomainSchema;
use tracing::debug;

/// Outcome of scanning the comma-delimited segments of one input.
pub(crate) struct ScanOutcome {
    /// Accepted (key, raw value) pairs in input order.
    pub pairs: Vec<(String, String)>,
    /// Index of the last segment accepted as a configuration pair.
    pub last_valid_index: Option<usize>,
}

/// Scans every segment, in order, for a candidate configuration pair.
///
/// The scan never short-circuits: segments that fail the shape or membership
/// checks are skipped and scanning continues. The prompt boundary is the
/// index of the LAST accepted segment, so a syntactically valid pair
/// appearing after free-text prose is still absorbed as configuration.
pub(crate) fn scan_segments(schema: &DomainSchema, segments: &[&str]) -> ScanOutcome {
    let mut pairs = Vec::new();
    let mut last_valid_index = None;

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        let trimmed = segment.trim();
        let mut colon_parts = trimmed.split(':');
        let potential_key = colon_parts.next().unwrap_or_default().trim();
        let value_parts: Vec<&str> = colon_parts.collect();

        // Multi-word keys keep the whole remainder, internal colons intact.
        if let Some(spec) = schema.find_key(potential_key) {
            if spec.multi_word && !value_parts.is_empty() {
                let value = value_parts.join(":").trim().to_string();
                if !value.is_empty() {
                    debug!(key = potential_key, index, "accepted multi-word pair");
                    pairs.push((potential_key.to_string(), value));
                    last_valid_index = Some(index);
                    continue;
                }
            }
        }

        // Everything else takes only the first colon-delimited token; a
        // space anywhere in the key or that token disqualifies the segment.
        let first_value_part = value_parts
            .first()
            .map(|part| part.trim())
            .unwrap_or_default();
        if !potential_key.is_empty()
            && !potential_key.contains(' ')
            && !first_value_part.is_empty()
            && !first_value_part.contains(' ')
            && schema.is_recognized_key(potential_key)
        {
            debug!(key = potential_key, index, "accepted pair");
            pairs.push((potential_key.to_string(), first_value_part.to_string()));
            last_valid_index = Some(index);
        }
    }

    ScanOutcome {
        pairs,
        last_valid_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(raw: &str) -> ScanOutcome {
        let schema = DomainSchema::chat();
        let segments: Vec<&str> = raw.split(',').collect();
        scan_segments(&schema, &segments)
    }

    #[test]
    fn test_scan_accepts_recognized_pair() {
        let outcome = scan("temperature:0.7, Tell me a story");
        assert_eq!(
            outcome.pairs,
            vec![("temperature".to_string(), "0.7".to_string())]
        );
        assert_eq!(outcome.last_valid_index, Some(0));
    }

    #[test]
    fn test_scan_skips_unrecognized_key_without_stopping() {
        let outcome = scan("invalid_key:value, temperature:0.7, Hello");
        assert_eq!(
            outcome.pairs,
            vec![("temperature".to_string(), "0.7".to_string())]
        );
        assert_eq!(outcome.last_valid_index, Some(1));
    }

    #[test]
    fn test_scan_rejects_value_containing_space() {
        let outcome = scan("model:test Hello");
        assert!(outcome.pairs.is_empty());
        assert_eq!(outcome.last_valid_index, None);
    }

    #[test]
    fn test_scan_boundary_is_last_match_even_after_prose() {
        // The match after free text still advances the boundary.
        let outcome = scan("Hello there, temperature:0.7");
        assert_eq!(
            outcome.pairs,
            vec![("temperature".to_string(), "0.7".to_string())]
        );
        assert_eq!(outcome.last_valid_index, Some(1));
    }

    #[test]
    fn test_scan_multi_word_value_keeps_internal_colons() {
        let outcome = scan("prompt:write a schedule: 9am: wake up, Hello");
        assert_eq!(
            outcome.pairs,
            vec![(
                "prompt".to_string(),
                "write a schedule: 9am: wake up".to_string()
            )]
        );
        assert_eq!(outcome.last_valid_index, Some(0));
    }

    #[test]
    fn test_scan_multi_word_key_with_empty_value_is_not_config() {
        let outcome = scan("prompt: , Hello");
        assert!(outcome.pairs.is_empty());
        assert_eq!(outcome.last_valid_index, None);
    }

    #[test]
    fn test_scan_ignores_empty_and_colonless_segments() {
        let outcome = scan(",, just words ,temperature:0.7");
        assert_eq!(
            outcome.pairs,
            vec![("temperature".to_string(), "0.7".to_string())]
        );
        assert_eq!(outcome.last_valid_index, Some(3));
    }
}
