//! The config-and-prompt interpreter.

use prompt_config_core::{Domain, DomainSchema, PartialConfig, validate_partial};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce::coerce_value;
use crate::scan::scan_segments;

/// Result of interpreting one raw command string.
///
/// `config` holds the validated configuration assembled from the accepted
/// segments; `prompt` is the remaining free-form instruction text with its
/// internal commas preserved verbatim and surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Validated configuration; rejected keys are absent, never defaulted.
    pub config: PartialConfig,
    /// Remaining instruction text after the last accepted segment.
    pub prompt: String,
}

/// Interpreter for one domain's command text.
///
/// Holds the domain schema so repeated parses share one vocabulary. For
/// one-shot use, [`parse_config_and_prompt`] constructs the schema inline.
///
/// # Examples
///
/// ```
/// use prompt_config_core::DomainSchema;
/// use prompt_config_parser::CommandInterpreter;
///
/// let interpreter = CommandInterpreter::new(DomainSchema::image());
/// let parsed = interpreter.parse("width:512, A beautiful sunset");
/// assert_eq!(parsed.config.number("width"), Some(512.0));
/// assert_eq!(parsed.prompt, "A beautiful sunset");
/// ```
pub struct CommandInterpreter {
    schema: DomainSchema,
}

impl CommandInterpreter {
    /// Creates an interpreter over the given schema.
    pub fn new(schema: DomainSchema) -> Self {
        Self { schema }
    }

    /// The schema this interpreter parses against.
    pub fn schema(&self) -> &DomainSchema {
        &self.schema
    }

    /// Splits raw command text into a validated configuration and the
    /// remaining prompt.
    ///
    /// The input is segmented on every comma. Each segment is checked, in
    /// order, for a `key:value` configuration pair; accepted values are
    /// coerced per the key's declared kind (unparseable numbers drop the key
    /// alone), and the assembled draft runs once through schema validation.
    /// A failed validation discards the entire draft, never part of it. The
    /// prompt is everything after the last accepted segment, rejoined on
    /// commas and trimmed.
    ///
    /// Total over all inputs: malformed text degrades to a smaller config
    /// or a longer prompt, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_config_core::DomainSchema;
    /// use prompt_config_parser::CommandInterpreter;
    ///
    /// let interpreter = CommandInterpreter::new(DomainSchema::chat());
    ///
    /// let parsed = interpreter.parse("temperature:0.7, Tell me a story");
    /// assert_eq!(parsed.config.number("temperature"), Some(0.7));
    /// assert_eq!(parsed.prompt, "Tell me a story");
    ///
    /// let parsed = interpreter.parse("no config here");
    /// assert!(parsed.config.is_empty());
    /// assert_eq!(parsed.prompt, "no config here");
    /// ```
    pub fn parse(&self, raw: &str) -> ParsedCommand {
        let segments: Vec<&str> = raw.split(',').collect();
        let scan = scan_segments(&self.schema, &segments);

        let mut draft = PartialConfig::new();
        for (key, raw_value) in &scan.pairs {
            // The scan only emits recognized keys.
            let Some(spec) = self.schema.find_key(key) else {
                continue;
            };
            match coerce_value(spec, raw_value) {
                Some(value) => draft.insert(key.clone(), value),
                None => {
                    debug!(key = %key, value = %raw_value, "dropped unparseable numeric value");
                }
            }
        }

        let errors = validate_partial(&self.schema, &draft);
        let config = if errors.is_empty() {
            draft
        } else {
            debug!(error = %errors[0], "discarded candidate configuration");
            PartialConfig::new()
        };

        let prompt = match scan.last_valid_index {
            Some(last) => segments[last + 1..].join(",").trim().to_string(),
            None => raw.trim().to_string(),
        };

        ParsedCommand { config, prompt }
    }
}

/// Splits raw command text for the given domain.
///
/// One-shot form of [`CommandInterpreter::parse`].
///
/// # Examples
///
/// ```
/// use prompt_config_core::Domain;
/// use prompt_config_parser::parse_config_and_prompt;
///
/// let parsed = parse_config_and_prompt(Domain::Image, "width:512, A sunset");
/// assert_eq!(parsed.config.number("width"), Some(512.0));
/// assert_eq!(parsed.prompt, "A sunset");
/// ```
pub fn parse_config_and_prompt(domain: Domain, raw: &str) -> ParsedCommand {
    CommandInterpreter::new(DomainSchema::for_domain(domain)).parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_chat(raw: &str) -> ParsedCommand {
        parse_config_and_prompt(Domain::Chat, raw)
    }

    fn parse_image(raw: &str) -> ParsedCommand {
        parse_config_and_prompt(Domain::Image, raw)
    }

    // -----------------------------------------------------------------------
    // Chat domain
    // -----------------------------------------------------------------------

    #[test]
    fn test_empty_input() {
        let parsed = parse_chat("");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "");
    }

    #[test]
    fn test_prompt_only() {
        let parsed = parse_chat("Tell me a story about a cat");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "Tell me a story about a cat");
    }

    #[test]
    fn test_single_config_parameter() {
        let parsed = parse_chat("temperature:0.7, Tell me a story");
        assert_eq!(parsed.config.number("temperature"), Some(0.7));
        assert_eq!(parsed.config.len(), 1);
        assert_eq!(parsed.prompt, "Tell me a story");
    }

    #[test]
    fn test_multiple_config_parameters() {
        let parsed = parse_chat(
            "temperature:0.7, model:llama-3.3-70b, max_completion_tokens:2000, Tell me a story",
        );
        assert_eq!(parsed.config.number("temperature"), Some(0.7));
        assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
        assert_eq!(parsed.config.number("max_completion_tokens"), Some(2000.0));
        assert_eq!(parsed.prompt, "Tell me a story");
    }

    #[test]
    fn test_prompt_containing_commas_is_preserved_verbatim() {
        let parsed = parse_chat("temperature:0.7, Write a list of fruits: apple, banana, orange");
        assert_eq!(parsed.config.number("temperature"), Some(0.7));
        assert_eq!(parsed.prompt, "Write a list of fruits: apple, banana, orange");
    }

    #[test]
    fn test_all_numeric_parameters() {
        let parsed = parse_chat(
            "temperature:0.7, top_p:0.9, frequency_penalty:1.5, presence_penalty:-0.5, \
             max_completion_tokens:1000, Hello",
        );
        assert_eq!(parsed.config.number("temperature"), Some(0.7));
        assert_eq!(parsed.config.number("top_p"), Some(0.9));
        assert_eq!(parsed.config.number("frequency_penalty"), Some(1.5));
        assert_eq!(parsed.config.number("presence_penalty"), Some(-0.5));
        assert_eq!(parsed.config.number("max_completion_tokens"), Some(1000.0));
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_boolean_and_string_parameters() {
        let parsed = parse_chat(
            "character_slug:assistant, include_venice_system_prompt:true, model:llama-3.3-70b, \
             Hello",
        );
        assert_eq!(parsed.config.text("character_slug"), Some("assistant"));
        assert_eq!(
            parsed.config.boolean("include_venice_system_prompt"),
            Some(true)
        );
        assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_boolean_values_are_case_insensitive() {
        let parsed = parse_chat("include_venice_system_prompt:TRUE, Hello");
        assert_eq!(
            parsed.config.boolean("include_venice_system_prompt"),
            Some(true)
        );
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_unknown_key_ignored_while_valid_key_kept() {
        let parsed = parse_chat("invalid_key:value, temperature:0.7, Hello");
        assert_eq!(parsed.config.number("temperature"), Some(0.7));
        assert_eq!(parsed.config.len(), 1);
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_malformed_input_without_comma_separator() {
        let parsed = parse_chat("model:test Hello");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "model:test Hello");
    }

    #[test]
    fn test_invalid_numeric_value_dropped_while_siblings_kept() {
        let parsed = parse_chat("temperature:invalid, model:llama-3.3-70b, Hello");
        assert!(!parsed.config.contains_key("temperature"));
        assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_invalid_numeric_value_still_advances_prompt_boundary() {
        // The segment shape matched, so the boundary moves even though the
        // value is later dropped at coercion.
        let parsed = parse_chat("temperature:invalid, Hello: there my friend");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "Hello: there my friend");
    }

    #[test]
    fn test_invalid_numeric_dropped_but_later_pairs_survive() {
        let parsed =
            parse_chat("temperature:invalid, model:llama-3.3-70b, top_p:0.9, Hello, there: my friend");
        assert_eq!(parsed.config.number("top_p"), Some(0.9));
        assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
        assert_eq!(parsed.config.len(), 2);
        assert_eq!(parsed.prompt, "Hello, there: my friend");
    }

    #[test]
    fn test_out_of_range_values_discard_entire_config() {
        let parsed = parse_chat("temperature:3.0, top_p:1.5, frequency_penalty:3, Hello there");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "Hello there");
    }

    #[test]
    fn test_single_range_violation_discards_valid_siblings_too() {
        let parsed = parse_chat("temperature:3.0, model:llama-3.3-70b, Hello");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_multi_word_prompt_parameter() {
        let parsed =
            parse_chat("prompt:tell me about cats and dogs, model:llama-3.3-70b, Tell me a story");
        assert_eq!(
            parsed.config.text("prompt"),
            Some("tell me about cats and dogs")
        );
        assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
        assert_eq!(parsed.prompt, "Tell me a story");
    }

    #[test]
    fn test_prompt_parameter_preserves_internal_colons() {
        let parsed = parse_chat(
            "prompt:write a schedule: 9am: wake up, 10am: work, model:llama-3.3-70b, Hello",
        );
        assert_eq!(
            parsed.config.text("prompt"),
            Some("write a schedule: 9am: wake up")
        );
        assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_config_value_with_colons_at_end_of_input() {
        let parsed = parse_chat("model:llama-3.3-70b, prompt:Write time: 3:00 PM");
        assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
        assert_eq!(parsed.config.text("prompt"), Some("Write time: 3:00 PM"));
        assert_eq!(parsed.prompt, "");
    }

    #[test]
    fn test_duplicate_key_last_occurrence_wins() {
        let parsed = parse_chat("temperature:0.5, temperature:0.9, Hello");
        assert_eq!(parsed.config.number("temperature"), Some(0.9));
        assert_eq!(parsed.prompt, "Hello");
    }

    #[test]
    fn test_valid_pair_after_prose_still_advances_boundary() {
        // The scan checks every segment independently; a matching pair
        // after free text is absorbed as configuration and the prose
        // before it disappears from the prompt.
        let parsed = parse_chat("Hello there, temperature:0.7");
        assert_eq!(parsed.config.number("temperature"), Some(0.7));
        assert_eq!(parsed.prompt, "");
    }

    #[test]
    fn test_reparsing_returned_prompt_is_stable() {
        let first = parse_chat("temperature:0.7, model:llama-3.3-70b, Tell me a story, please");
        let second = parse_chat(&first.prompt);
        assert!(second.config.is_empty());
        assert_eq!(second.prompt, first.prompt);
    }

    #[test]
    fn test_punctuation_only_inputs_never_fail() {
        for raw in [",", ",,,", ":", ":::", ", : ,", "  ", "\t"] {
            let parsed = parse_chat(raw);
            assert!(parsed.config.is_empty(), "config not empty for {raw:?}");
            assert_eq!(parsed.prompt, raw.trim());
        }
    }

    // -----------------------------------------------------------------------
    // Image domain
    // -----------------------------------------------------------------------

    #[test]
    fn test_image_single_config_parameter() {
        let parsed = parse_image("width:512, A beautiful sunset");
        assert_eq!(parsed.config.number("width"), Some(512.0));
        assert_eq!(parsed.prompt, "A beautiful sunset");
    }

    #[test]
    fn test_image_multiple_config_parameters() {
        let parsed = parse_image("width:512, height:512, steps:50, cfg_scale:7.5, A beautiful sunset");
        assert_eq!(parsed.config.number("width"), Some(512.0));
        assert_eq!(parsed.config.number("height"), Some(512.0));
        assert_eq!(parsed.config.number("steps"), Some(50.0));
        assert_eq!(parsed.config.number("cfg_scale"), Some(7.5));
        assert_eq!(parsed.prompt, "A beautiful sunset");
    }

    #[test]
    fn test_image_boolean_parameters() {
        let parsed = parse_image("safe_mode:TRUE, hide_watermark:FALSE, A sunset");
        assert_eq!(parsed.config.boolean("safe_mode"), Some(true));
        assert_eq!(parsed.config.boolean("hide_watermark"), Some(false));
        assert_eq!(parsed.prompt, "A sunset");
    }

    #[test]
    fn test_image_prompt_with_commas_preserved() {
        let parsed = parse_image("width:512, Draw me a red car, blue sky, and green grass");
        assert_eq!(parsed.config.number("width"), Some(512.0));
        assert_eq!(parsed.prompt, "Draw me a red car, blue sky, and green grass");
    }

    #[test]
    fn test_image_style_preset() {
        let parsed = parse_image("style_preset:Anime, A beautiful sunset");
        assert_eq!(parsed.config.text("style_preset"), Some("Anime"));
        assert_eq!(parsed.prompt, "A beautiful sunset");
    }

    #[test]
    fn test_image_invalid_style_preset_discards_config() {
        let parsed = parse_image("style_preset:Vaporwave, width:512, A sunset");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "A sunset");
    }

    #[test]
    fn test_image_negative_prompt() {
        let parsed = parse_image("negative_prompt:blur, A beautiful sunset");
        assert_eq!(parsed.config.text("negative_prompt"), Some("blur"));
        assert_eq!(parsed.prompt, "A beautiful sunset");
    }

    #[test]
    fn test_image_negative_prompt_allows_spaces_and_colons() {
        let parsed = parse_image("negative_prompt:text: watermarks or logos, seed:42, A city");
        assert_eq!(
            parsed.config.text("negative_prompt"),
            Some("text: watermarks or logos")
        );
        assert_eq!(parsed.config.number("seed"), Some(42.0));
        assert_eq!(parsed.prompt, "A city");
    }

    #[test]
    fn test_image_seed_parameter() {
        let parsed = parse_image("seed:123456, A forest");
        assert_eq!(parsed.config.number("seed"), Some(123456.0));
        assert_eq!(parsed.prompt, "A forest");
    }

    #[test]
    fn test_image_malformed_input_without_comma_separator() {
        let parsed = parse_image("width:512 A beautiful sunset");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "width:512 A beautiful sunset");
    }

    #[test]
    fn test_image_invalid_numeric_dropped_while_siblings_kept() {
        let parsed = parse_image("width:invalid, model:stable-diffusion-xl, height:512, A sunset");
        assert!(!parsed.config.contains_key("width"));
        assert_eq!(parsed.config.text("model"), Some("stable-diffusion-xl"));
        assert_eq!(parsed.config.number("height"), Some(512.0));
        assert_eq!(parsed.prompt, "A sunset");
    }

    #[test]
    fn test_chat_keys_are_not_recognized_in_image_domain() {
        let parsed = parse_image("temperature:0.7, A sunset");
        assert!(parsed.config.is_empty());
        assert_eq!(parsed.prompt, "temperature:0.7, A sunset");
    }

    #[test]
    fn test_parsed_command_serializes_config_and_prompt() {
        let parsed = parse_image("width:512, safe_mode:true, A sunset");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "config": {"safe_mode": true, "width": 512},
                "prompt": "A sunset",
            })
        );
    }
}
