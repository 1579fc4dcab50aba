//! Config-and-prompt interpretation for slash-command text.
//!
//! This crate turns the free-form string a user types after a slash-command
//! into a schema-validated configuration and the remaining natural-language
//! prompt. The input is segmented on commas; leading segments of the form
//! `key:value` become configuration, everything after the last accepted
//! segment is returned as the prompt with its commas intact.
//!
//! Parsing is best-effort and total: unrecognized keys, malformed values,
//! and mis-shaped segments degrade the result locally (a smaller config, a
//! longer prompt) and never raise an error. Users are not expected to read
//! diagnostics for mistyped configuration syntax; their prompt still
//! executes.
//!
//! # Main entry points
//!
//! - [`parse_config_and_prompt`] — one-shot parse for a [`Domain`].
//! - [`CommandInterpreter`] — holds a schema for repeated parses.
//!
//! # Example
//!
//! ```
//! use prompt_config_core::Domain;
//! use prompt_config_parser::parse_config_and_prompt;
//!
//! let parsed = parse_config_and_prompt(
//!     Domain::Chat,
//!     "temperature:0.7, model:llama-3.3-70b, Tell me a story",
//! );
//! assert_eq!(parsed.config.number("temperature"), Some(0.7));
//! assert_eq!(parsed.config.text("model"), Some("llama-3.3-70b"));
//! assert_eq!(parsed.prompt, "Tell me a story");
//! ```

pub use prompt_config_core::Domain;

mod coerce;
mod interpret;
mod scan;

pub use interpret::{CommandInterpreter, ParsedCommand, parse_config_and_prompt};
