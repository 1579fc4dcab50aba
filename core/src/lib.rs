//! Core schema types and validation for slash-command configuration.
//!
//! This crate declares, for each command domain (chat, image), the closed
//! vocabulary of recognized configuration keys and the validation contract
//! applied to parsed configurations:
//!
//! - [`DomainSchema`] — the ordered key vocabulary for one domain, with
//!   [`chat`](DomainSchema::chat) and [`image`](DomainSchema::image)
//!   catalogs built in.
//! - [`KeySpec`] — one recognized key: value kind, optional inclusive
//!   numeric range, and the multi-word marker.
//! - [`PartialConfig`] — a typed configuration holding any subset of a
//!   domain's keys.
//! - [`validate_partial`] — the schema check run over a fully-assembled
//!   candidate configuration.
//! - [`DomainSchema::defaults`] and [`merge_config`] — the strict default
//!   configuration a generation client starts from and the overlay merge.
//!
//! The parsing engine that produces [`PartialConfig`] values from raw
//! command text lives in the companion `prompt-config-parser` crate.
//!
//! # Example
//!
//! ```
//! use prompt_config_core::*;
//!
//! let schema = DomainSchema::for_domain(Domain::Chat);
//! assert!(schema.is_recognized_key("temperature"));
//!
//! let mut config = PartialConfig::new();
//! config.insert("temperature", 0.7.into());
//! config.insert("model", "llama-3.3-70b".into());
//! assert!(validate_partial(&schema, &config).is_empty());
//!
//! let request = merge_config(&schema.defaults(), &config);
//! assert_eq!(request.number("temperature"), Some(0.7));
//! ```

mod catalog;
mod merge;
mod types;
mod validate;

pub use catalog::STYLE_PRESETS;
pub use merge::merge_config;
pub use types::*;
pub use validate::{ValidationError, validate_partial};
