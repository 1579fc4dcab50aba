//! Schema type definitions for slash-command configuration.
//!
//! This module defines the data model shared by both command domains. The
//! types are designed for serialization with [`serde`] and are plain data:
//! the parsing algorithm is parameterized by a [`DomainSchema`] value rather
//! than by per-domain code.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Command domain a schema belongs to.
///
/// The two domains share one parsing algorithm and differ only in their key
/// vocabulary, value-type rules, and multi-word-value exceptions.
///
/// # Examples
///
/// ```
/// use prompt_config_core::Domain;
///
/// let domain: Domain = "image".parse().unwrap();
/// assert_eq!(domain, Domain::Image);
/// assert_eq!(domain.to_string(), "image");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Text-generation requests.
    Chat,
    /// Image-generation requests.
    Image,
}

impl Domain {
    /// Returns the lowercase domain name ("chat" or "image").
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Chat => "chat",
            Domain::Image => "image",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown domain: {0}")]
pub struct UnknownDomain(pub String);

impl FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Domain::Chat),
            "image" => Ok(Domain::Image),
            other => Err(UnknownDomain(other.to_string())),
        }
    }
}

/// Value type a configuration key accepts.
///
/// # Examples
///
/// ```
/// use prompt_config_core::ValueKind;
///
/// let choices = ValueKind::Choice(vec!["Anime".into(), "Cinematic".into()]);
/// assert!(matches!(choices, ValueKind::Choice(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Numeric value, optionally range-constrained by the owning [`KeySpec`].
    Number,
    /// Boolean value. Coercion compares the lowercased text to "true".
    Bool,
    /// Free-form string value.
    Text,
    /// String value restricted to a closed set of literals.
    Choice(Vec<String>),
}

impl ValueKind {
    /// Returns a short label for error messages ("number", "boolean", "text").
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Bool => "boolean",
            ValueKind::Text | ValueKind::Choice(_) => "text",
        }
    }
}

/// Declaration of one recognized configuration key.
///
/// Use the constructor methods [`number`](KeySpec::number),
/// [`boolean`](KeySpec::boolean), [`text`](KeySpec::text), and
/// [`choice`](KeySpec::choice) to create specs, then chain builder methods
/// like [`with_range`](KeySpec::with_range).
///
/// # Examples
///
/// ```
/// use prompt_config_core::KeySpec;
///
/// let temperature = KeySpec::number("temperature")
///     .with_range(0.0, 2.0)
///     .with_description("Sampling temperature");
/// assert_eq!(temperature.name, "temperature");
/// assert_eq!(temperature.min, Some(0.0));
///
/// let prompt = KeySpec::text("prompt").multi_word();
/// assert!(prompt.multi_word);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySpec {
    /// Key name as typed by the user (exact, case-sensitive).
    pub name: String,
    /// Value type this key accepts.
    pub kind: ValueKind,
    /// Inclusive lower bound for numeric keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Whether the value may contain spaces and colons, terminated only by
    /// the next comma.
    pub multi_word: bool,
    /// Short description for schema dumps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl KeySpec {
    fn new(name: &str, kind: ValueKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            min: None,
            max: None,
            multi_word: false,
            description: None,
        }
    }

    /// Creates a numeric key.
    pub fn number(name: &str) -> Self {
        Self::new(name, ValueKind::Number)
    }

    /// Creates a boolean key.
    pub fn boolean(name: &str) -> Self {
        Self::new(name, ValueKind::Bool)
    }

    /// Creates a free-form string key.
    pub fn text(name: &str) -> Self {
        Self::new(name, ValueKind::Text)
    }

    /// Creates a string key restricted to the given literal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_config_core::{KeySpec, ValueKind};
    ///
    /// let spec = KeySpec::choice("style_preset", &["Anime", "Cinematic"]);
    /// assert!(matches!(spec.kind, ValueKind::Choice(ref c) if c.len() == 2));
    /// ```
    pub fn choice(name: &str, choices: &[&str]) -> Self {
        Self::new(
            name,
            ValueKind::Choice(choices.iter().map(|c| c.to_string()).collect()),
        )
    }

    /// Constrains a numeric key to an inclusive range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Marks the value as multi-word (spaces and colons allowed, terminated
    /// by the next comma).
    pub fn multi_word(mut self) -> Self {
        self.multi_word = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// A typed configuration value.
///
/// Serializes as a bare JSON scalar. Fraction-free finite numbers serialize
/// as integers so the wire shape matches what generation clients expect
/// (`512`, not `512.0`).
///
/// # Examples
///
/// ```
/// use prompt_config_core::ConfigValue;
///
/// let width = ConfigValue::Number(512.0);
/// assert_eq!(serde_json::to_string(&width).unwrap(), "512");
///
/// let temperature = ConfigValue::Number(0.7);
/// assert_eq!(serde_json::to_string(&temperature).unwrap(), "0.7");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Text(String),
}

impl ConfigValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(n)
                {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        ConfigValue::Number(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<&str> for ConfigValue {
    fn from(t: &str) -> Self {
        ConfigValue::Text(t.to_string())
    }
}

/// A configuration holding a subset of a domain's recognized keys.
///
/// Keys that were rejected or malformed during parsing are simply absent,
/// never present with a default or null. Inserting an existing key
/// overwrites it, so later duplicates win.
///
/// # Examples
///
/// ```
/// use prompt_config_core::PartialConfig;
///
/// let mut config = PartialConfig::new();
/// config.insert("temperature", 0.7.into());
/// config.insert("model", "llama-3.3-70b".into());
///
/// assert_eq!(config.number("temperature"), Some(0.7));
/// assert_eq!(config.text("model"), Some("llama-3.3-70b"));
/// assert_eq!(config.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialConfig(BTreeMap<String, ConfigValue>);

/// The full strict configuration handed to a generation client.
///
/// Shares the shape of [`PartialConfig`]; produced by
/// [`DomainSchema::defaults`](crate::DomainSchema::defaults) and
/// [`merge_config`](crate::merge_config).
pub type RequestConfig = PartialConfig;

impl PartialConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, overwriting any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.0.insert(key.into(), value);
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Returns the numeric value for a key, if present and a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ConfigValue::as_number)
    }

    /// Returns the boolean value for a key, if present and a boolean.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    /// Returns the string value for a key, if present and text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_text)
    }

    /// Checks whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns true when no keys are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }
}

/// The ordered, closed key vocabulary for one command domain.
///
/// # Examples
///
/// ```
/// use prompt_config_core::{Domain, DomainSchema};
///
/// let schema = DomainSchema::for_domain(Domain::Chat);
/// assert!(schema.is_recognized_key("temperature"));
/// assert!(!schema.is_recognized_key("Temperature")); // case-sensitive
/// assert!(!schema.is_recognized_key("width")); // image-only key
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSchema {
    /// Domain this vocabulary belongs to.
    pub domain: Domain,
    /// Recognized keys, in declaration order.
    pub keys: Vec<KeySpec>,
}

impl DomainSchema {
    /// Finds a key spec by exact, case-sensitive name.
    pub fn find_key(&self, name: &str) -> Option<&KeySpec> {
        self.keys.iter().find(|key| key.name == name)
    }

    /// Checks exact, case-sensitive membership in the vocabulary.
    pub fn is_recognized_key(&self, name: &str) -> bool {
        self.find_key(name).is_some()
    }

    /// Returns all key names in declaration order.
    pub fn key_names(&self) -> Vec<&str> {
        self.keys.iter().map(|key| key.name.as_str()).collect()
    }
}
