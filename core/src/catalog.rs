//! The two built-in domain vocabularies and their strict defaults.
//!
//! Both domains share the generic types in [`crate::types`]; everything
//! domain-specific lives here as plain data.

use crate::{ConfigValue, Domain, DomainSchema, KeySpec, RequestConfig};

/// Closed set of accepted `style_preset` literals for the image domain.
///
/// Mirrors the preset list exposed by the image generation service.
pub const STYLE_PRESETS: &[&str] = &[
    "3D Model",
    "Abstract",
    "Advertising",
    "Alien",
    "Analog Film",
    "Anime",
    "Architectural",
    "Cinematic",
    "Collage",
    "Comic Book",
    "Craft Clay",
    "Cubist",
    "Digital Art",
    "Disco",
    "Dreamscape",
    "Dystopian",
    "Enhance",
    "Fairy Tale",
    "Fantasy Art",
    "Fighting Game",
    "Film Noir",
    "Flat Papercut",
    "Food Photography",
    "Gothic",
    "GTA",
    "Graffiti",
    "Grunge",
    "HDR",
    "Horror",
    "Hyperrealism",
    "Impressionist",
    "Isometric Style",
    "Kirigami",
    "Legend of Zelda",
    "Line Art",
    "Long Exposure",
    "Lowpoly",
    "Minecraft",
    "Minimalist",
    "Monochrome",
    "Nautical",
    "Neon Noir",
    "Neon Punk",
    "Origami",
    "Paper Mache",
    "Paper Quilling",
    "Papercut Collage",
    "Papercut Shadow Box",
    "Photographic",
    "Pixel Art",
    "Pokemon",
    "Pointillism",
    "Pop Art",
    "Psychedelic",
    "Real Estate",
    "Renaissance",
    "Retro Arcade",
    "Retro Game",
    "RPG Fantasy Game",
    "Silhouette",
    "Space",
    "Stacked Papercut",
    "Stained Glass",
    "Steampunk",
    "Strategy Game",
    "Street Fighter",
    "Super Mario",
    "Surrealist",
    "Techwear Fashion",
    "Texture",
    "Thick Layered Papercut",
    "Tilt-Shift",
    "Tribal",
    "Typography",
    "Watercolor",
    "Zentangle",
];

impl DomainSchema {
    /// Returns the schema for the given domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_config_core::{Domain, DomainSchema};
    ///
    /// let schema = DomainSchema::for_domain(Domain::Image);
    /// assert_eq!(schema.domain, Domain::Image);
    /// ```
    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Chat => Self::chat(),
            Domain::Image => Self::image(),
        }
    }

    /// The chat-domain vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_config_core::DomainSchema;
    ///
    /// let schema = DomainSchema::chat();
    /// assert!(schema.find_key("prompt").unwrap().multi_word);
    /// assert_eq!(schema.find_key("temperature").unwrap().max, Some(2.0));
    /// ```
    pub fn chat() -> Self {
        Self {
            domain: Domain::Chat,
            keys: vec![
                KeySpec::text("model").with_description("Model slug to route the request to"),
                KeySpec::text("prompt")
                    .multi_word()
                    .with_description("System prompt override"),
                KeySpec::number("temperature")
                    .with_range(0.0, 2.0)
                    .with_description("Sampling temperature"),
                KeySpec::number("top_p")
                    .with_range(0.0, 1.0)
                    .with_description("Nucleus sampling cutoff"),
                KeySpec::number("max_completion_tokens")
                    .with_description("Upper bound on generated tokens"),
                KeySpec::number("frequency_penalty").with_range(-2.0, 2.0),
                KeySpec::number("presence_penalty").with_range(-2.0, 2.0),
                KeySpec::text("character_slug")
                    .with_description("Persona character to respond as"),
                KeySpec::boolean("include_venice_system_prompt"),
            ],
        }
    }

    /// The image-domain vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_config_core::DomainSchema;
    ///
    /// let schema = DomainSchema::image();
    /// assert!(schema.find_key("negative_prompt").unwrap().multi_word);
    /// assert!(schema.is_recognized_key("style_preset"));
    /// ```
    pub fn image() -> Self {
        Self {
            domain: Domain::Image,
            keys: vec![
                KeySpec::text("model").with_description("Model slug to route the request to"),
                KeySpec::number("width").with_description("Output width in pixels"),
                KeySpec::number("height").with_description("Output height in pixels"),
                KeySpec::number("steps").with_description("Diffusion step count"),
                KeySpec::number("cfg_scale").with_description("Classifier-free guidance scale"),
                KeySpec::number("seed"),
                KeySpec::choice("style_preset", STYLE_PRESETS),
                KeySpec::text("negative_prompt")
                    .multi_word()
                    .with_description("Features to steer away from"),
                KeySpec::boolean("hide_watermark"),
                KeySpec::boolean("safe_mode"),
            ],
        }
    }

    /// The full strict configuration a generation client starts from.
    ///
    /// Parsed configs are overlaid on top of this via
    /// [`merge_config`](crate::merge_config). The chat defaults pin
    /// `stream` to false, a transport requirement of the delivery channel;
    /// `stream` is not part of the parse vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_config_core::DomainSchema;
    ///
    /// let defaults = DomainSchema::image().defaults();
    /// assert_eq!(defaults.number("width"), Some(1024.0));
    /// assert_eq!(defaults.boolean("safe_mode"), Some(true));
    /// ```
    pub fn defaults(&self) -> RequestConfig {
        let mut defaults = RequestConfig::new();
        match self.domain {
            Domain::Chat => {
                defaults.insert("model", ConfigValue::Text("llama-3.3-70b".to_string()));
                defaults.insert("stream", ConfigValue::Bool(false));
            }
            Domain::Image => {
                defaults.insert("model", ConfigValue::Text("fluently-xl".to_string()));
                defaults.insert("width", ConfigValue::Number(1024.0));
                defaults.insert("height", ConfigValue::Number(1024.0));
                defaults.insert("steps", ConfigValue::Number(30.0));
                defaults.insert("cfg_scale", ConfigValue::Number(7.0));
                defaults.insert("safe_mode", ConfigValue::Bool(true));
                defaults.insert("hide_watermark", ConfigValue::Bool(false));
            }
        }
        defaults
    }
}
