//! Serializable figure configuration.
//!
//! A [`Configuration`] is the complete description of one figure. It is
//! plain data: it can be built in code, parsed from JSON, and passed by
//! value into [`compose`](crate::compose). Nothing in it is validated on
//! construction; out-of-range counts and unknown names are normalized when
//! the figure is composed.
//!
//! # Example
//!
//! ```
//! use crochet_renderer::{BodyColor, Configuration, ExportFormat, MouthStyle};
//!
//! let config = Configuration::new()
//!     .with_body_color(BodyColor::Vanilla)
//!     .with_layers(4)
//!     .with_mouth(MouthStyle::Shark)
//!     .with_arms(true);
//!
//! let json = config.to_json().unwrap();
//! let restored = Configuration::from_json(&json).unwrap();
//! assert_eq!(restored, config);
//!
//! assert_eq!(
//!     config.file_name(ExportFormat::Png),
//!     "crochet_poop_vanilla_4layers_2blackeyes_shark_arms.png"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{BodyColor, EyeColor};
use crate::feature::clamp_eyes;
use crate::geometry::clamp_layers;

// ============================================================================
// Mouth Style
// ============================================================================

/// Mouth shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MouthStyle {
    #[default]
    Smile,
    Frown,
    Tongue,
    Shark,
    /// No mouth at all.
    None,
}

impl MouthStyle {
    /// Every style, in display order.
    pub const ALL: [MouthStyle; 5] = [
        Self::Smile,
        Self::Frown,
        Self::Tongue,
        Self::Shark,
        Self::None,
    ];

    /// Looks up a style by name, falling back to [`MouthStyle::Smile`].
    pub fn from_name(name: &str) -> Self {
        let key = name.trim().to_ascii_lowercase();
        match Self::ALL.into_iter().find(|s| s.name() == key) {
            Some(style) => style,
            None => {
                log::debug!("unknown mouth style {:?}, using {}", name, Self::default().name());
                Self::default()
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Smile => "smile",
            Self::Frown => "frown",
            Self::Tongue => "tongue",
            Self::Shark => "shark",
            Self::None => "none",
        }
    }
}

impl From<String> for MouthStyle {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<MouthStyle> for String {
    fn from(style: MouthStyle) -> Self {
        style.name().to_string()
    }
}

// ============================================================================
// Export Format
// ============================================================================

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Svg,
    Png,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Parses an extension such as `"png"`. Anything else gives SVG.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("png") {
            Self::Png
        } else {
            Self::Svg
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Everything that determines a figure.
///
/// Serializes to camelCase JSON. Every field is optional on input:
///
/// ```json
/// { "bodyColor": "chocolate", "numLayers": 3, "numEyes": 2, "eyeColor": "black",
///   "hasArms": false, "hasLegs": false, "mouthStyle": "smile" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Body palette name.
    #[serde(alias = "bodyColorName")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub body_color: BodyColor,

    /// Requested coil count; clamped to 2..=5 when rendered.
    pub num_layers: i32,

    /// Requested eye count; clamped to 1..=6 when rendered.
    pub num_eyes: i32,

    /// Eye color name.
    #[serde(alias = "eyeColorName")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub eye_color: EyeColor,

    pub has_arms: bool,

    pub has_legs: bool,

    /// Mouth style name.
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    pub mouth_style: MouthStyle,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            body_color: BodyColor::Chocolate,
            num_layers: 3,
            num_eyes: 2,
            eye_color: EyeColor::Black,
            has_arms: false,
            has_legs: false,
            mouth_style: MouthStyle::Smile,
        }
    }
}

impl Configuration {
    /// The default figure: three chocolate coils, two black eyes, a smile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_color(mut self, body_color: BodyColor) -> Self {
        self.body_color = body_color;
        self
    }

    pub fn with_layers(mut self, num_layers: i32) -> Self {
        self.num_layers = num_layers;
        self
    }

    pub fn with_eyes(mut self, num_eyes: i32) -> Self {
        self.num_eyes = num_eyes;
        self
    }

    pub fn with_eye_color(mut self, eye_color: EyeColor) -> Self {
        self.eye_color = eye_color;
        self
    }

    pub fn with_arms(mut self, has_arms: bool) -> Self {
        self.has_arms = has_arms;
        self
    }

    pub fn with_legs(mut self, has_legs: bool) -> Self {
        self.has_legs = has_legs;
        self
    }

    pub fn with_mouth(mut self, mouth_style: MouthStyle) -> Self {
        self.mouth_style = mouth_style;
        self
    }

    /// The coil count actually drawn.
    pub fn layer_count(&self) -> usize {
        clamp_layers(self.num_layers)
    }

    /// The eye count actually drawn.
    pub fn eye_count(&self) -> usize {
        clamp_eyes(self.num_eyes)
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a configuration. Missing fields take their defaults and
    /// unknown names resolve to the default name.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the JSON schema for the configuration format.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Configuration)
    }

    /// A descriptive download name, e.g.
    /// `crochet_poop_chocolate_3layers_2blackeyes.svg`.
    ///
    /// The mouth is only named when it differs from the default smile.
    pub fn file_name(&self, format: ExportFormat) -> String {
        let eyes = self.eye_count();
        let mut parts = vec![
            "crochet_poop".to_string(),
            self.body_color.name().to_string(),
            format!("{}layers", self.layer_count()),
            format!(
                "{}{}eye{}",
                eyes,
                self.eye_color.name(),
                if eyes == 1 { "" } else { "s" }
            ),
        ];
        if self.mouth_style != MouthStyle::Smile {
            parts.push(self.mouth_style.name().to_string());
        }
        if self.has_arms {
            parts.push("arms".to_string());
        }
        if self.has_legs {
            parts.push("legs".to_string());
        }

        format!("{}.{}", parts.join("_"), format.extension())
    }

    /// A one-line caption for the figure.
    pub fn description(&self) -> String {
        let eyes = self.eye_count();
        let mut text = format!(
            "A beautiful {} log with {} stinky stacks, {} {} stink eye{}, ",
            self.body_color.name(),
            self.layer_count(),
            eyes,
            self.eye_color.name(),
            if eyes == 1 { "" } else { "s" }
        );
        match self.mouth_style {
            MouthStyle::None => text.push_str("no mouth"),
            style => {
                text.push_str(style.name());
                text.push_str(" mouth");
            }
        }
        if self.has_arms {
            text.push_str(", fudge fingers");
        }
        if self.has_legs {
            text.push_str(", turd trotters");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_empty_json() {
        let config = Configuration::from_json("{}").unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.body_color, BodyColor::Chocolate);
        assert_eq!(config.num_layers, 3);
        assert_eq!(config.num_eyes, 2);
        assert_eq!(config.mouth_style, MouthStyle::Smile);
    }

    #[test]
    fn json_is_camel_case() {
        let json = Configuration::new().with_legs(true).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"bodyColor":"chocolate","numLayers":3,"numEyes":2,"eyeColor":"black","hasArms":false,"hasLegs":true,"mouthStyle":"smile"}"#
        );
    }

    #[test]
    fn accepts_name_aliases() {
        let config =
            Configuration::from_json(r#"{"bodyColorName":"blue","eyeColorName":"red"}"#).unwrap();
        assert_eq!(config.body_color, BodyColor::Blue);
        assert_eq!(config.eye_color, EyeColor::Red);
    }

    #[test]
    fn unknown_names_fall_back() {
        let config = Configuration::from_json(
            r#"{"bodyColor":"plaid","eyeColor":"teal","mouthStyle":"grimace"}"#,
        )
        .unwrap();
        assert_eq!(config.body_color, BodyColor::Chocolate);
        assert_eq!(config.eye_color, EyeColor::Black);
        assert_eq!(config.mouth_style, MouthStyle::Smile);
    }

    #[test]
    fn wrong_types_are_errors() {
        assert!(Configuration::from_json(r#"{"numLayers":"three"}"#).is_err());
        assert!(Configuration::from_json("[]").is_err());
    }

    #[test]
    fn counts_are_clamped() {
        let config = Configuration::new().with_layers(99).with_eyes(-4);
        assert_eq!(config.layer_count(), 5);
        assert_eq!(config.eye_count(), 1);
        assert_eq!(config.num_layers, 99);
    }

    #[test]
    fn pretty_json_round_trips() {
        let config = Configuration::new()
            .with_body_color(BodyColor::Blue)
            .with_eye_color(EyeColor::Orange)
            .with_mouth(MouthStyle::None);
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains('\n'));
        assert_eq!(Configuration::from_json(&json).unwrap(), config);
    }

    #[test]
    fn default_file_name() {
        assert_eq!(
            Configuration::default().file_name(ExportFormat::Svg),
            "crochet_poop_chocolate_3layers_2blackeyes.svg"
        );
    }

    #[test]
    fn file_name_lists_options() {
        let config = Configuration::new()
            .with_body_color(BodyColor::Blue)
            .with_layers(5)
            .with_eyes(1)
            .with_eye_color(EyeColor::Green)
            .with_mouth(MouthStyle::None)
            .with_arms(true)
            .with_legs(true);
        assert_eq!(
            config.file_name(ExportFormat::Png),
            "crochet_poop_blue_5layers_1greeneye_none_arms_legs.png"
        );
    }

    #[test]
    fn file_name_uses_clamped_counts() {
        let config = Configuration::new().with_layers(12).with_eyes(0);
        assert_eq!(
            config.file_name(ExportFormat::Svg),
            "crochet_poop_chocolate_5layers_1blackeye.svg"
        );
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            Configuration::default().description(),
            "A beautiful chocolate log with 3 stinky stacks, 2 black stink eyes, smile mouth"
        );

        let config = Configuration::new()
            .with_eyes(1)
            .with_mouth(MouthStyle::None)
            .with_arms(true)
            .with_legs(true);
        assert_eq!(
            config.description(),
            "A beautiful chocolate log with 3 stinky stacks, 1 black stink eye, no mouth, fudge fingers, turd trotters"
        );
    }

    #[test]
    fn mouth_names_round_trip() {
        for style in MouthStyle::ALL {
            assert_eq!(MouthStyle::from_name(style.name()), style);
        }
        assert_eq!(MouthStyle::from_name("SHARK"), MouthStyle::Shark);
    }

    #[test]
    fn export_format_names() {
        assert_eq!(ExportFormat::from_name("PNG"), ExportFormat::Png);
        assert_eq!(ExportFormat::from_name("gif"), ExportFormat::Svg);
        assert_eq!(ExportFormat::Png.to_string(), "png");
    }

    #[cfg(feature = "jsonschema")]
    #[test]
    fn schema_names_every_field() {
        let schema = serde_json::to_string(&Configuration::json_schema()).unwrap();
        for field in ["bodyColor", "numLayers", "numEyes", "eyeColor", "hasArms", "hasLegs", "mouthStyle"] {
            assert!(schema.contains(field), "schema missing {}", field);
        }
    }
}
