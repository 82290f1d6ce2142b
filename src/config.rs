//! Conversion configuration loaded from TOML
//!
//! Holds batch-wide defaults plus per-glyph overrides, so special cases
//! such as a glyph whose move anchors are smooth curve points live in data
//! rather than in the converter.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::glyph::{GlyphOptions, Metrics};
use crate::outline::AnchorStyle;
use crate::parser::GroupPolicy;

/// Errors that can occur when loading or parsing a conversion config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Batch-wide conversion settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub advance_width: f64,
    pub advance_height: f64,
    /// Reject commands with incomplete coordinate groups
    pub strict: bool,
    pub anchor: AnchorStyle,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            advance_width: 1000.0,
            advance_height: 1000.0,
            strict: false,
            anchor: AnchorStyle::Line,
        }
    }
}

/// Settings for a single glyph; unset fields fall back to [`Defaults`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphOverride {
    pub anchor: Option<AnchorStyle>,
    pub advance_width: Option<f64>,
    pub advance_height: Option<f64>,
}

/// Conversion config: defaults plus per-glyph overrides keyed by glyph name
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    pub defaults: Defaults,
    pub glyphs: HashMap<String, GlyphOverride>,
}

impl ConversionConfig {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the default advance metrics
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.defaults.advance_width = metrics.advance_width;
        self.defaults.advance_height = metrics.advance_height;
        self
    }

    /// Enable or disable strict coordinate groups
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.defaults.strict = strict;
        self
    }

    /// Add or replace the override for one glyph
    pub fn with_glyph(mut self, name: impl Into<String>, glyph: GlyphOverride) -> Self {
        self.glyphs.insert(name.into(), glyph);
        self
    }

    /// Resolve the options for a glyph
    ///
    /// `advance_width` is a per-glyph width from the source document; a
    /// config override still wins over it.
    pub fn options_for(&self, name: &str, advance_width: Option<f64>) -> GlyphOptions {
        let glyph = self.glyphs.get(name);
        let width = glyph
            .and_then(|g| g.advance_width)
            .or(advance_width)
            .unwrap_or(self.defaults.advance_width);
        let height = glyph
            .and_then(|g| g.advance_height)
            .unwrap_or(self.defaults.advance_height);
        let anchor = glyph.and_then(|g| g.anchor).unwrap_or(self.defaults.anchor);
        let policy = if self.defaults.strict {
            GroupPolicy::Strict
        } else {
            GroupPolicy::Truncate
        };

        GlyphOptions::new()
            .with_metrics(Metrics::new(width, height))
            .with_anchor_style(anchor)
            .with_group_policy(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConversionConfig::default();
        let options = config.options_for("a", None);
        assert_eq!(options.metrics, Metrics::new(1000.0, 1000.0));
        assert_eq!(options.build.anchor_style, AnchorStyle::Line);
        assert_eq!(options.build.group_policy, GroupPolicy::Truncate);
    }

    #[test]
    fn test_parse_toml_with_overrides() {
        let toml_str = r#"
[defaults]
advance_width = 900
strict = true

[glyphs."tok.linja"]
anchor = "smooth-curve"
advance_width = 1200
"#;
        let config = ConversionConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.defaults.advance_width, 900.0);
        assert_eq!(config.defaults.advance_height, 1000.0);

        let linja = config.options_for("tok.linja", None);
        assert_eq!(linja.build.anchor_style, AnchorStyle::SmoothCurve);
        assert_eq!(linja.metrics.advance_width, 1200.0);
        assert_eq!(linja.build.group_policy, GroupPolicy::Strict);

        let other = config.options_for("tok.pona", None);
        assert_eq!(other.build.anchor_style, AnchorStyle::Line);
        assert_eq!(other.metrics.advance_width, 900.0);
    }

    #[test]
    fn test_source_width_between_override_and_default() {
        let config = ConversionConfig::default().with_glyph(
            "wide",
            GlyphOverride {
                advance_width: Some(2000.0),
                ..Default::default()
            },
        );
        assert_eq!(config.options_for("wide", Some(500.0)).metrics.advance_width, 2000.0);
        assert_eq!(config.options_for("b", Some(500.0)).metrics.advance_width, 500.0);
        assert_eq!(config.options_for("b", None).metrics.advance_width, 1000.0);
    }

    #[test]
    fn test_builder_methods() {
        let config = ConversionConfig::default()
            .with_metrics(Metrics::new(600.0, 700.0))
            .with_strict(true);
        let options = config.options_for("x", None);
        assert_eq!(options.metrics, Metrics::new(600.0, 700.0));
        assert_eq!(options.build.group_policy, GroupPolicy::Strict);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ConversionConfig::from_str("").expect("Should parse");
        assert_eq!(config, ConversionConfig::default());
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(ConversionConfig::from_str("this is not valid toml {{{{").is_err());
        assert!(ConversionConfig::from_str("[glyphs.a]\nanchor = \"round\"").is_err());
    }
}
