//! Glyph records: one converted glyph plus its metadata

use crate::error::ConvertError;
use crate::outline::{AnchorStyle, Outline};
use crate::parser::{build_outline, BuildOptions, GroupPolicy};

/// Advance width and height of a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub advance_width: f64,
    pub advance_height: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            advance_width: 1000.0,
            advance_height: 1000.0,
        }
    }
}

impl Metrics {
    pub fn new(advance_width: f64, advance_height: f64) -> Self {
        Self {
            advance_width,
            advance_height,
        }
    }
}

/// A converted glyph, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    pub name: String,
    pub unicode: Option<u32>,
    pub metrics: Metrics,
    pub outline: Outline,
}

impl GlyphRecord {
    /// Codepoint as uppercase hex without padding (`F701D`, `41`)
    pub fn unicode_hex(&self) -> Option<String> {
        self.unicode.map(|cp| format!("{:X}", cp))
    }
}

/// Per-glyph conversion options
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphOptions {
    pub metrics: Metrics,
    pub build: BuildOptions,
}

impl GlyphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_anchor_style(mut self, style: AnchorStyle) -> Self {
        self.build = self.build.with_anchor_style(style);
        self
    }

    pub fn with_group_policy(mut self, policy: GroupPolicy) -> Self {
        self.build = self.build.with_group_policy(policy);
        self
    }
}

/// Convert one glyph's path data into a [`GlyphRecord`]
pub fn assemble(
    name: &str,
    unicode: Option<char>,
    path: &str,
    options: &GlyphOptions,
) -> Result<GlyphRecord, ConvertError> {
    let outline =
        build_outline(path, &options.build).map_err(|e| ConvertError::new(name, e))?;
    Ok(GlyphRecord {
        name: name.to_string(),
        unicode: unicode.map(u32::from),
        metrics: options.metrics,
        outline,
    })
}
