//! svg2glif - Convert SVG path data into GLIF glyph outlines
//!
//! This library provides a path-data parser, a contour builder, and a GLIF
//! renderer, plus glue for converting whole SVG fonts into `.glif` files.
//!
//! # Example
//!
//! ```rust
//! use svg2glif::convert_path;
//!
//! let glif = convert_path("square", Some('a'), "M0 0 H100 V100 H0 Z").unwrap();
//! assert!(glif.contains(r#"<glyph name="square" format="2">"#));
//! assert!(glif.contains(r#"<unicode hex="61"/>"#));
//! ```

pub mod config;
pub mod error;
pub mod glyph;
pub mod outline;
pub mod output;
pub mod parser;
pub mod renderer;
pub mod source;

pub use config::{ConfigError, ConversionConfig, GlyphOverride};
pub use error::{ConvertError, PathError};
pub use glyph::{assemble, GlyphOptions, GlyphRecord, Metrics};
pub use outline::{format_coord, AnchorStyle, Contour, Outline, Point, PointKind};
pub use output::{save_glif, OutputError};
pub use parser::{build_outline, BuildOptions, GroupPolicy};
pub use renderer::{render_glif, GlifConfig};
pub use source::{read_svg_font, SourceError, SvgGlyph};

use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

/// Errors for a single glyph of a batch
#[derive(Debug, Error)]
pub enum BatchError {
    /// The glyph's path data could not be converted
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The converted glyph could not be written
    #[error("glyph '{glyph}': {source}")]
    Output {
        glyph: String,
        #[source]
        source: OutputError,
    },
}

impl BatchError {
    /// Name of the glyph that failed
    pub fn glyph(&self) -> &str {
        match self {
            BatchError::Convert(e) => &e.glyph,
            BatchError::Output { glyph, .. } => glyph,
        }
    }
}

/// Outcome of converting a batch of glyphs
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written, in glyph order
    pub written: Vec<PathBuf>,
    /// Glyphs without path data
    pub skipped: Vec<String>,
    /// Glyphs that failed; the rest of the batch still ran
    pub failures: Vec<BatchError>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Configuration for the complete conversion pipeline
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Metrics, anchor styles and group policy, per glyph
    pub conversion: ConversionConfig,
    /// GLIF output configuration
    pub glif: GlifConfig,
}

impl ConvertConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conversion configuration
    pub fn with_conversion(mut self, config: ConversionConfig) -> Self {
        self.conversion = config;
        self
    }

    /// Set the GLIF configuration
    pub fn with_glif(mut self, config: GlifConfig) -> Self {
        self.glif = config;
        self
    }
}

/// Convert one glyph's path data to GLIF text with default configuration
pub fn convert_path(
    name: &str,
    unicode: Option<char>,
    path: &str,
) -> Result<String, ConvertError> {
    convert_path_with_config(name, unicode, path, &ConvertConfig::default())
}

/// Convert one glyph's path data to GLIF text
///
/// # Example
///
/// ```rust
/// use svg2glif::{convert_path_with_config, AnchorStyle, ConversionConfig, ConvertConfig, GlyphOverride};
///
/// let conversion = ConversionConfig::default().with_glyph(
///     "tok.linja",
///     GlyphOverride { anchor: Some(AnchorStyle::SmoothCurve), ..Default::default() },
/// );
/// let config = ConvertConfig::new().with_conversion(conversion);
///
/// let glif = convert_path_with_config("tok.linja", None, "M0 0 L10 0 L10 10 Z", &config).unwrap();
/// assert!(glif.contains(r#"<point x="0" y="0" type="curve" smooth="yes"/>"#));
/// ```
pub fn convert_path_with_config(
    name: &str,
    unicode: Option<char>,
    path: &str,
    config: &ConvertConfig,
) -> Result<String, ConvertError> {
    let options = config.conversion.options_for(name, None);
    let record = assemble(name, unicode, path, &options)?;
    Ok(render_glif(&record, &config.glif))
}

/// Convert the glyphs of an SVG font into `.glif` files under `out_dir`
///
/// Glyphs are independent: a glyph that fails is recorded in the report and
/// the remaining glyphs are still written. Only an unreadable document fails
/// the whole call.
pub fn convert_svg_font(
    svg: &str,
    out_dir: &Path,
    config: &ConvertConfig,
) -> Result<BatchReport, SourceError> {
    let glyphs = read_svg_font(svg)?;
    Ok(convert_glyphs(&glyphs, out_dir, config))
}

/// Convert already-read SVG glyphs into `.glif` files under `out_dir`
pub fn convert_glyphs(glyphs: &[SvgGlyph], out_dir: &Path, config: &ConvertConfig) -> BatchReport {
    let mut report = BatchReport::default();

    for glyph in glyphs {
        if glyph.path.trim().is_empty() {
            debug!("glyph '{}': no path data, skipping", glyph.name);
            report.skipped.push(glyph.name.clone());
            continue;
        }

        match convert_glyph(glyph, out_dir, config) {
            Ok(path) => report.written.push(path),
            Err(e) => {
                warn!("{}", e);
                report.failures.push(e);
            }
        }
    }

    report
}

fn convert_glyph(
    glyph: &SvgGlyph,
    out_dir: &Path,
    config: &ConvertConfig,
) -> Result<PathBuf, BatchError> {
    let options = config
        .conversion
        .options_for(&glyph.name, glyph.advance_width);
    let record = assemble(&glyph.name, glyph.unicode, &glyph.path, &options)?;
    let glif = render_glif(&record, &config.glif);
    save_glif(&glyph.name, &glif, out_dir).map_err(|source| BatchError::Output {
        glyph: glyph.name.clone(),
        source,
    })
}
