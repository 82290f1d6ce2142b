//! Reading glyphs from SVG font documents
//!
//! Only the first `<font>` element is used. Each of its `<glyph>` children
//! contributes a name, an optional codepoint and path data.

use log::debug;
use thiserror::Error;
use xml::attribute::OwnedAttribute;
use xml::name::OwnedName;
use xml::reader::{EventReader, XmlEvent};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Name used for glyphs without a `glyph-name` attribute
pub const UNNAMED_GLYPH: &str = "unnamed_glyph";

/// Errors that can occur when reading an SVG font
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read SVG file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse SVG: {0}")]
    XmlError(#[from] xml::reader::Error),
    #[error("No font element found in the SVG")]
    NoFont,
}

/// One `<glyph>` of an SVG font
#[derive(Debug, Clone, PartialEq)]
pub struct SvgGlyph {
    pub name: String,
    pub unicode: Option<char>,
    /// Path data; empty when the glyph has no `d` attribute
    pub path: String,
    /// `horiz-adv-x` of the glyph, or of the font when the glyph has none
    pub advance_width: Option<f64>,
}

/// Read an SVG font file
pub fn read_svg_font_file(path: &std::path::Path) -> Result<Vec<SvgGlyph>, SourceError> {
    let content = std::fs::read_to_string(path)?;
    read_svg_font(&content)
}

/// Read the glyphs of the first SVG font in a document, in document order
pub fn read_svg_font(svg: &str) -> Result<Vec<SvgGlyph>, SourceError> {
    let mut glyphs = Vec::new();
    let mut depth = 0usize;
    // Depth and default advance of the font element once found
    let mut font: Option<(usize, Option<f64>)> = None;

    for event in EventReader::new(svg.as_bytes()) {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                depth += 1;
                let state = font;
                match state {
                    None if is_svg(&name, "font") => {
                        font = Some((depth, parse_advance(&attributes)));
                    }
                    Some((font_depth, font_advance))
                        if depth == font_depth + 1 && is_svg(&name, "glyph") =>
                    {
                        glyphs.push(glyph_from_attributes(&attributes, font_advance));
                    }
                    _ => {}
                }
            }
            XmlEvent::EndElement { .. } => {
                if matches!(font, Some((font_depth, _)) if font_depth == depth) {
                    return Ok(glyphs);
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    match font {
        Some(_) => Ok(glyphs),
        None => Err(SourceError::NoFont),
    }
}

fn is_svg(name: &OwnedName, local: &str) -> bool {
    name.local_name == local && name.namespace.as_deref() == Some(SVG_NS)
}

fn attribute<'a>(attributes: &'a [OwnedAttribute], local: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name.local_name == local && a.name.namespace.is_none())
        .map(|a| a.value.as_str())
}

fn parse_advance(attributes: &[OwnedAttribute]) -> Option<f64> {
    attribute(attributes, "horiz-adv-x").and_then(|v| v.trim().parse().ok())
}

fn glyph_from_attributes(attributes: &[OwnedAttribute], font_advance: Option<f64>) -> SvgGlyph {
    let name = attribute(attributes, "glyph-name")
        .unwrap_or(UNNAMED_GLYPH)
        .to_string();

    let unicode = attribute(attributes, "unicode").and_then(|value| {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            (None, _) => None,
            (Some(_), Some(_)) => {
                debug!("glyph '{}': ignoring multi-character unicode '{}'", name, value);
                None
            }
        }
    });

    SvgGlyph {
        unicode,
        path: attribute(attributes, "d").unwrap_or_default().to_string(),
        advance_width: parse_advance(attributes).or(font_advance),
        name,
    }
}
