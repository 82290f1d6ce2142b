//! GLIF generation from glyph records

use crate::glyph::GlyphRecord;
use crate::outline::{Contour, Point};

use super::GlifConfig;

/// Build GLIF XML line by line
pub struct GlifBuilder {
    config: GlifConfig,
    lines: Vec<String>,
    indent: usize,
}

impl GlifBuilder {
    /// Create a new GLIF builder
    pub fn new(config: GlifConfig) -> Self {
        Self {
            config,
            lines: vec![],
            indent: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            self.config.indent.repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn line(&mut self, text: String) {
        let line = format!("{}{}", self.indent_str(), text);
        self.lines.push(line);
    }

    /// Open an element with children
    fn open(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.line(format!("<{}{}>", tag, format_attrs(attrs)));
        self.indent += 1;
    }

    /// Close the innermost open element
    fn close(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.line(format!("</{}>", tag));
    }

    /// Add an element without children
    fn empty(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.line(format!("<{}{}/>", tag, format_attrs(attrs)));
    }

    /// Add the `advance` and optional `unicode` elements
    pub fn add_header(&mut self, record: &GlyphRecord) {
        self.empty(
            "advance",
            &[
                ("width", format_advance(record.metrics.advance_width)),
                ("height", format_advance(record.metrics.advance_height)),
            ],
        );
        if let Some(hex) = record.unicode_hex() {
            self.empty("unicode", &[("hex", hex)]);
        }
    }

    /// Add the `outline` element with all contours
    pub fn add_outline(&mut self, record: &GlyphRecord) {
        if record.outline.is_empty() {
            self.empty("outline", &[]);
            return;
        }
        self.open("outline", &[]);
        for contour in &record.outline.contours {
            self.add_contour(contour);
        }
        self.close("outline");
    }

    fn add_contour(&mut self, contour: &Contour) {
        self.open("contour", &[]);
        for point in &contour.points {
            self.add_point(point);
        }
        self.close("contour");
    }

    fn add_point(&mut self, point: &Point) {
        let mut attrs = vec![("x", point.x_str()), ("y", point.y_str())];
        if let Some(kind) = point.kind.glif_type() {
            attrs.push(("type", kind.to_string()));
            if point.smooth {
                attrs.push(("smooth", "yes".to_string()));
            }
        }
        self.empty("point", &attrs);
    }

    /// Render a whole glyph
    pub fn build(mut self, record: &GlyphRecord) -> String {
        if self.config.xml_declaration {
            self.lines.push(r#"<?xml version="1.0"?>"#.to_string());
        }
        self.open(
            "glyph",
            &[("name", record.name.clone()), ("format", "2".to_string())],
        );
        self.add_header(record);
        self.add_outline(record);
        self.close("glyph");

        let newline = self.newline();
        let mut out = self.lines.join(newline);
        out.push_str(newline);
        out
    }
}

/// Render a glyph record as GLIF XML
pub fn render_glif(record: &GlyphRecord, config: &GlifConfig) -> String {
    GlifBuilder::new(config.clone()).build(record)
}

/// Advance metrics are written as integers, truncated toward zero
fn format_advance(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

fn format_attrs(attrs: &[(&str, String)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {}="{}""#, k, escape_attr(v)))
        .collect()
}

/// Escape a string for use inside a double-quoted XML attribute
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
