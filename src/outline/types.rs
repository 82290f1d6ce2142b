//! Core outline types

use serde::Deserialize;

use super::coord::{format_coord, same_position};

/// How a point is written in GLIF output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// On-curve point reached by a straight segment (`type="line"`)
    Line,
    /// On-curve point ending a cubic segment (`type="curve"`)
    Curve,
    /// Cubic control point (no `type` attribute)
    OffCurve,
}

impl PointKind {
    /// The GLIF `type` attribute value, if any
    pub fn glif_type(&self) -> Option<&'static str> {
        match self {
            PointKind::Line => Some("line"),
            PointKind::Curve => Some("curve"),
            PointKind::OffCurve => None,
        }
    }

    pub fn is_on_curve(&self) -> bool {
        !matches!(self, PointKind::OffCurve)
    }
}

/// A single outline point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub kind: PointKind,
    pub smooth: bool,
}

impl Point {
    /// On-curve point reached by a line
    pub fn line(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::Line,
            smooth: false,
        }
    }

    /// Smooth on-curve point ending a curve
    pub fn curve(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::Curve,
            smooth: true,
        }
    }

    /// Control point
    pub fn off_curve(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: PointKind::OffCurve,
            smooth: false,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Formatted `x` attribute value
    pub fn x_str(&self) -> String {
        format_coord(self.x)
    }

    /// Formatted `y` attribute value
    pub fn y_str(&self) -> String {
        format_coord(self.y)
    }

    /// Whether both points format to the same coordinates
    pub fn coincides_with(&self, other: &Point) -> bool {
        same_position(self.position(), other.position())
    }
}

/// How the anchor point opened by a move command is typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorStyle {
    /// `type="line"`
    #[default]
    Line,
    /// `type="curve" smooth="yes"`
    SmoothCurve,
}

impl AnchorStyle {
    pub fn anchor_point(&self, x: f64, y: f64) -> Point {
        match self {
            AnchorStyle::Line => Point::line(x, y),
            AnchorStyle::SmoothCurve => Point::curve(x, y),
        }
    }
}

/// A closed contour; the closing segment back to the anchor is implicit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first point, which a well-formed contour always has on-curve
    pub fn anchor(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A contour with at most one point draws nothing
    pub fn is_degenerate(&self) -> bool {
        self.points.len() <= 1
    }

    /// Whether `point` would duplicate the anchor
    pub fn is_at_anchor(&self, point: &Point) -> bool {
        self.anchor().is_some_and(|a| a.coincides_with(point))
    }

    /// Remove the last point when it duplicates the anchor
    ///
    /// A single-point contour is left as is.
    pub fn trim_closing_point(&mut self) {
        if self.points.len() < 2 {
            return;
        }
        let (first, last) = (self.points[0], self.points[self.points.len() - 1]);
        if first.coincides_with(&last) {
            self.points.pop();
        }
    }
}

/// Ordered contours of one glyph, in drawing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub contours: Vec<Contour>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contour, dropping it if degenerate
    ///
    /// Returns whether the contour was kept.
    pub fn push(&mut self, contour: Contour) -> bool {
        if contour.is_degenerate() {
            return false;
        }
        self.contours.push(contour);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Total number of points across all contours
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }
}
