//! Point/contour model of a glyph outline
//!
//! Contours are stored without an explicit closing point; closure is implied
//! by the GLIF format.

pub mod coord;
pub mod types;

pub use coord::format_coord;
pub use types::{AnchorStyle, Contour, Outline, Point, PointKind};
