//! GLIF renderer for converted glyphs
//!
//! This module takes a GlyphRecord and produces the XML text of a
//! format 2 `.glif` file.

pub mod config;
pub mod glif;

pub use config::GlifConfig;
pub use glif::render_glif;
