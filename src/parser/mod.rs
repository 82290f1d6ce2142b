//! Parser for SVG path data
//!
//! Splits path data into command segments, extracts their numbers, and builds
//! glyph contours from the resulting command stream.

pub mod ast;
pub mod builder;
pub mod lexer;

pub use ast::*;
pub use builder::{build_outline, BuildOptions, ContourBuilder, GroupPolicy};
pub use lexer::{extract_numbers, tokenize, Segments};

use log::debug;

/// Parse path data into commands with their numeric arguments
///
/// Segments that yield no numbers are dropped, except closepath which takes
/// none.
pub fn parse_commands(path: &str) -> impl Iterator<Item = PathCommand> + '_ {
    tokenize(path)
        .enumerate()
        .filter_map(|(index, segment)| {
            let numbers = extract_numbers(segment.args);
            if numbers.is_empty() && segment.command.kind != CommandKind::Close {
                debug!(
                    "skipping command {} ('{}'): no numeric arguments",
                    index,
                    segment.command.letter()
                );
                return None;
            }
            Some(PathCommand {
                command: segment.command,
                numbers,
                span: segment.span,
                index,
            })
        })
}
