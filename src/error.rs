//! Error types for path parsing and glyph conversion

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A command's arguments do not divide into whole coordinate groups
    #[error(
        "command {index} ('{letter}') expects arguments in groups of {expected}, found {found}"
    )]
    IncompleteCoordinateGroup {
        letter: char,
        index: usize,
        expected: usize,
        found: usize,
        span: Span,
    },
}

impl PathError {
    pub fn incomplete_group(
        letter: char,
        index: usize,
        expected: usize,
        found: usize,
        span: Span,
    ) -> Self {
        Self::IncompleteCoordinateGroup {
            letter,
            index,
            expected,
            found,
            span,
        }
    }

    /// Get the source span of the offending command
    pub fn span(&self) -> &Span {
        match self {
            Self::IncompleteCoordinateGroup { span, .. } => span,
        }
    }

    /// Index of the offending command within the path
    pub fn command_index(&self) -> usize {
        match self {
            Self::IncompleteCoordinateGroup { index, .. } => *index,
        }
    }

    /// Format the error with path-data context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            PathError::IncompleteCoordinateGroup {
                letter,
                expected,
                found,
                span,
                ..
            } => {
                let remainder = found.checked_rem(*expected).unwrap_or(*found);
                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(self.to_string())
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!(
                                "'{}' takes {} numbers per group; {} left over",
                                letter, expected, remainder
                            ))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// A path error tagged with the glyph it came from
#[derive(Error, Debug, Clone, PartialEq)]
#[error("glyph '{glyph}': {source}")]
pub struct ConvertError {
    pub glyph: String,
    #[source]
    pub source: PathError,
}

impl ConvertError {
    pub fn new(glyph: impl Into<String>, source: PathError) -> Self {
        Self {
            glyph: glyph.into(),
            source,
        }
    }
}
