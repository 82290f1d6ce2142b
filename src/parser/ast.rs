//! Path command types

pub use crate::error::Span;

/// The drawing operation a command letter names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    Horizontal,
    Vertical,
    CurveTo,
    Close,
}

impl CommandKind {
    /// Number of arguments consumed per repetition of the command
    pub fn group_size(&self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo => 2,
            CommandKind::Horizontal | CommandKind::Vertical => 1,
            CommandKind::CurveTo => 6,
            CommandKind::Close => 0,
        }
    }
}

/// A command letter: its kind plus absolute/relative addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Lowercase letters address relative to the current position
    pub relative: bool,
}

impl Command {
    /// Look up one of `M m L l H h V v C c Z z`
    pub fn from_letter(letter: char) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::Horizontal,
            'V' => CommandKind::Vertical,
            'C' => CommandKind::CurveTo,
            'Z' => CommandKind::Close,
            _ => return None,
        };
        Some(Self {
            kind,
            relative: letter.is_ascii_lowercase(),
        })
    }

    pub fn letter(&self) -> char {
        let upper = match self.kind {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::Horizontal => 'H',
            CommandKind::Vertical => 'V',
            CommandKind::CurveTo => 'C',
            CommandKind::Close => 'Z',
        };
        if self.relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }
}

/// A command letter and the raw argument text following it
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    pub command: Command,
    pub args: &'a str,
    /// Byte range of the letter and its arguments in the path string
    pub span: Span,
}

/// A command with its extracted numeric arguments
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub command: Command,
    pub numbers: Vec<f64>,
    pub span: Span,
    /// Position among the recognized commands of the path
    pub index: usize,
}

impl PathCommand {
    pub fn kind(&self) -> CommandKind {
        self.command.kind
    }

    pub fn letter(&self) -> char {
        self.command.letter()
    }
}
