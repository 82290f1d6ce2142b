//! Lexers for SVG path data using logos
//!
//! Two passes: [`tokenize`] finds command letters and cuts the path into
//! segments, then [`extract_numbers`] pulls the numbers out of one segment's
//! argument text.

use log::debug;
use logos::Logos;

use super::ast::{Command, Segment, Span};

/// Characters that start a new segment
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    #[regex("[MmLlHhVvCcZz]", |lex| lex.slice().chars().next())]
    Command(char),

    // Arcs and shorthand/quadratic curves end the previous segment but are
    // not interpreted
    #[regex("[AaSsQqTt]", |lex| lex.slice().chars().next())]
    Unsupported(char),
}

/// Pieces a number is assembled from
///
/// Each piece is a single unambiguous token, so the lexer never has to back
/// out of a partial number. `number_len` does the assembling.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum NumberPart {
    #[token("-")]
    Minus,
    #[token(".")]
    Dot,
    #[regex("[0-9]+")]
    Digits,
    #[regex(r"[^0-9.\-]+")]
    Separator,
}

/// Split path data into command segments
///
/// The input is trimmed first. Spans in the returned segments index into the
/// untrimmed string.
pub fn tokenize(path: &str) -> Segments<'_> {
    let trimmed = path.trim();
    let offset = path.len() - path.trim_start().len();
    Segments {
        source: trimmed,
        offset,
        lexer: Boundary::lexer(trimmed),
        pending: None,
    }
}

/// Lazy iterator over the command segments of a path
///
/// Cloning yields an independent iterator from the same position.
#[derive(Clone)]
pub struct Segments<'a> {
    source: &'a str,
    offset: usize,
    lexer: logos::Lexer<'a, Boundary>,
    pending: Option<(Boundary, Span)>,
}

impl<'a> Segments<'a> {
    fn next_boundary(&mut self) -> Option<(Boundary, Span)> {
        while let Some(token) = self.lexer.next() {
            if let Ok(boundary) = token {
                return Some((boundary, self.lexer.span()));
            }
        }
        None
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (boundary, span) = match self.pending.take() {
                Some(pending) => pending,
                None => self.next_boundary()?,
            };
            let following = self.next_boundary();
            let end = following
                .as_ref()
                .map(|(_, s)| s.start)
                .unwrap_or(self.source.len());
            self.pending = following;

            match boundary {
                Boundary::Command(letter) => {
                    if let Some(command) = Command::from_letter(letter) {
                        return Some(Segment {
                            command,
                            args: &self.source[span.end..end],
                            span: self.offset + span.start..self.offset + end,
                        });
                    }
                }
                Boundary::Unsupported(letter) => {
                    debug!("skipping unsupported path command '{}'", letter);
                }
            }
        }
    }
}

/// Extract every number from a segment's argument text, in order
///
/// Numbers are an optional minus sign, digits and an optional fraction
/// (`-12`, `3.5`, `-.25`). Anything else (commas, whitespace, exponents,
/// a minus sign not followed by a number) only separates numbers. Values too
/// large to be finite are dropped.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let parts: Vec<(NumberPart, Span)> = NumberPart::lexer(text)
        .spanned()
        .map(|(part, span)| (part.unwrap_or(NumberPart::Separator), span))
        .collect();
    let kinds: Vec<NumberPart> = parts.iter().map(|(part, _)| *part).collect();

    let mut numbers = Vec::new();
    let mut i = 0;
    while i < parts.len() {
        let Some(len) = number_len(&kinds[i..]) else {
            i += 1;
            continue;
        };
        let literal = &text[parts[i].1.start..parts[i + len - 1].1.end];
        match literal.parse::<f64>() {
            Ok(n) if n.is_finite() => numbers.push(n),
            _ => debug!("ignoring out-of-range number '{}'", literal),
        }
        i += len;
    }
    numbers
}

/// Number of parts in the number starting at `parts[0]`, if one starts there
///
/// A run of digits takes a following fraction when there is one; otherwise
/// a dangling `.` is left for the next number.
fn number_len(parts: &[NumberPart]) -> Option<usize> {
    use NumberPart::*;

    let sign = usize::from(parts.first() == Some(&Minus));
    let unsigned = match parts[sign..] {
        [Digits, Dot, Digits, ..] => 3,
        [Digits, ..] => 1,
        [Dot, Digits, ..] => 2,
        _ => return None,
    };
    Some(sign + unsigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::CommandKind;

    fn letters(path: &str) -> Vec<char> {
        tokenize(path).map(|s| s.command.letter()).collect()
    }

    #[test]
    fn test_segments() {
        let segments: Vec<_> = tokenize("M0,0 L10 10Z").collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].command.kind, CommandKind::MoveTo);
        assert_eq!(segments[0].args, "0,0 ");
        assert_eq!(segments[1].args, "10 10");
        assert_eq!(segments[2].args, "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   \n ").count(), 0);
    }

    #[test]
    fn test_spans_index_untrimmed_input() {
        let path = "  M1 2 l3 4  ";
        let segments: Vec<_> = tokenize(path).collect();
        assert_eq!(segments[0].span, 2..7);
        assert_eq!(&path[segments[0].span.clone()], "M1 2 ");
        assert_eq!(&path[segments[1].span.clone()], "l3 4");
    }

    #[test]
    fn test_unsupported_commands_dropped() {
        assert_eq!(letters("M0 0 Q1 1 2 2 L3 3 A1 1 0 0 1 5 5 z"), vec!['M', 'L', 'z']);
    }

    #[test]
    fn test_unsupported_arguments_do_not_leak() {
        let segments: Vec<_> = tokenize("M0 0 S1 1 2 2 L3 3").collect();
        assert_eq!(extract_numbers(segments[0].args), vec![0.0, 0.0]);
        assert_eq!(extract_numbers(segments[1].args), vec![3.0, 3.0]);
    }

    #[test]
    fn test_text_before_first_command_ignored() {
        assert_eq!(letters("12 34 M0 0"), vec!['M']);
    }

    #[test]
    fn test_segments_restartable() {
        let segments = tokenize("M0 0 L1 1 Z");
        let first: Vec<_> = segments.clone().collect();
        let second: Vec<_> = segments.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_numbers() {
        assert_eq!(extract_numbers(" 10,20 -3.5 .25"), vec![10.0, 20.0, -3.5, 0.25]);
        assert_eq!(extract_numbers("-.5-2"), vec![-0.5, -2.0]);
    }

    #[test]
    fn test_extract_negative_after_separator() {
        // (input, numbers matched by -?\d*\.?\d+ left to right)
        let cases: &[(&str, &[f64])] = &[
            ("0,-5", &[0.0, -5.0]),
            (" -5", &[-5.0]),
            ("20 -20", &[20.0, -20.0]),
            ("10.-20 30", &[10.0, -20.0, 30.0]),
            ("a-5", &[-5.0]),
            ("1e-5", &[1.0, -5.0]),
            ("--5", &[-5.0]),
            ("- 5", &[5.0]),
            ("-", &[]),
            ("1..2", &[1.0, 0.2]),
            (".5.5", &[0.5, 0.5]),
            ("-1.-.5", &[-1.0, -0.5]),
        ];
        for (input, expected) in cases {
            assert_eq!(extract_numbers(input), expected.to_vec(), "input {:?}", input);
        }
    }

    #[test]
    fn test_extract_numbers_drops_infinite() {
        let huge = "9".repeat(400);
        assert_eq!(extract_numbers(&format!("1 {} 2", huge)), vec![1.0, 2.0]);
    }

    #[test]
    fn test_extract_numbers_adjacent_fractions() {
        assert_eq!(extract_numbers("1.5.5"), vec![1.5, 0.5]);
    }

    #[test]
    fn test_extract_numbers_no_exponent() {
        assert_eq!(extract_numbers("1e5"), vec![1.0, 5.0]);
    }

    #[test]
    fn test_extract_numbers_none() {
        assert!(extract_numbers("").is_empty());
        assert!(extract_numbers(" , ").is_empty());
    }
}
