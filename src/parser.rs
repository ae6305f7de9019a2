//! Turns path data text into a [`Path`].
//!
//! The work happens in three passes: [`tokenize`] cuts the input at every
//! command letter, [`validate`] checks the command sequence, and [`convert`]
//! parses the numbers and expands `V`/`H` shorthands.

use crate::error::PathError;
use crate::format::{CommandKind, Path, RawSegment, Segment};
use crate::log::{debug, trace};

/// Path data used by the command line tool when none is given
pub const DEFAULT_PATH: &str = "M-2.18557e-06 50C-9.78513e-07 77.6142 22.3858 100 50 100L50 -2.18557e-06C22.3858 -9.78513e-07 -3.39263e-06 22.3858 -2.18557e-06 50Z";

/// A command letter and the text following it, as cut out of the input
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Token<'a> {
    /// The command letter followed by its arguments
    pub text: &'a str,
    /// Byte offset of `text` in the input
    pub offset: usize,
}

/// Iterator returned by [`tokenize`]
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

fn is_command_letter(c: char) -> bool {
    CommandKind::from_letter(c).is_some()
}

/// Split `input` into tokens, each starting at a command letter and running
/// up to the next one. Text before the first command letter is skipped.
pub fn tokenize(input: &str) -> Tokens<'_> {
    let pos = input.find(is_command_letter).unwrap_or(input.len());

    Tokens { input, pos }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.pos..];

        let mut chars = rest.char_indices();
        chars.next()?;

        let end = chars
            .find(|&(_, c)| is_command_letter(c))
            .map_or(rest.len(), |(i, _)| i);

        let token = Token {
            text: &rest[..end],
            offset: self.pos,
        };
        self.pos += end;

        Some(token)
    }
}

/// Check that the tokens form `M (C|L|V|H)+ Z` and attach a command to each
pub fn validate<'a>(tokens: &[Token<'a>]) -> Result<Vec<RawSegment<'a>>, PathError> {
    if tokens.len() < 3 {
        return Err(PathError::TooFewSegments {
            count: tokens.len(),
        });
    }

    let segments = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| -> Result<RawSegment<'a>, PathError> {
            let mut chars = token.text.chars();
            let command = chars
                .next()
                .and_then(CommandKind::from_letter)
                .ok_or(PathError::MalformedMatch { index })?;

            Ok(RawSegment {
                command,
                payload: chars.as_str(),
                offset: token.offset,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let first = segments[0].command;
    let last = segments[segments.len() - 1].command;
    if first != CommandKind::Move || last != CommandKind::ClosePath {
        return Err(PathError::BoundaryCommandInvalid { first, last });
    }

    for (index, segment) in segments.iter().enumerate().take(segments.len() - 1).skip(1) {
        if !segment.command.is_drawing() {
            return Err(PathError::InvalidMiddleCommand {
                index,
                command: segment.command,
            });
        }
    }

    Ok(segments)
}

/// Parse the arguments of every segment. A trailing `Z` is dropped since it
/// has no coordinates.
pub fn convert(segments: &[RawSegment<'_>]) -> Result<Path, PathError> {
    let segments = match segments.split_last() {
        Some((last, rest)) if last.command == CommandKind::ClosePath => rest,
        _ => segments,
    };

    let mut converted: Vec<Segment> = Vec::with_capacity(segments.len());

    for (index, raw) in segments.iter().enumerate() {
        let values = parse_arguments(index, raw)?;

        let values = match raw.command {
            CommandKind::VerticalLine | CommandKind::HorizontalLine => {
                let previous = converted
                    .last()
                    .and_then(Segment::end_point)
                    .ok_or(PathError::MissingPredecessor {
                        index,
                        command: raw.command,
                    })?;

                if raw.command == CommandKind::VerticalLine {
                    vec![previous.x, values[0]]
                } else {
                    vec![values[0], previous.y]
                }
            }
            _ => values,
        };

        trace!(index, command = %raw.command, ?values, "converted segment");
        converted.push(Segment::new(raw.command, values));
    }

    Ok(Path::new(converted))
}

fn parse_arguments(index: usize, raw: &RawSegment<'_>) -> Result<Vec<f64>, PathError> {
    let expected = raw.command.arity();
    let tokens: Vec<&str> = raw.payload.split_whitespace().collect();

    if tokens.len() != expected {
        return Err(PathError::ArityMismatch {
            index,
            command: raw.command,
            expected,
            actual: tokens.len(),
        });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| -> Result<f64, PathError> {
            let value = token
                .parse::<f64>()
                .map_err(|source| PathError::NumberParseError {
                    index,
                    position,
                    token: token.to_string(),
                    source,
                })?;

            // f64 parsing saturates to inf and accepts `inf`/`nan` literals
            if !value.is_finite() {
                return Err(PathError::NumberOutOfRange {
                    index,
                    position,
                    token: token.to_string(),
                });
            }

            Ok(value)
        })
        .collect()
}

/// Tokenize, validate and convert `input` in one go
pub fn parse(input: &str) -> Result<Path, PathError> {
    let tokens: Vec<Token> = tokenize(input).collect();
    debug!(count = tokens.len(), "tokenized path data");

    let segments = validate(&tokens)?;
    let path = convert(&segments)?;
    debug!(segments = path.len(), "converted path data");

    Ok(path)
}
