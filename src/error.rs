//! Errors produced while parsing path data

use std::num::ParseFloatError;

use thiserror::Error;

use crate::format::CommandKind;

/// Reasons a path string is rejected. Segment indices count from the
/// leading `M`, which is segment 0.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum PathError {
    /// The input holds fewer than three command segments
    #[error("expected at least 3 segments like `M1 2 C1 2 3 4 5 6Z`, got {count}")]
    TooFewSegments {
        /// Number of segments found
        count: usize,
    },

    /// A token does not begin with a command letter
    #[error("segment {index} does not start with a command letter")]
    MalformedMatch {
        /// Segment index
        index: usize,
    },

    /// The path does not start with `M` or does not end with `Z`
    #[error("path must start with M and end with Z, found {first} ... {last}")]
    BoundaryCommandInvalid {
        /// Command of the first segment
        first: CommandKind,
        /// Command of the last segment
        last: CommandKind,
    },

    /// An `M` or `Z` between the first and last segment
    #[error("segment {index}: expected one of C, L, V or H, found {command}")]
    InvalidMiddleCommand {
        /// Segment index
        index: usize,
        /// The offending command
        command: CommandKind,
    },

    /// A command has the wrong number of arguments
    #[error("segment {index}: {command} expects {expected} numbers, got {actual}")]
    ArityMismatch {
        /// Segment index
        index: usize,
        /// Command of the segment
        command: CommandKind,
        /// Arguments the command takes
        expected: usize,
        /// Arguments found
        actual: usize,
    },

    /// An argument is not a decimal or exponent number
    #[error("segment {index}: argument {position} `{token}` is not a number")]
    NumberParseError {
        /// Segment index
        index: usize,
        /// Argument position within the segment
        position: usize,
        /// The argument text
        token: String,
        /// Why parsing failed
        #[source]
        source: ParseFloatError,
    },

    /// An argument parses but is not finite, e.g. `1e400` or `nan`
    #[error("segment {index}: argument {position} `{token}` is out of range")]
    NumberOutOfRange {
        /// Segment index
        index: usize,
        /// Argument position within the segment
        position: usize,
        /// The argument text
        token: String,
    },

    /// A `V` or `H` with no earlier point to take the other axis from
    #[error("segment {index}: {command} has no previous point to extend")]
    MissingPredecessor {
        /// Segment index
        index: usize,
        /// The shorthand command
        command: CommandKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_segment() {
        let err = PathError::ArityMismatch {
            index: 1,
            command: CommandKind::CubicBezier,
            expected: 6,
            actual: 5,
        };
        assert_eq!(err.to_string(), "segment 1: C expects 6 numbers, got 5");

        let err = PathError::BoundaryCommandInvalid {
            first: CommandKind::Line,
            last: CommandKind::ClosePath,
        };
        assert_eq!(
            err.to_string(),
            "path must start with M and end with Z, found L ... Z"
        );
    }
}
