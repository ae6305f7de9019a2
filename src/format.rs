//! Types describing path data at every stage of the pipeline

use std::fmt;

pub use kurbo::Point;

/// The path commands understood by the parser
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommandKind {
    /// `M x y`
    Move,
    /// `C x1 y1 x2 y2 x y`
    CubicBezier,
    /// `L x y`
    Line,
    /// `V y`
    VerticalLine,
    /// `H x`
    HorizontalLine,
    /// `Z`
    ClosePath,
}

impl CommandKind {
    /// Every command, in no particular order
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Move,
        CommandKind::CubicBezier,
        CommandKind::Line,
        CommandKind::VerticalLine,
        CommandKind::HorizontalLine,
        CommandKind::ClosePath,
    ];

    /// Look up the command for an (uppercase, absolute) command letter
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(CommandKind::Move),
            'C' => Some(CommandKind::CubicBezier),
            'L' => Some(CommandKind::Line),
            'V' => Some(CommandKind::VerticalLine),
            'H' => Some(CommandKind::HorizontalLine),
            'Z' => Some(CommandKind::ClosePath),
            _ => None,
        }
    }

    /// The letter that introduces the command in path data
    pub fn letter(self) -> char {
        match self {
            CommandKind::Move => 'M',
            CommandKind::CubicBezier => 'C',
            CommandKind::Line => 'L',
            CommandKind::VerticalLine => 'V',
            CommandKind::HorizontalLine => 'H',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// Number of numeric arguments the command takes in the source text
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Move => 2,
            CommandKind::CubicBezier => 6,
            CommandKind::Line => 2,
            CommandKind::VerticalLine => 1,
            CommandKind::HorizontalLine => 1,
            CommandKind::ClosePath => 0,
        }
    }

    /// Commands allowed between the leading move and the trailing close
    pub fn is_drawing(self) -> bool {
        matches!(
            self,
            CommandKind::CubicBezier
                | CommandKind::Line
                | CommandKind::VerticalLine
                | CommandKind::HorizontalLine
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A validated command together with its unparsed arguments
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct RawSegment<'a> {
    /// The command named by the segment's letter
    pub command: CommandKind,
    /// Everything after the command letter up to the next command
    pub payload: &'a str,
    /// Byte offset of the command letter in the input
    pub offset: usize,
}

/// One command with its arguments expanded to absolute values.
///
/// Shorthand lines are stored with both axes, so `values` always ends in a
/// full on-curve point unless it is empty.
#[derive(Debug, PartialEq, Clone)]
pub struct Segment {
    /// Command the values came from
    pub command: CommandKind,
    /// Absolute argument values, x before y
    pub values: Vec<f64>,
}

impl Segment {
    /// Create a segment from already expanded values
    pub fn new(command: CommandKind, values: Vec<f64>) -> Self {
        Self { command, values }
    }

    /// The point the pen ends up at after this segment
    pub fn end_point(&self) -> Option<Point> {
        match self.values.as_slice() {
            [.., x, y] => Some(Point::new(*x, *y)),
            _ => None,
        }
    }
}

/// The converted form of a whole path, one [`Segment`] per command except
/// the closing one
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Path {
    /// Segments in input order
    pub segments: Vec<Segment>,
}

impl Path {
    /// Create a path from converted segments
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Round every value to the nearest integer, ties away from zero
    pub fn round(&mut self) {
        for value in self.segments.iter_mut().flat_map(|s| s.values.iter_mut()) {
            // adding zero turns -0.0 into 0.0
            *value = value.round() + 0.0;
        }
    }

    /// [`Path::round`] by value
    pub fn rounded(mut self) -> Self {
        self.round();
        self
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for command in CommandKind::ALL {
            assert_eq!(CommandKind::from_letter(command.letter()), Some(command));
        }

        assert_eq!(CommandKind::from_letter('m'), None);
        assert_eq!(CommandKind::from_letter('Q'), None);
    }

    #[test]
    fn only_curves_and_lines_are_drawing() {
        let drawing: Vec<_> = CommandKind::ALL
            .iter()
            .filter(|c| c.is_drawing())
            .map(|c| c.letter())
            .collect();

        assert_eq!(drawing, vec!['C', 'L', 'V', 'H']);
    }

    #[test]
    fn end_point_is_last_pair() {
        let cubic = Segment::new(CommandKind::CubicBezier, vec![1., 2., 3., 4., 5., 6.]);
        assert_eq!(cubic.end_point(), Some(Point::new(5., 6.)));

        let close = Segment::new(CommandKind::ClosePath, vec![]);
        assert_eq!(close.end_point(), None);
    }

    #[test]
    fn round_ties_away_from_zero() {
        let mut path = Path::new(vec![Segment::new(
            CommandKind::CubicBezier,
            vec![0.5, -0.5, 1.49, -2.5, 77.6142, -2.18557e-06],
        )]);
        path.round();

        assert_eq!(path.segments[0].values, vec![1., -1., 1., -3., 78., 0.]);
        assert!(path.segments[0].values[5].is_sign_positive());
    }

    #[test]
    fn rounding_integers_is_a_no_op() {
        let path = Path::new(vec![
            Segment::new(CommandKind::Move, vec![1., -2.]),
            Segment::new(CommandKind::Line, vec![300., 0.]),
        ]);

        assert_eq!(path.clone().rounded(), path);
        assert_eq!(path.clone().rounded().rounded(), path);
    }
}
