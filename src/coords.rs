//! Coordinate structure used to reference specific locations within parser input
#![allow(clippy::len_without_is_empty)]

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A [Coords] represents a single location within the parser input
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coords {
    /// The absolute byte offset
    pub absolute: usize,
    /// The row position (zero based)
    pub line: usize,
    /// The column position (zero based, in bytes)
    pub column: usize,
}

impl Coords {
    /// Derive a full set of coordinates for a byte offset within some input, by scanning the
    /// input up to that offset. Offsets past the end are clamped
    pub fn at(input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let prefix = &input[..offset];
        let line = prefix.iter().filter(|b| **b == b'\n').count();
        let column = match prefix.iter().rposition(|b| *b == b'\n') {
            Some(nl) => offset - nl - 1,
            None => offset,
        };
        Coords {
            absolute: offset,
            line,
            column,
        }
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[abs: {}, line: {}, column: {}]",
            self.absolute, self.line, self.column
        )
    }
}

impl Default for Coords {
    /// The default set of coordinates are positioned at the start of the first row
    fn default() -> Self {
        Coords {
            absolute: 0,
            line: 0,
            column: 0,
        }
    }
}

impl PartialOrd<Self> for Coords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coords {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

/// A [Span] represents a linear interval within the parser input, between two different [Coords].
/// The end is exclusive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start [Coords] for the span
    pub start: Coords,
    /// End [Coords] for the span
    pub end: Coords,
}

impl Span {
    /// Get the length of the span in bytes, minimum is 1
    pub fn len(&self) -> usize {
        match self.start.cmp(&self.end) {
            Ordering::Less => self.end.absolute - self.start.absolute,
            Ordering::Equal => 1,
            Ordering::Greater => self.start.absolute - self.end.absolute,
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "start: {}, end: {}, length: {}",
            self.start,
            self.end,
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Coords, Span};

    #[test]
    fn coords_should_track_lines_and_columns() {
        let input = b"[1,\n 2,\n  3]";
        let c = Coords::at(input, 10);
        assert_eq!(c.absolute, 10);
        assert_eq!(c.line, 2);
        assert_eq!(c.column, 2);
    }

    #[test]
    fn coords_should_clamp_to_input_length() {
        let c = Coords::at(b"abc", 99);
        assert_eq!(c.absolute, 3);
        assert_eq!(c.column, 3);
    }

    #[test]
    fn spans_should_have_a_minimum_length_of_one() {
        let input = b"0123456789";
        let s = Span {
            start: Coords::at(input, 4),
            end: Coords::at(input, 4),
        };
        assert_eq!(s.len(), 1);
        let s = Span {
            start: Coords::at(input, 4),
            end: Coords::at(input, 9),
        };
        assert_eq!(s.len(), 5);
    }
}
