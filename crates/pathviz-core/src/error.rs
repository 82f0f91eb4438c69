//! Grid configuration errors.

use std::fmt;

use crate::geom::Point;

/// Why a grid cannot be searched.
///
/// Raised by [`Grid::validate`](crate::Grid::validate) before a run touches
/// any cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No cell has kind `Start`.
    MissingStart,
    /// No cell has kind `End`.
    MissingEnd,
    /// More than one `Start` cell.
    MultipleStarts(usize),
    /// More than one `End` cell.
    MultipleEnds(usize),
    /// Start and end resolve to the same position.
    SameEndpoints(Point),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "grid has no start cell"),
            Self::MissingEnd => write!(f, "grid has no end cell"),
            Self::MultipleStarts(n) => write!(f, "grid has {n} start cells, expected exactly one"),
            Self::MultipleEnds(n) => write!(f, "grid has {n} end cells, expected exactly one"),
            Self::SameEndpoints(p) => write!(f, "start and end are both at {p}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors from [`Grid::parse`](crate::Grid::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// Rows differ in length; carries the width of the first row.
    InconsistentWidth(usize),
    /// A character outside `.`, space, `#`, `S`, `E`.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth(w) => {
                write!(f, "grid rows have inconsistent widths, expected {w}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid grid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}
