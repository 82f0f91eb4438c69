//! The [`Grid`] type: a fixed-size 2D array of search [`Cell`]s.
//!
//! Cells are stored row-major in one flat buffer and live as long as the
//! grid. Configuration code writes [`CellKind`]s between runs; a search run
//! writes only the transient fields, after [`Grid::reset_run`].

use crate::cell::{Cell, CellKind, VisitStatus};
use crate::error::{ConfigError, GridParseError};
use crate::geom::{Point, Range};

/// The validated start and end of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub start: Point,
    pub end: Point,
}

/// A 2D grid of search cells.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell empty.
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: bounds.iter().map(Cell::new).collect(),
            bounds,
        }
    }

    /// Build a grid from an ASCII picture, one line per row.
    ///
    /// `.` or space is empty, `#` a wall, `S` the start and `E` the end.
    /// Leading and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, GridParseError> {
        let lines: Vec<&str> = s.trim_matches('\n').lines().collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(GridParseError::InconsistentWidth(width));
        }
        let mut grid = Grid::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = match ch {
                    '.' | ' ' => CellKind::Empty,
                    '#' => CellKind::Wall,
                    'S' => CellKind::Start,
                    'E' => CellKind::End,
                    _ => return Err(GridParseError::InvalidChar { ch, pos }),
                };
                grid.set_kind(pos, kind);
            }
        }
        Ok(grid)
    }

    /// Render the grid as ASCII, the inverse of [`parse`](Grid::parse) with
    /// run annotations on top: `o` for visited cells and `*` for path cells.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize);
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 && c.coord().x == 0 {
                out.push('\n');
            }
            let ch = match (c.kind(), c.status()) {
                (CellKind::Wall, _) => '#',
                (CellKind::Start, _) => 'S',
                (CellKind::End, _) => 'E',
                (CellKind::Empty, VisitStatus::Path) => '*',
                (CellKind::Empty, VisitStatus::Visited) => 'o',
                (CellKind::Empty, VisitStatus::Unvisited) => '.',
            };
            out.push(ch);
        }
        out
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.cell(p).map(Cell::kind)
    }

    pub fn status(&self, p: Point) -> Option<VisitStatus> {
        self.cell(p).map(Cell::status)
    }

    /// Set the structural kind at `p`. Does nothing if out of bounds.
    pub fn set_kind(&mut self, p: Point, kind: CellKind) {
        if let Some(c) = self.cell_mut(p) {
            c.set_kind(kind);
        }
    }

    /// Set the run annotation at `p`. Does nothing if out of bounds.
    pub fn set_status(&mut self, p: Point, status: VisitStatus) {
        if let Some(c) = self.cell_mut(p) {
            c.set_status(status);
        }
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_walkable)
    }

    /// In-bounds cardinal neighbours of `p`, in the order up, right, down,
    /// left. Walls are *not* filtered; check [`is_walkable`](Grid::is_walkable).
    pub fn neighbors(&self, p: Point) -> impl DoubleEndedIterator<Item = Point> + use<> {
        let bounds = self.bounds;
        p.neighbors_4().into_iter().filter(move |n| bounds.contains(*n))
    }

    /// Clear the transient search state of every cell. Kinds are untouched.
    pub fn reset_run(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Check that the grid has exactly one start and one end, at different
    /// positions, and return them.
    pub fn validate(&self) -> Result<Endpoints, ConfigError> {
        let starts: Vec<Point> = self.positions_of(CellKind::Start).collect();
        let ends: Vec<Point> = self.positions_of(CellKind::End).collect();
        let start = match starts.as_slice() {
            [] => return Err(ConfigError::MissingStart),
            [p] => *p,
            many => return Err(ConfigError::MultipleStarts(many.len())),
        };
        let end = match ends.as_slice() {
            [] => return Err(ConfigError::MissingEnd),
            [p] => *p,
            many => return Err(ConfigError::MultipleEnds(many.len())),
        };
        if start == end {
            return Err(ConfigError::SameEndpoints(start));
        }
        Ok(Endpoints { start, end })
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Positions of every cell with the given kind, row-major.
    pub fn positions_of(&self, kind: CellKind) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .filter(move |c| c.kind() == kind)
            .map(Cell::coord)
    }

    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn count_status(&self, status: VisitStatus) -> usize {
        self.cells.iter().filter(|c| c.status() == status).count()
    }

    /// Number of cells that are not walls.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walkable()).count()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 50);
        assert_eq!(g.cell(Point::new(9, 4)).map(Cell::coord), Some(Point::new(9, 4)));
        assert!(g.cell(Point::new(10, 4)).is_none());
        assert!(Grid::new(-3, 4).is_empty());
    }

    #[test]
    fn set_kind_out_of_bounds_is_ignored() {
        let mut g = Grid::new(3, 3);
        g.set_kind(Point::new(5, 5), CellKind::Wall);
        g.set_kind(Point::new(-1, 0), CellKind::Wall);
        assert_eq!(g.count_kind(CellKind::Wall), 0);
    }

    #[test]
    fn walkability() {
        let mut g = Grid::new(3, 3);
        g.set_kind(Point::new(1, 1), CellKind::Wall);
        assert!(!g.is_walkable(Point::new(1, 1)));
        assert!(g.is_walkable(Point::new(0, 0)));
        assert!(!g.is_walkable(Point::new(3, 0)));
        assert!(!g.is_walkable(Point::new(0, -1)));
        assert_eq!(g.count_walkable(), 8);
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let mut g = Grid::new(3, 3);
        g.set_kind(Point::new(1, 0), CellKind::Wall);
        let mid: Vec<_> = g.neighbors(Point::new(1, 1)).collect();
        // Walls are still listed.
        assert_eq!(
            mid,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );
        let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        let rev: Vec<_> = g.neighbors(Point::new(2, 2)).rev().collect();
        assert_eq!(rev, vec![Point::new(1, 2), Point::new(2, 1)]);
    }

    #[test]
    fn reset_run_clears_transient_state_only() {
        let mut g = Grid::parse("S.E").unwrap();
        let p = Point::new(1, 0);
        g.set_status(p, VisitStatus::Path);
        g.set_status(Point::new(0, 0), VisitStatus::Visited);
        if let Some(c) = g.cell_mut(p) {
            c.set_heuristic(1.0);
            c.set_cost(1.0, Some(Point::new(0, 0)));
        }
        g.reset_run();
        assert_eq!(g.count_status(VisitStatus::Unvisited), 3);
        let c = g.cell(p).unwrap();
        assert!(c.g().is_infinite());
        assert!(c.f().is_infinite());
        assert_eq!(c.h(), 0.0);
        assert_eq!(c.predecessor(), None);
        assert_eq!(g.kind(Point::new(0, 0)), Some(CellKind::Start));
        assert_eq!(g.kind(Point::new(2, 0)), Some(CellKind::End));
    }

    #[test]
    fn validate_ok() {
        let g = Grid::parse("S..\n.#.\n..E").unwrap();
        assert_eq!(
            g.validate(),
            Ok(Endpoints {
                start: Point::new(0, 0),
                end: Point::new(2, 2),
            })
        );
    }

    #[test]
    fn validate_errors() {
        assert_eq!(Grid::parse("...E").unwrap().validate(), Err(ConfigError::MissingStart));
        assert_eq!(Grid::parse("S...").unwrap().validate(), Err(ConfigError::MissingEnd));
        assert_eq!(
            Grid::parse("S.SE").unwrap().validate(),
            Err(ConfigError::MultipleStarts(2))
        );
        assert_eq!(
            Grid::parse("SEEE").unwrap().validate(),
            Err(ConfigError::MultipleEnds(3))
        );
        assert_eq!(Grid::new(0, 0).validate(), Err(ConfigError::MissingStart));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Grid::parse("S..\n.E").unwrap_err(),
            GridParseError::InconsistentWidth(3)
        );
        assert_eq!(
            Grid::parse("S.x\n..E").unwrap_err(),
            GridParseError::InvalidChar {
                ch: 'x',
                pos: Point::new(2, 0),
            }
        );
    }

    #[test]
    fn ascii_round_trip_with_annotations() {
        let src = "S.#\n..E";
        let mut g = Grid::parse(src).unwrap();
        assert_eq!(g.to_ascii(), src);
        g.set_status(Point::new(1, 0), VisitStatus::Visited);
        g.set_status(Point::new(1, 1), VisitStatus::Path);
        assert_eq!(g.to_ascii(), "So#\n.*E");
    }
}
