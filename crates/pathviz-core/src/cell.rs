//! The [`Cell`] type: one grid position with its structural role and
//! per-run search bookkeeping.

use crate::geom::Point;

/// Structural role of a cell. Only configuration code changes it, and only
/// between runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

/// Transient annotation written by a search run.
///
/// Stored apart from [`CellKind`] so that resetting a run never loses the
/// start and end markers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitStatus {
    #[default]
    Unvisited,
    Visited,
    Path,
}

/// A single grid cell.
///
/// Equality compares coordinates only: two cells are the same cell iff they
/// sit at the same position, whatever their search state.
#[derive(Clone, Debug)]
pub struct Cell {
    coord: Point,
    kind: CellKind,
    status: VisitStatus,
    g: f64,
    h: f64,
    f: f64,
    predecessor: Option<Point>,
}

impl Cell {
    /// A fresh empty cell at `coord` with cleared search state.
    pub fn new(coord: Point) -> Self {
        Self {
            coord,
            kind: CellKind::Empty,
            status: VisitStatus::Unvisited,
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
            predecessor: None,
        }
    }

    #[inline]
    pub fn coord(&self) -> Point {
        self.coord
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    pub fn status(&self) -> VisitStatus {
        self.status
    }

    /// Best known cost from the start, `+inf` while unknown.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate to the end.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    #[inline]
    pub fn predecessor(&self) -> Option<Point> {
        self.predecessor
    }

    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.kind != CellKind::Wall
    }

    /// Whether the cell is the start or the end.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        matches!(self.kind, CellKind::Start | CellKind::End)
    }

    pub fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    pub fn set_status(&mut self, status: VisitStatus) {
        self.status = status;
    }

    /// Record a new best cost and the cell it was reached from. `f` follows.
    pub fn set_cost(&mut self, g: f64, predecessor: Option<Point>) {
        self.g = g;
        self.predecessor = predecessor;
        self.f = g + self.h;
    }

    /// Store the heuristic estimate. `f` follows.
    pub fn set_heuristic(&mut self, h: f64) {
        self.h = h;
        self.f = self.g + h;
    }

    /// Clear every transient field. `kind` is left alone.
    pub fn reset(&mut self) {
        self.status = VisitStatus::Unvisited;
        self.g = f64::INFINITY;
        self.h = 0.0;
        self.f = f64::INFINITY;
        self.predecessor = None;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_is_unknown() {
        let c = Cell::new(Point::new(1, 2));
        assert_eq!(c.kind(), CellKind::Empty);
        assert_eq!(c.status(), VisitStatus::Unvisited);
        assert!(c.g().is_infinite());
        assert!(c.f().is_infinite());
        assert_eq!(c.h(), 0.0);
        assert_eq!(c.predecessor(), None);
    }

    #[test]
    fn f_tracks_g_and_h() {
        let mut c = Cell::new(Point::new(0, 0));
        c.set_heuristic(3.0);
        assert!(c.f().is_infinite());
        c.set_cost(2.0, Some(Point::new(1, 0)));
        assert_eq!(c.f(), 5.0);
        c.set_heuristic(1.0);
        assert_eq!(c.f(), 3.0);
        assert_eq!(c.predecessor(), Some(Point::new(1, 0)));
    }

    #[test]
    fn reset_keeps_kind() {
        let mut c = Cell::new(Point::new(0, 0));
        c.set_kind(CellKind::Start);
        c.set_status(VisitStatus::Path);
        c.set_cost(4.0, Some(Point::new(0, 1)));
        c.reset();
        assert_eq!(c.kind(), CellKind::Start);
        assert_eq!(c.status(), VisitStatus::Unvisited);
        assert!(c.g().is_infinite());
        assert_eq!(c.predecessor(), None);
    }

    #[test]
    fn equality_is_by_coordinate() {
        let mut a = Cell::new(Point::new(2, 3));
        let b = Cell::new(Point::new(2, 3));
        a.set_kind(CellKind::Wall);
        a.set_cost(1.0, None);
        assert_eq!(a, b);
        assert_ne!(a, Cell::new(Point::new(3, 2)));
    }

    #[test]
    fn walls_are_not_walkable() {
        let mut c = Cell::new(Point::ZERO);
        assert!(c.is_walkable());
        c.set_kind(CellKind::Wall);
        assert!(!c.is_walkable());
        c.set_kind(CellKind::End);
        assert!(c.is_walkable());
        assert!(c.is_endpoint());
    }
}
