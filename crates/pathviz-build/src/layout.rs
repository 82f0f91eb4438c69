//! Grid dimensions and endpoint placement, plus the two reset operations.

use pathviz_core::{CellKind, Grid, Point};

/// Side length of the default square grid.
pub const DEFAULT_SIZE: i32 = 30;

/// Distance of the default endpoints from their corners.
const ENDPOINT_INSET: i32 = 5;

/// Grid size and where the start and end go on a fresh grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub end: Point,
}

impl Default for Layout {
    fn default() -> Self {
        Self::square(DEFAULT_SIZE)
    }
}

impl Layout {
    /// A `size`×`size` layout with the start five cells in from the top-left
    /// corner and the end six in from the bottom-right one. Small sizes pull
    /// both endpoints back inside the grid, keeping them on distinct cells
    /// whenever the grid has more than one.
    pub fn square(size: i32) -> Self {
        let size = size.max(1);
        let s = ENDPOINT_INSET.min(size - 1);
        let mut e = (size - ENDPOINT_INSET - 1).clamp(0, size - 1);
        if e == s {
            e = if s + 1 < size { s + 1 } else { 0 };
        }
        Self {
            width: size,
            height: size,
            start: Point::new(s, s),
            end: Point::new(e, e),
        }
    }

    /// A fresh grid with only the start and end placed.
    pub fn build(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        self.place_endpoints(&mut grid);
        grid
    }

    fn place_endpoints(&self, grid: &mut Grid) {
        grid.set_kind(self.start, CellKind::Start);
        grid.set_kind(self.end, CellKind::End);
    }
}

/// Wipe the annotations of the last run, keeping walls and endpoints.
pub fn clear_path(grid: &mut Grid) {
    grid.reset_run();
}

/// Remove every wall and endpoint, then put the layout's start and end back.
pub fn clear_all(grid: &mut Grid, layout: &Layout) {
    for p in grid.bounds() {
        grid.set_kind(p, CellKind::Empty);
    }
    grid.reset_run();
    layout.place_endpoints(grid);
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_round_trip() {
        let l = Layout::square(12);
        let json = serde_json::to_string(&l).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(l, back);
    }
}
