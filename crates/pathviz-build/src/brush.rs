//! Press-and-drag wall painting.

use pathviz_core::{CellKind, Grid, Point};

/// What a stroke does to the cells it passes over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrushMode {
    /// No stroke in progress.
    #[default]
    Idle,
    /// Turn empty cells into walls.
    Paint,
    /// Turn walls back into empty cells.
    Erase,
}

/// Wall brush driven by pointer events.
///
/// The cell under the initial press decides the stroke's mode: a wall
/// starts an erasing stroke, an empty cell a painting one. Endpoints are
/// never touched and pressing one starts no stroke.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Brush {
    mode: BrushMode,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    /// Start a stroke at `p`. Returns whether the grid changed.
    pub fn press(&mut self, grid: &mut Grid, p: Point) -> bool {
        self.mode = match grid.kind(p) {
            Some(CellKind::Wall) => BrushMode::Erase,
            Some(CellKind::Empty) => BrushMode::Paint,
            _ => BrushMode::Idle,
        };
        self.apply(grid, p)
    }

    /// Continue the current stroke over `p`. Returns whether the grid changed.
    pub fn drag(&mut self, grid: &mut Grid, p: Point) -> bool {
        self.apply(grid, p)
    }

    /// End the stroke.
    pub fn release(&mut self) {
        self.mode = BrushMode::Idle;
    }

    fn apply(&self, grid: &mut Grid, p: Point) -> bool {
        let (from, to) = match self.mode {
            BrushMode::Idle => return false,
            BrushMode::Paint => (CellKind::Empty, CellKind::Wall),
            BrushMode::Erase => (CellKind::Wall, CellKind::Empty),
        };
        if grid.kind(p) != Some(from) {
            return false;
        }
        grid.set_kind(p, to);
        true
    }
}
