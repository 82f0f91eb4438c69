//! Random wall layouts.
//!
//! A maze is uniform noise (each cell walled with a probability drawn from
//! [`DENSITY`]) plus a few straight and L-shaped wall segments that give it
//! some structure.

use std::ops::Range as StdRange;

use pathviz_core::{CellKind, Grid, Point};
use rand::Rng;

use crate::layout::{Layout, clear_all};

/// Range the per-cell wall probability is drawn from.
pub const DENSITY: StdRange<f64> = 0.20..0.35;

/// Range the number of extra wall segments is drawn from.
pub const PATTERNS: StdRange<u32> = 2..5;

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fill a fresh grid for `layout` with random walls.
    ///
    /// Returns the grid and the number of walls in it. Start and end are
    /// never walled over, but nothing guarantees a path between them.
    pub fn random_maze(&mut self, layout: &Layout) -> (Grid, usize) {
        let mut grid = layout.build();
        let walls = self.fill(&mut grid, layout);
        (grid, walls)
    }

    /// Like [`random_maze`](Self::random_maze), reusing an existing grid of
    /// the layout's size.
    pub fn fill(&mut self, grid: &mut Grid, layout: &Layout) -> usize {
        clear_all(grid, layout);
        if grid.is_empty() {
            return 0;
        }

        let density = self.rng.random_range(DENSITY);
        for p in grid.bounds() {
            let r: f64 = self.rng.random();
            if r < density {
                wall(grid, p);
            }
        }

        for _ in 0..self.rng.random_range(PATTERNS) {
            match self.rng.random_range(0..3u32) {
                0 => self.horizontal_line(grid),
                1 => self.vertical_line(grid),
                _ => self.l_shape(grid),
            }
        }

        grid.count_kind(CellKind::Wall)
    }

    /// A line of 3 or more walls heading right from the left half.
    fn horizontal_line(&mut self, grid: &mut Grid) {
        let w = grid.width();
        let y = self.rng.random_range(0..grid.height());
        let x0 = self.rng.random_range(0..(w / 2).max(1));
        let len = self.rng.random_range(0..(w / 3).max(1)) + 3;
        for x in x0..(x0 + len).min(w) {
            wall(grid, Point::new(x, y));
        }
    }

    /// A line of 3 or more walls heading down from the top half.
    fn vertical_line(&mut self, grid: &mut Grid) {
        let h = grid.height();
        let x = self.rng.random_range(0..grid.width());
        let y0 = self.rng.random_range(0..(h / 2).max(1));
        let len = self.rng.random_range(0..(h / 3).max(1)) + 3;
        for y in y0..(y0 + len).min(h) {
            wall(grid, Point::new(x, y));
        }
    }

    /// Two arms of 3 to 6 walls, one right and one down, sharing a corner
    /// away from the edges.
    fn l_shape(&mut self, grid: &mut Grid) {
        let x = self.rng.random_range(0..(grid.width() - 5).max(1)) + 2;
        let y = self.rng.random_range(0..(grid.height() - 5).max(1)) + 2;
        let arm = self.rng.random_range(3..7);
        let corner = Point::new(x, y);
        for i in 0..arm {
            wall(grid, corner.shift(i, 0));
            wall(grid, corner.shift(0, i));
        }
    }
}

/// Wall `p` unless it is an endpoint. Out-of-bounds points are ignored.
fn wall(grid: &mut Grid, p: Point) {
    if grid.kind(p) == Some(CellKind::Empty) {
        grid.set_kind(p, CellKind::Wall);
    }
}
