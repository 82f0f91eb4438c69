//! Path reconstruction from predecessor links.

use std::time::Duration;

use pathviz_core::{Cell, CellKind, Grid, Point};

use crate::sink::{RenderSink, Trace};

/// Walk predecessor links back from `end`, marking every cell strictly
/// between start and end as [`Path`](pathviz_core::VisitStatus::Path) and
/// notifying `sink` once per marked cell.
///
/// Returns the number of edges walked. The caller must only call this when
/// `end` has a predecessor, i.e. after a successful run; otherwise 0 is
/// returned and nothing is marked.
pub fn reconstruct<S: RenderSink + ?Sized>(
    grid: &mut Grid,
    end: Point,
    sink: &mut S,
    step_delay: Duration,
) -> usize {
    let mut trace = Trace::new(sink, step_delay);
    reconstruct_traced(grid, end, &mut trace)
}

pub(crate) fn reconstruct_traced<S: RenderSink + ?Sized>(
    grid: &mut Grid,
    end: Point,
    trace: &mut Trace<'_, S>,
) -> usize {
    let mut length = 0;
    let mut cur = grid.cell(end).and_then(Cell::predecessor);
    // Predecessors form a tree rooted at the start, so a walk is never
    // longer than the grid.
    for _ in 0..grid.len() {
        let Some(p) = cur else {
            break;
        };
        length += 1;
        let Some(cell) = grid.cell(p) else {
            break;
        };
        if cell.kind() == CellKind::Start {
            break;
        }
        cur = cell.predecessor();
        trace.mark_path(grid, p);
    }
    length
}

/// The full chain of positions from the start to `end`, both included,
/// following the predecessor links of the last run. Does not modify the
/// grid.
///
/// Returns just `[end]` if `end` has no predecessor.
pub fn path(grid: &Grid, end: Point) -> Vec<Point> {
    let mut out = vec![end];
    let mut cur = grid.cell(end).and_then(Cell::predecessor);
    while let Some(p) = cur {
        if out.len() > grid.len() {
            break;
        }
        out.push(p);
        cur = grid.cell(p).and_then(Cell::predecessor);
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NoopSink;
    use pathviz_core::VisitStatus;

    /// Chain predecessors along `pts`, each pointing at the one before it.
    fn link(grid: &mut Grid, pts: &[Point]) {
        for (i, w) in pts.windows(2).enumerate() {
            if let Some(c) = grid.cell_mut(w[1]) {
                c.set_cost((i + 1) as f64, Some(w[0]));
            }
        }
    }

    #[test]
    fn marks_interior_and_counts_edges() {
        let mut grid = Grid::parse("S..\n..E").unwrap();
        let chain = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
        ];
        link(&mut grid, &chain);
        let mut marks = 0;
        let mut sink = |_: &Grid| marks += 1;
        let len = reconstruct(&mut grid, Point::new(2, 1), &mut sink, Duration::ZERO);
        assert_eq!(len, 3);
        assert_eq!(marks, 2);
        assert_eq!(grid.to_ascii(), "S**\n..E");
        assert_eq!(grid.status(Point::new(0, 0)), Some(VisitStatus::Unvisited));
        assert_eq!(path(&grid, Point::new(2, 1)), chain.to_vec());
    }

    #[test]
    fn adjacent_endpoints() {
        let mut grid = Grid::parse("SE").unwrap();
        link(&mut grid, &[Point::new(0, 0), Point::new(1, 0)]);
        let len = reconstruct(&mut grid, Point::new(1, 0), &mut NoopSink, Duration::ZERO);
        assert_eq!(len, 1);
        assert_eq!(grid.count_status(VisitStatus::Path), 0);
    }

    #[test]
    fn no_predecessor() {
        let mut grid = Grid::parse("S.E").unwrap();
        assert_eq!(
            reconstruct(&mut grid, Point::new(2, 0), &mut NoopSink, Duration::ZERO),
            0
        );
        assert_eq!(path(&grid, Point::new(2, 0)), vec![Point::new(2, 0)]);
    }
}
