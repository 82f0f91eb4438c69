//! Redraw notifications and step pacing.

use std::thread;
use std::time::Duration;

use pathviz_core::{Grid, Point, VisitStatus};

/// Receives a notification after every visible change a run makes to the
/// grid: a cell becoming visited, or a cell being marked as part of the path.
///
/// Calls arrive in mutation order. The engine does not wait for whatever
/// the sink starts (e.g. a repaint on another thread) to finish. The grid is
/// a read-only view of the state right after the change.
pub trait RenderSink {
    fn redraw(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> RenderSink for F {
    fn redraw(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// A sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl RenderSink for NoopSink {
    fn redraw(&mut self, _grid: &Grid) {}
}

/// Per-run notifier: applies a visible mutation, tells the sink, then
/// sleeps for the step delay.
pub(crate) struct Trace<'s, S: RenderSink + ?Sized> {
    sink: &'s mut S,
    step_delay: Duration,
    nodes_visited: usize,
}

impl<'s, S: RenderSink + ?Sized> Trace<'s, S> {
    pub(crate) fn new(sink: &'s mut S, step_delay: Duration) -> Self {
        Self {
            sink,
            step_delay,
            nodes_visited: 0,
        }
    }

    pub(crate) fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Mark `p` visited and count it. Start, end and already visited cells
    /// are left alone and produce no notification.
    pub(crate) fn visit(&mut self, grid: &mut Grid, p: Point) {
        let Some(cell) = grid.cell_mut(p) else {
            return;
        };
        if cell.is_endpoint() || cell.status() == VisitStatus::Visited {
            return;
        }
        cell.set_status(VisitStatus::Visited);
        self.nodes_visited += 1;
        log::trace!("visit {p} (#{})", self.nodes_visited);
        self.step(grid);
    }

    /// Mark `p` as part of the final path.
    pub(crate) fn mark_path(&mut self, grid: &mut Grid, p: Point) {
        grid.set_status(p, VisitStatus::Path);
        self.step(grid);
    }

    fn step(&mut self, grid: &Grid) {
        self.sink.redraw(grid);
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }
}
