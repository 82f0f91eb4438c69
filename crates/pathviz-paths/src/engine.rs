//! The search engine: validation, run reset and the shared traversal used by
//! every frontier-driven algorithm.

use std::time::Duration;

use pathviz_core::{ConfigError, Endpoints, Grid, Point};

use crate::algorithm::{Algorithm, Discipline};
use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::reconstruct::reconstruct_traced;
use crate::result::RunResult;
use crate::sink::{NoopSink, RenderSink, Trace};
use crate::spfa;

/// Cost of one step between adjacent cells.
pub(crate) const STEP_COST: f64 = 1.0;

/// Run `algorithm` on `grid` from its start cell to its end cell.
///
/// The grid is validated first; on a [`ConfigError`] nothing is modified.
/// Otherwise every cell's transient state is reset and the search runs to
/// completion, calling `sink` after each visible change and then sleeping
/// for `step_delay`. Running out of frontier is reported as
/// `Ok(RunResult { success: false, .. })`.
pub fn run<S: RenderSink + ?Sized>(
    algorithm: Algorithm,
    grid: &mut Grid,
    sink: &mut S,
    step_delay: Duration,
) -> Result<RunResult, ConfigError> {
    let ends = grid.validate()?;
    grid.reset_run();
    log::debug!(
        "{algorithm}: searching {}x{} grid from {} to {}",
        grid.width(),
        grid.height(),
        ends.start,
        ends.end
    );

    let mut trace = Trace::new(sink, step_delay);
    let result = match algorithm {
        Algorithm::BellmanFord => spfa::search(grid, ends, &mut trace),
        _ => traverse(algorithm, grid, ends, &mut trace),
    };

    log::debug!("{algorithm}: {result}");
    Ok(result)
}

/// Run `algorithm` without notifications or pacing.
pub fn find_path(algorithm: Algorithm, grid: &mut Grid) -> Result<RunResult, ConfigError> {
    run(algorithm, grid, &mut NoopSink, Duration::ZERO)
}

/// A configured search engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Run the configured algorithm. See [`run`].
    pub fn run<S: RenderSink + ?Sized>(
        &self,
        grid: &mut Grid,
        sink: &mut S,
    ) -> Result<RunResult, ConfigError> {
        run(self.config.algorithm, grid, sink, self.config.step_delay)
    }
}

/// Shared frontier-driven traversal.
///
/// Pops per the algorithm's discipline. The end stops the search; any other
/// cell is finalized, marked visited and expanded. A neighbor is accepted
/// when the algorithm relaxes and the step improves its cost, or when it has
/// never been discovered. Priority frontiers may hold stale duplicates, which are
/// skipped once their cell is finalized.
fn traverse<S: RenderSink + ?Sized>(
    algorithm: Algorithm,
    grid: &mut Grid,
    ends: Endpoints,
    trace: &mut Trace<'_, S>,
) -> RunResult {
    let discipline = algorithm.discipline();
    let heuristic = |p: Point| f64::from(manhattan(p, ends.end));
    let mut closed = vec![false; grid.len()];
    let mut frontier = Frontier::new(discipline);
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    if let Some(start) = grid.cell_mut(ends.start) {
        if algorithm.uses_heuristic() {
            start.set_heuristic(heuristic(ends.start));
        }
        start.set_cost(0.0, None);
        frontier.push(ends.start, algorithm.key(start));
    }

    while let Some(p) = frontier.pop() {
        let Some(ci) = grid.index(p) else {
            continue;
        };
        if closed[ci] {
            continue;
        }
        if p == ends.end {
            let length = reconstruct_traced(grid, ends.end, trace);
            return RunResult::found(trace.nodes_visited(), length);
        }
        closed[ci] = true;
        log::trace!("{algorithm}: pop {p}, {} in frontier", frontier.len());
        trace.visit(grid, p);

        let current_g = grid.cell(p).map_or(f64::INFINITY, |c| c.g());
        nbuf.clear();
        nbuf.extend(grid.neighbors(p));
        if discipline == Discipline::Lifo {
            // Pushed in reverse so the first direction is popped first.
            nbuf.reverse();
        }

        for &np in &nbuf {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if closed[ni] || !grid.is_walkable(np) {
                continue;
            }
            let Some(n) = grid.cell_mut(np) else {
                continue;
            };
            let tentative_g = current_g + STEP_COST;
            let accept = if algorithm.relaxes() {
                tentative_g < n.g()
            } else {
                n.g().is_infinite()
            };
            if !accept {
                continue;
            }
            if algorithm.uses_heuristic() {
                n.set_heuristic(heuristic(np));
            }
            n.set_cost(tentative_g, Some(p));
            frontier.push(np, algorithm.key(n));
        }
    }

    RunResult::not_found(trace.nodes_visited())
}
