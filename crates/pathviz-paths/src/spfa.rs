//! Queue-driven Bellman-Ford relaxation (SPFA).
//!
//! Unlike the frontier traversals, a cell is never final when popped: any
//! cell whose cost improves re-enters the queue. The queue is drained
//! completely before the end is checked.

use pathviz_core::{Endpoints, Grid};

use crate::algorithm::Algorithm;
use crate::engine::STEP_COST;
use crate::frontier::Frontier;
use crate::reconstruct::reconstruct_traced;
use crate::result::RunResult;
use crate::sink::{RenderSink, Trace};

pub(crate) fn search<S: RenderSink + ?Sized>(
    grid: &mut Grid,
    ends: Endpoints,
    trace: &mut Trace<'_, S>,
) -> RunResult {
    let limit = grid.len();
    search_with_limit(grid, ends, trace, limit)
}

/// SPFA with a cap on how often one cell may re-enter the queue. Exceeding
/// it means a negative cycle is being relaxed forever; the run then stops
/// and reports failure.
fn search_with_limit<S: RenderSink + ?Sized>(
    grid: &mut Grid,
    ends: Endpoints,
    trace: &mut Trace<'_, S>,
    limit: usize,
) -> RunResult {
    let mut queue = Frontier::new(Algorithm::BellmanFord.discipline());
    let mut in_queue = vec![false; grid.len()];
    let mut enqueued = vec![0usize; grid.len()];
    let mut nbuf = Vec::with_capacity(4);

    let Some(si) = grid.index(ends.start) else {
        return RunResult::not_found(0);
    };
    if let Some(start) = grid.cell_mut(ends.start) {
        start.set_cost(0.0, None);
    }
    queue.push(ends.start, 0.0);
    in_queue[si] = true;

    while let Some(u) = queue.pop() {
        let Some(ui) = grid.index(u) else {
            continue;
        };
        in_queue[ui] = false;
        trace.visit(grid, u);

        let g = grid.cell(u).map_or(f64::INFINITY, |c| c.g());
        if g.is_infinite() {
            continue;
        }

        nbuf.clear();
        nbuf.extend(grid.neighbors(u));
        for &v in &nbuf {
            if !grid.is_walkable(v) {
                continue;
            }
            let Some(vi) = grid.index(v) else {
                continue;
            };
            let Some(cell) = grid.cell_mut(v) else {
                continue;
            };
            let candidate = g + STEP_COST;
            if candidate >= cell.g() {
                continue;
            }
            cell.set_cost(candidate, Some(u));
            log::trace!("relax {v} to {candidate} via {u}");
            if in_queue[vi] {
                continue;
            }
            enqueued[vi] += 1;
            if enqueued[vi] > limit {
                log::warn!(
                    "{}: {v} re-queued {} times, aborting on suspected negative cycle",
                    Algorithm::BellmanFord,
                    enqueued[vi]
                );
                return RunResult::not_found(trace.nodes_visited());
            }
            queue.push(v, 0.0);
            in_queue[vi] = true;
        }
    }

    let reached = grid.cell(ends.end).is_some_and(|c| c.g().is_finite());
    if !reached {
        return RunResult::not_found(trace.nodes_visited());
    }
    let length = reconstruct_traced(grid, ends.end, trace);
    RunResult::found(trace.nodes_visited(), length)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::find_path;
    use crate::sink::NoopSink;
    use pathviz_core::{Point, VisitStatus};

    #[test]
    fn drains_the_whole_component() {
        // The end is two steps away but every reachable cell is processed.
        let mut grid = Grid::parse("
S.E
...
...").unwrap();
        let r = find_path(Algorithm::BellmanFord, &mut grid).unwrap();
        assert_eq!(r, RunResult::found(7, 2));
        assert_eq!(grid.count_status(VisitStatus::Visited), 6);
        assert_eq!(grid.status(Point::new(1, 0)), Some(VisitStatus::Path));
        assert_eq!(grid.cell(Point::new(2, 2)).unwrap().g(), 4.0);
    }

    #[test]
    fn unreachable_end() {
        let mut grid = Grid::parse("S#E").unwrap();
        let r = find_path(Algorithm::BellmanFord, &mut grid).unwrap();
        assert_eq!(r, RunResult::not_found(0));
    }

    #[test]
    fn requeue_cap_aborts() {
        let mut grid = Grid::parse("S..E").unwrap();
        let ends = grid.validate().unwrap();
        let mut sink = NoopSink;
        let mut trace = Trace::new(&mut sink, Duration::ZERO);
        let r = search_with_limit(&mut grid, ends, &mut trace, 0);
        assert!(!r.success());
        assert_eq!(r.path_length(), 0);
    }
}
