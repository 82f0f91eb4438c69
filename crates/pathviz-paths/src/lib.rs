//! Animated shortest-path search on a [`Grid`](pathviz_core::Grid).
//!
//! Six interchangeable algorithms share one cost model (unit steps, cardinal
//! moves only) and report through the same [`RunResult`]:
//!
//! | Algorithm | Frontier | Ordering | Optimal |
//! |---|---|---|---|
//! | [`Algorithm::AStar`] | priority | `g + h` | yes |
//! | [`Algorithm::Dijkstra`] | priority | `g` | yes |
//! | [`Algorithm::Bfs`] | FIFO | insertion | yes |
//! | [`Algorithm::Dfs`] | LIFO | insertion | no |
//! | [`Algorithm::GreedyBestFirst`] | priority | `h` | no |
//! | [`Algorithm::BellmanFord`] | re-entry queue (SPFA) | none | yes |
//!
//! `h` is the Manhattan distance to the end. Equal keys pop in insertion
//! order, so a given grid and algorithm always produce the same run.
//!
//! Every run writes its trace into the grid's cells (visited marks, costs,
//! predecessors, path marks) and reports each visible change to a
//! [`RenderSink`], pausing for the configured step delay after each one.
//!
//! ```
//! use pathviz_core::Grid;
//! use pathviz_paths::{find_path, Algorithm};
//!
//! let mut grid = Grid::parse("S.#\n..E").unwrap();
//! let result = find_path(Algorithm::AStar, &mut grid).unwrap();
//! assert!(result.success());
//! assert_eq!(result.path_length(), 3);
//! ```

mod algorithm;
mod config;
mod distance;
mod engine;
mod frontier;
mod reconstruct;
mod result;
mod sink;
mod spfa;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use config::{DEFAULT_SPEED, MAX_SPEED, SearchConfig, delay_for_speed};
pub use distance::manhattan;
pub use engine::{SearchEngine, find_path, run};
pub use reconstruct::{path, reconstruct};
pub use result::RunResult;
pub use sink::{NoopSink, RenderSink};
