//! The closed set of search algorithms and how each one drives the shared
//! traversal.

use std::fmt;
use std::str::FromStr;

use pathviz_core::Cell;

/// Search algorithm selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    Bfs,
    Dfs,
    GreedyBestFirst,
    /// Queue-driven Bellman-Ford relaxation (SPFA).
    BellmanFord,
}

/// How the frontier hands out the next cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Discipline {
    /// Smallest ordering key first, ties in insertion order.
    Priority,
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::GreedyBestFirst,
        Algorithm::BellmanFord,
    ];

    /// Human-readable label.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::GreedyBestFirst => "Greedy Best-First",
            Algorithm::BellmanFord => "Bellman-Ford",
        }
    }

    /// Whether the reported path length is always the shortest one on a
    /// unit-cost grid.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs | Algorithm::GreedyBestFirst)
    }

    /// Whether cells get a Manhattan estimate `h` toward the end.
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Algorithm::AStar | Algorithm::GreedyBestFirst)
    }

    /// Whether a discovered cell may be improved later (`g + 1 < g'`), as
    /// opposed to keeping the cost from its first discovery.
    pub const fn relaxes(self) -> bool {
        matches!(
            self,
            Algorithm::AStar | Algorithm::Dijkstra | Algorithm::BellmanFord
        )
    }

    pub(crate) const fn discipline(self) -> Discipline {
        match self {
            Algorithm::AStar | Algorithm::Dijkstra | Algorithm::GreedyBestFirst => {
                Discipline::Priority
            }
            Algorithm::Bfs | Algorithm::BellmanFord => Discipline::Fifo,
            Algorithm::Dfs => Discipline::Lifo,
        }
    }

    /// Priority-queue ordering key. Queue and stack disciplines ignore it.
    pub(crate) fn key(self, cell: &Cell) -> f64 {
        match self {
            Algorithm::AStar => cell.f(),
            Algorithm::Dijkstra => cell.g(),
            Algorithm::GreedyBestFirst => cell.h(),
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::BellmanFord => 0.0,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected one of: astar, dijkstra, bfs, dfs, greedy, bellman-ford)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts display labels and short aliases, ignoring case, spaces,
    /// `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match norm.as_str() {
            "a*" | "astar" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" | "breadthfirst" => Ok(Algorithm::Bfs),
            "dfs" | "depthfirst" => Ok(Algorithm::Dfs),
            "greedy" | "greedybestfirst" | "bestfirst" => Ok(Algorithm::GreedyBestFirst),
            "bellmanford" | "spfa" => Ok(Algorithm::BellmanFord),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
