use std::fmt;

/// Outcome of one search run.
///
/// "No path" is a normal outcome (`success() == false`), not an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    success: bool,
    nodes_visited: usize,
    path_length: usize,
}

impl RunResult {
    /// The end was reached through a path of `path_length` edges.
    pub const fn found(nodes_visited: usize, path_length: usize) -> Self {
        Self {
            success: true,
            nodes_visited,
            path_length,
        }
    }

    /// The frontier ran dry before the end was reached.
    pub const fn not_found(nodes_visited: usize) -> Self {
        Self {
            success: false,
            nodes_visited,
            path_length: 0,
        }
    }

    #[inline]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Cells marked visited during the run, start and end excluded.
    #[inline]
    pub const fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Edges from start to end along the reconstructed path, 0 on failure.
    #[inline]
    pub const fn path_length(&self) -> usize {
        self.path_length
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(
                f,
                "Path found! Nodes visited: {}, Path length: {}",
                self.nodes_visited, self.path_length
            )
        } else {
            write!(f, "No path found. Nodes visited: {}", self.nodes_visited)
        }
    }
}
