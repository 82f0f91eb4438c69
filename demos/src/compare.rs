//! Headless side-by-side runs of every algorithm.

use std::fmt;
use std::time::{Duration, Instant};

use pathviz_core::{ConfigError, Grid};
use pathviz_paths::{Algorithm, RunResult, find_path};

/// One algorithm's outcome on the shared grid.
#[derive(Copy, Clone, Debug)]
pub struct Row {
    pub algorithm: Algorithm,
    pub result: RunResult,
    pub elapsed: Duration,
}

/// Run every algorithm on its own copy of `grid`.
pub fn compare(grid: &Grid) -> Result<Vec<Row>, ConfigError> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut scratch = grid.clone();
            let started = Instant::now();
            let result = find_path(algorithm, &mut scratch)?;
            let elapsed = started.elapsed();
            log::debug!("{algorithm} finished in {elapsed:?}");
            Ok(Row {
                algorithm,
                result,
                elapsed,
            })
        })
        .collect()
}

/// Fixed-width rendering of comparison rows.
pub struct Table<'a>(pub &'a [Row]);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<18} {:>5} {:>8} {:>6} {:>10}",
            "algorithm", "found", "visited", "length", "time"
        )?;
        for row in self.0 {
            let length = if row.result.success() {
                row.result.path_length().to_string()
            } else {
                "-".to_string()
            };
            writeln!(
                f,
                "{:<18} {:>5} {:>8} {:>6} {:>8}us",
                row.algorithm.name(),
                if row.result.success() { "yes" } else { "no" },
                row.result.nodes_visited(),
                length,
                row.elapsed.as_micros()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_every_algorithm() {
        let grid = Grid::parse("S.#..\n..#..\n....E").unwrap();
        let rows = compare(&grid).unwrap();
        assert_eq!(rows.len(), Algorithm::ALL.len());
        for row in &rows {
            assert!(row.result.success(), "{}", row.algorithm);
            if row.algorithm.is_optimal() {
                assert_eq!(row.result.path_length(), 6);
            }
        }
        // The input grid is left alone.
        assert_eq!(grid.to_ascii(), "S.#..\n..#..\n....E");
    }

    #[test]
    fn table_layout() {
        let grid = Grid::parse("S#E").unwrap();
        let rows = compare(&grid).unwrap();
        let text = Table(&rows).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("algorithm"));
        assert!(lines[1].starts_with("A*"));
        assert!(lines[6].starts_with("Bellman-Ford"));
        assert!(lines[1..].iter().all(|l| l.contains(" no ")));
    }

    #[test]
    fn config_error_propagates() {
        let grid = Grid::parse("S..").unwrap();
        assert_eq!(compare(&grid).unwrap_err(), ConfigError::MissingEnd);
    }
}
