use std::time::Duration;

use crate::algorithm::Algorithm;

/// Highest value on the speed scale; a run at this speed never sleeps.
pub const MAX_SPEED: u32 = 100;

/// Speed used when none is given.
pub const DEFAULT_SPEED: u32 = 80;

/// Which algorithm to run and how fast to animate it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Pause after each visible step.
    pub step_delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::with_speed(Algorithm::default(), DEFAULT_SPEED)
    }
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, step_delay: Duration) -> Self {
        Self {
            algorithm,
            step_delay,
        }
    }

    /// Configure from a 0–100 speed value, higher is faster. Values above
    /// [`MAX_SPEED`] are clamped.
    pub fn with_speed(algorithm: Algorithm, speed: u32) -> Self {
        Self::new(algorithm, delay_for_speed(speed))
    }

    /// No pacing at all, for headless runs.
    pub fn instant(algorithm: Algorithm) -> Self {
        Self::new(algorithm, Duration::ZERO)
    }
}

/// Step delay for a 0–100 speed value: `100 - speed` milliseconds.
pub fn delay_for_speed(speed: u32) -> Duration {
    Duration::from_millis(u64::from(MAX_SPEED - speed.min(MAX_SPEED)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_mapping() {
        assert_eq!(delay_for_speed(0), Duration::from_millis(100));
        assert_eq!(delay_for_speed(80), Duration::from_millis(20));
        assert_eq!(delay_for_speed(100), Duration::ZERO);
        assert_eq!(delay_for_speed(250), Duration::ZERO);
    }

    #[test]
    fn default_is_astar_at_20ms() {
        let c = SearchConfig::default();
        assert_eq!(c.algorithm, Algorithm::AStar);
        assert_eq!(c.step_delay, Duration::from_millis(20));
        assert_eq!(SearchConfig::instant(Algorithm::Dfs).step_delay, Duration::ZERO);
    }
}
