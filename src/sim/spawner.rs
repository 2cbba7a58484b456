//! Spawn cadence
//!
//! An accumulating timer decides when to *attempt* a spawn; whether the
//! attempt succeeds depends on the spawn budget, which the caller checks.
//! Cadence is independent of frame rate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    /// Seconds between attempts
    pub interval: f32,
    /// Seconds accumulated since the last attempt
    pub elapsed: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Accumulate `dt`; returns true when an attempt is due
    ///
    /// The timer restarts from zero on every crossing, so at most one attempt
    /// happens per call.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_ceil_interval_over_dt() {
        // 500 ms at 16.7 ms steps -> every 30 steps
        let mut timer = SpawnTimer::new(0.5);
        let fired: Vec<usize> = (1..=120).filter(|_| timer.tick(0.0167)).collect();
        assert_eq!(fired, vec![30, 60, 90, 120]);
    }

    #[test]
    fn test_fires_on_exact_interval() {
        // 500 ms at 125 ms steps -> every 4 steps
        let mut timer = SpawnTimer::new(0.5);
        let fired: Vec<usize> = (1..=16).filter(|_| timer.tick(0.125)).collect();
        assert_eq!(fired, vec![4, 8, 12, 16]);
    }

    #[test]
    fn test_large_dt_fires_once() {
        let mut timer = SpawnTimer::new(0.1);
        assert!(timer.tick(5.0));
        assert_eq!(timer.elapsed, 0.0);
        assert!(!timer.tick(0.05));
    }
}
