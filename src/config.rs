//! Simulation configuration.
//!
//! All fields have defaults, so a partial JSON document (or none at all)
//! yields a usable configuration.
//!
//! # Example
//!
//! ```
//! use rr_sched::config::SimulationConfig;
//!
//! let config = SimulationConfig::new().with_quantum(2).with_merge_idle(true);
//! assert_eq!(config.quantum, 2);
//! assert!(config.merge_idle);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 4;

/// Default delay between revealed segments during timed playback.
pub const DEFAULT_PLAYBACK_INTERVAL_MS: u64 = 800;

/// Top-level configuration for a [`Simulation`](crate::session::Simulation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum contiguous time units a process may run before preemption.
    pub quantum: i64,
    /// Merge adjacent idle units into a single idle segment.
    pub merge_idle: bool,
    /// Timed playback interval (ms).
    pub playback_interval_ms: u64,
    /// Value ranges for randomly generated processes.
    pub random: RandomRanges,
}

/// Inclusive value ranges used by [`ProcessTable::add_random`](crate::workload::ProcessTable::add_random).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomRanges {
    /// Arrival is drawn from `0..=arrival_max`.
    pub arrival_max: i64,
    /// Smallest generated burst.
    pub burst_min: i64,
    /// Largest generated burst.
    pub burst_max: i64,
    /// Smallest generated priority.
    pub priority_min: i32,
    /// Largest generated priority.
    pub priority_max: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            merge_idle: false,
            playback_interval_ms: DEFAULT_PLAYBACK_INTERVAL_MS,
            random: RandomRanges::default(),
        }
    }
}

impl Default for RandomRanges {
    fn default() -> Self {
        Self {
            arrival_max: 9,
            burst_min: 1,
            burst_max: 10,
            priority_min: 1,
            priority_max: 5,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Enables or disables idle-segment merging.
    pub fn with_merge_idle(mut self, merge_idle: bool) -> Self {
        self.merge_idle = merge_idle;
        self
    }

    /// Sets the timed playback interval.
    pub fn with_playback_interval(mut self, interval: Duration) -> Self {
        self.playback_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the random generation ranges.
    pub fn with_random_ranges(mut self, random: RandomRanges) -> Self {
        self.random = random;
        self
    }

    /// Timed playback interval as a [`Duration`].
    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }
}
