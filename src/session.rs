//! Simulation session.
//!
//! Owns the editable process table, the configuration, and the most
//! recent build. A build snapshots the process table, so edits made after
//! building do not affect the timeline or its statistics until the next
//! build.
//!
//! # Example
//!
//! ```
//! use rr_sched::config::SimulationConfig;
//! use rr_sched::session::Simulation;
//!
//! let mut sim = Simulation::new(SimulationConfig::new().with_quantum(2));
//! sim.add_process(0, 5, 1);
//! sim.add_process(1, 3, 1);
//! sim.build().unwrap();
//!
//! while sim.step().is_some() {}
//! let stats = sim.stats().unwrap().unwrap();
//! assert_eq!(stats.format_avg_waiting(), "3.00");
//! ```

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::models::{Process, Segment, Timeline};
use crate::playback::Playback;
use crate::scheduler::{RoundRobinScheduler, ScheduleStats};
use crate::workload::ProcessTable;

/// The process set a timeline was built from, plus its playback cursor.
#[derive(Debug, Clone)]
struct Build {
    processes: Vec<Process>,
    playback: Playback,
}

/// One user session: process table, settings, and the current timeline.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    table: ProcessTable,
    build: Option<Build>,
}

impl Simulation {
    /// Creates an empty session.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            table: ProcessTable::new(),
            build: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Sets the quantum used by the next build.
    pub fn set_quantum(&mut self, quantum: i64) {
        self.config.quantum = quantum;
    }

    /// Processes in the table.
    pub fn processes(&self) -> &[Process] {
        self.table.processes()
    }

    /// The editable process table.
    pub fn table_mut(&mut self) -> &mut ProcessTable {
        &mut self.table
    }

    /// Adds a process with explicit values and returns its ID.
    pub fn add_process(&mut self, arrival: i64, burst: i64, priority: i32) -> String {
        self.table.add(arrival, burst, priority)
    }

    /// Adds a process with random values from the configured ranges.
    pub fn add_random(&mut self) -> String {
        self.add_random_with(&mut rand::rng())
    }

    /// Same as [`Simulation::add_random`] with a caller-supplied generator.
    pub fn add_random_with<R: Rng>(&mut self, rng: &mut R) -> String {
        self.table.add_random(&self.config.random, rng)
    }

    /// Removes all processes and discards the current timeline.
    pub fn clear(&mut self) {
        self.table.clear();
        self.build = None;
    }

    /// Builds a fresh timeline from the current table, replacing any
    /// previous one and resetting playback.
    ///
    /// On error the previous timeline is discarded as well.
    pub fn build(&mut self) -> Result<&Timeline> {
        self.build = None;
        let processes = self.table.processes().to_vec();
        let timeline = RoundRobinScheduler::new()
            .with_merge_idle(self.config.merge_idle)
            .build(&processes, self.config.quantum)?;

        log::debug!(
            "session build: {} processes, {} segments",
            processes.len(),
            timeline.len()
        );
        let playback = Playback::new(Arc::new(timeline), self.config.playback_interval());
        let build = self.build.insert(Build {
            processes,
            playback,
        });
        Ok(build.playback.timeline().as_ref())
    }

    /// The current timeline, if built.
    pub fn timeline(&self) -> Option<&Timeline> {
        self.build.as_ref().map(|b| b.playback.timeline().as_ref())
    }

    /// Playback cursor for the current timeline.
    pub fn playback(&self) -> Option<&Playback> {
        self.build.as_ref().map(|b| &b.playback)
    }

    /// Mutable playback cursor for the current timeline.
    pub fn playback_mut(&mut self) -> Option<&mut Playback> {
        self.build.as_mut().map(|b| &mut b.playback)
    }

    /// Reveals the next segment, pausing timed play.
    pub fn step(&mut self) -> Option<Segment> {
        self.playback_mut()?.step().cloned()
    }

    /// Starts or resumes timed play.
    pub fn play(&mut self) -> Option<Segment> {
        self.playback_mut()?.play().cloned()
    }

    /// Pauses timed play.
    pub fn pause(&mut self) {
        if let Some(playback) = self.playback_mut() {
            playback.pause();
        }
    }

    /// Advances timed play by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<Segment> {
        self.playback_mut()
            .map(|p| p.tick(elapsed))
            .unwrap_or_default()
    }

    /// Statistics for the built process set.
    ///
    /// Returns `Ok(None)` until a timeline exists and has been fully
    /// revealed.
    pub fn stats(&self) -> Result<Option<ScheduleStats>> {
        match &self.build {
            Some(build) if build.playback.is_finished() => {
                ScheduleStats::calculate(&build.processes, build.playback.timeline()).map(Some)
            }
            _ => Ok(None),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
