//! Process model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival
//! time and needs `burst` time units of CPU in total.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Processes are caller-owned and never mutated by the scheduler; the
/// remaining-work counter lives in the scheduler's own working copy.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Display-only priority. Round Robin does not consult it.
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 1.
    pub fn new(id: impl Into<String>, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival: 0,
            burst,
            priority: 1,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst: i64) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 5).with_arrival(3).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 5);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new("P1", 1);
        assert_eq!(p.arrival, 0);
        assert_eq!(p.priority, 1);
    }

    #[test]
    fn test_process_serde() {
        let p = Process::new("P2", 4).with_arrival(1);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"id":"P2","arrival":1,"burst":4,"priority":1}"#);
    }
}
