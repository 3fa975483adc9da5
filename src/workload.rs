//! Editable process table.
//!
//! Holds the user's process list between builds. Processes are added with
//! explicit or random values, edited in place, and removed all at once by
//! [`ProcessTable::clear`]. IDs are `P1`, `P2`, ... and are not reused
//! until the table is cleared.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::RandomRanges;
use crate::error::{Result, ScheduleError};
use crate::models::Process;

/// Ordered list of processes with ID assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessTable {
    processes: Vec<Process>,
    next_id: u32,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> String {
        // Default-constructed tables start at 0
        self.next_id = self.next_id.max(1);
        let id = format!("P{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a process with explicit values and returns its ID.
    pub fn add(&mut self, arrival: i64, burst: i64, priority: i32) -> String {
        let id = self.allocate_id();
        self.processes.push(
            Process::new(id.clone(), burst)
                .with_arrival(arrival)
                .with_priority(priority),
        );
        log::debug!("added {id}: arrival {arrival}, burst {burst}, priority {priority}");
        id
    }

    /// Adds a process with values drawn from `ranges` and returns its ID.
    ///
    /// Inverted ranges collapse to their lower bound.
    pub fn add_random<R: Rng>(&mut self, ranges: &RandomRanges, rng: &mut R) -> String {
        let arrival = rng.random_range(0..=ranges.arrival_max.max(0));
        let burst = rng.random_range(ranges.burst_min..=ranges.burst_max.max(ranges.burst_min));
        let priority =
            rng.random_range(ranges.priority_min..=ranges.priority_max.max(ranges.priority_min));
        self.add(arrival, burst, priority)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Process> {
        self.processes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ScheduleError::UnknownProcess(id.to_string()))
    }

    /// Changes the arrival time of a process.
    pub fn set_arrival(&mut self, id: &str, arrival: i64) -> Result<()> {
        self.find_mut(id)?.arrival = arrival;
        Ok(())
    }

    /// Changes the burst time of a process.
    ///
    /// The next build starts this process with the new burst as its
    /// remaining work.
    pub fn set_burst(&mut self, id: &str, burst: i64) -> Result<()> {
        self.find_mut(id)?.burst = burst;
        Ok(())
    }

    /// Changes the priority of a process.
    pub fn set_priority(&mut self, id: &str, priority: i32) -> Result<()> {
        self.find_mut(id)?.priority = priority;
        Ok(())
    }

    /// Removes every process and restarts ID assignment at `P1`.
    pub fn clear(&mut self) {
        log::debug!("clearing {} processes", self.processes.len());
        self.processes.clear();
        self.next_id = 1;
    }

    /// Processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Finds a process by ID.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut table = ProcessTable::new();
        assert_eq!(table.add(0, 5, 1), "P1");
        assert_eq!(table.add(1, 3, 2), "P2");
        assert_eq!(table.len(), 2);

        let p2 = table.get("P2").unwrap();
        assert_eq!(p2.arrival, 1);
        assert_eq!(p2.burst, 3);
        assert_eq!(p2.priority, 2);
    }

    #[test]
    fn test_default_table_starts_at_p1() {
        let mut table = ProcessTable::default();
        assert_eq!(table.add(0, 1, 1), "P1");
        assert_eq!(table.add(0, 1, 1), "P2");
    }

    #[test]
    fn test_add_random_within_ranges() {
        let mut table = ProcessTable::new();
        let ranges = RandomRanges::default();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            table.add_random(&ranges, &mut rng);
        }
        assert_eq!(table.len(), 100);
        for p in table.processes() {
            assert!((0..=9).contains(&p.arrival));
            assert!((1..=10).contains(&p.burst));
            assert!((1..=5).contains(&p.priority));
        }
        assert!(crate::validation::validate_processes(table.processes()).is_ok());
    }

    #[test]
    fn test_add_random_inverted_range() {
        let mut table = ProcessTable::new();
        let ranges = RandomRanges {
            arrival_max: -1,
            burst_min: 3,
            burst_max: 1,
            priority_min: 2,
            priority_max: 0,
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let id = table.add_random(&ranges, &mut rng);
        let p = table.get(&id).unwrap();
        assert_eq!(p.arrival, 0);
        assert_eq!(p.burst, 3);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_edit_fields() {
        let mut table = ProcessTable::new();
        table.add(0, 5, 1);
        table.set_arrival("P1", 4).unwrap();
        table.set_burst("P1", 9).unwrap();
        table.set_priority("P1", 3).unwrap();

        let p = table.get("P1").unwrap();
        assert_eq!((p.arrival, p.burst, p.priority), (4, 9, 3));
    }

    #[test]
    fn test_edit_unknown_process() {
        let mut table = ProcessTable::new();
        assert_eq!(
            table.set_burst("P7", 2),
            Err(ScheduleError::UnknownProcess("P7".into()))
        );
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut table = ProcessTable::new();
        table.add(0, 1, 1);
        table.add(0, 1, 1);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.add(0, 1, 1), "P1");
    }
}
