//! Waiting and turnaround statistics.
//!
//! Derives per-process metrics from a finished timeline and the process
//! set it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last segment |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | CPU Utilization | busy time / makespan |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ScheduleError};
use crate::models::{Process, Timeline};

/// Metrics for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process ID.
    pub process_id: String,
    /// End of the last segment.
    pub completion: i64,
    /// completion - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// first start - arrival.
    pub response: i64,
}

/// Per-process and aggregate statistics for one timeline.
///
/// Averages are stored exactly; rounding happens only when formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Per-process metrics, in input order.
    pub per_process: Vec<ProcessStats>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// End of the timeline.
    pub makespan: i64,
    /// Total idle time.
    pub idle_time: i64,
    /// Fraction of the makespan spent running processes (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleStats {
    /// Computes statistics for `processes` over `timeline`.
    ///
    /// # Errors
    /// - [`ScheduleError::NoProcesses`] if `processes` is empty
    /// - [`ScheduleError::OrphanProcess`] if a process has no segment
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Result<Self> {
        if processes.is_empty() {
            return Err(ScheduleError::NoProcesses);
        }

        let per_process = processes
            .iter()
            .map(|p| {
                let completion = timeline
                    .completion_time(&p.id)
                    .ok_or_else(|| ScheduleError::OrphanProcess(p.id.clone()))?;
                let first_start = timeline
                    .first_start(&p.id)
                    .ok_or_else(|| ScheduleError::OrphanProcess(p.id.clone()))?;
                let turnaround = completion - p.arrival;
                Ok(ProcessStats {
                    process_id: p.id.clone(),
                    completion,
                    turnaround,
                    waiting: turnaround - p.burst,
                    response: first_start - p.arrival,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let n = per_process.len() as f64;
        let avg_turnaround = per_process.iter().map(|s| s.turnaround).sum::<i64>() as f64 / n;
        let avg_waiting = per_process.iter().map(|s| s.waiting).sum::<i64>() as f64 / n;
        let avg_response = per_process.iter().map(|s| s.response).sum::<i64>() as f64 / n;

        let makespan = timeline.makespan();
        let idle_time = timeline.idle_time();
        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            (makespan - idle_time) as f64 / makespan as f64
        };

        Ok(Self {
            per_process,
            avg_turnaround,
            avg_waiting,
            avg_response,
            makespan,
            idle_time,
            cpu_utilization,
        })
    }

    /// Finds the metrics for a given process.
    pub fn get(&self, process_id: &str) -> Option<&ProcessStats> {
        self.per_process
            .iter()
            .find(|s| s.process_id == process_id)
    }

    /// Average waiting time rounded to two decimals, e.g. `"3.00"`.
    pub fn format_avg_waiting(&self) -> String {
        format!("{:.2}", self.avg_waiting)
    }

    /// Average turnaround time rounded to two decimals.
    pub fn format_avg_turnaround(&self) -> String {
        format!("{:.2}", self.avg_turnaround)
    }
}

impl fmt::Display for ScheduleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Avg Waiting Time: {}", self.format_avg_waiting())?;
        write!(f, "Avg Turnaround Time: {}", self.format_avg_turnaround())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;
    use crate::scheduler::RoundRobinScheduler;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_two_processes_with_late_arrival() {
        let processes = vec![
            Process::new("P1", 5),
            Process::new("P2", 3).with_arrival(1),
        ];
        let timeline = RoundRobinScheduler::new().build(&processes, 2).unwrap();
        let stats = ScheduleStats::calculate(&processes, &timeline).unwrap();

        // P1: 0-2, 4-6, 7-8 ; P2: 2-4, 6-7
        let p1 = stats.get("P1").unwrap();
        assert_eq!(p1.completion, 8);
        assert_eq!(p1.turnaround, 8);
        assert_eq!(p1.waiting, 3);
        assert_eq!(p1.response, 0);

        let p2 = stats.get("P2").unwrap();
        assert_eq!(p2.completion, 7);
        assert_eq!(p2.turnaround, 6);
        assert_eq!(p2.waiting, 3);
        assert_eq!(p2.response, 1);

        assert!((stats.avg_turnaround - 7.0).abs() < 1e-10);
        assert!((stats.avg_waiting - 3.0).abs() < 1e-10);
        assert!((stats.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_process() {
        let processes = vec![Process::new("P1", 1)];
        let timeline = RoundRobinScheduler::new().build(&processes, 3).unwrap();
        let stats = ScheduleStats::calculate(&processes, &timeline).unwrap();
        assert_eq!(stats.get("P1").unwrap().turnaround, 1);
        assert_eq!(stats.get("P1").unwrap().waiting, 0);
    }

    #[test]
    fn test_idle_time_and_utilization() {
        let processes = vec![
            Process::new("A", 2),
            Process::new("B", 1).with_arrival(5),
        ];
        let timeline = RoundRobinScheduler::new().build(&processes, 4).unwrap();
        let stats = ScheduleStats::calculate(&processes, &timeline).unwrap();
        assert_eq!(stats.makespan, 6);
        assert_eq!(stats.idle_time, 3);
        assert!((stats.cpu_utilization - 0.5).abs() < 1e-10);
        assert_eq!(stats.get("B").unwrap().waiting, 0);
    }

    #[test]
    fn test_no_processes() {
        assert_eq!(
            ScheduleStats::calculate(&[], &Timeline::new()),
            Err(ScheduleError::NoProcesses)
        );
    }

    #[test]
    fn test_orphan_process() {
        let processes = vec![Process::new("P1", 2), Process::new("P2", 1)];
        let timeline = Timeline::from_segments(vec![Segment::running("P1", 0, 2)]);
        assert_eq!(
            ScheduleStats::calculate(&processes, &timeline),
            Err(ScheduleError::OrphanProcess("P2".into()))
        );
    }

    #[test]
    fn test_per_process_in_input_order() {
        let processes = vec![
            Process::new("late", 1).with_arrival(4),
            Process::new("early", 1),
        ];
        let timeline = RoundRobinScheduler::new().build(&processes, 1).unwrap();
        let stats = ScheduleStats::calculate(&processes, &timeline).unwrap();
        let ids: Vec<&str> = stats.per_process.iter().map(|s| s.process_id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        let processes = vec![
            Process::new("P1", 1),
            Process::new("P2", 1),
            Process::new("P3", 1),
        ];
        let timeline = RoundRobinScheduler::new().build(&processes, 1).unwrap();
        let stats = ScheduleStats::calculate(&processes, &timeline).unwrap();
        // waits 0, 1, 2 ; turnarounds 1, 2, 3
        assert_eq!(stats.format_avg_waiting(), "1.00");
        assert_eq!(
            stats.to_string(),
            "Avg Waiting Time: 1.00\nAvg Turnaround Time: 2.00"
        );

        let processes = vec![Process::new("P1", 1), Process::new("P2", 1), Process::new("P3", 2)];
        let timeline = RoundRobinScheduler::new().build(&processes, 1).unwrap();
        let stats = ScheduleStats::calculate(&processes, &timeline).unwrap();
        // P1 0-1, P2 1-2, P3 2-3, P3 3-4 → turnarounds 1, 2, 4
        assert!((stats.avg_turnaround - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.format_avg_turnaround(), "2.33");
    }

    #[test]
    fn test_random_workloads_never_negative_waiting() {
        let mut rng = SmallRng::seed_from_u64(7);
        let scheduler = RoundRobinScheduler::new();
        for _ in 0..200 {
            let n = rng.random_range(1..=6);
            let processes: Vec<Process> = (1..=n)
                .map(|i| {
                    Process::new(format!("P{i}"), rng.random_range(1..=8))
                        .with_arrival(rng.random_range(0..=10))
                })
                .collect();
            let quantum = rng.random_range(1..=4);
            let timeline = scheduler.build(&processes, quantum).unwrap();
            let stats = ScheduleStats::calculate(&processes, &timeline).unwrap();
            for s in &stats.per_process {
                assert!(s.waiting >= 0);
                assert!(s.response >= 0);
                assert!(s.response <= s.waiting);
            }
        }
    }
}
