//! Round-Robin scheduler and statistics.
//!
//! # Algorithm
//!
//! `RoundRobinScheduler` runs processes from a FIFO ready queue for at most
//! one quantum at a time. Processes that arrive during a slice are queued
//! ahead of the process being preempted.
//!
//! # Statistics
//!
//! `ScheduleStats` computes turnaround, waiting and response time per
//! process, their means, and CPU utilization.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

mod round_robin;
mod stats;

pub use round_robin::RoundRobinScheduler;
pub use stats::{ProcessStats, ScheduleStats};
