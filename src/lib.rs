//! Round-Robin CPU scheduling simulator.
//!
//! Turns a set of processes (arrival, burst, priority) and a time quantum
//! into a gap-free timeline of execution segments, replays that timeline
//! incrementally, and derives waiting and turnaround statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Segment`, `Timeline`
//! - **`scheduler`**: `RoundRobinScheduler` (timeline construction) and
//!   `ScheduleStats` (per-process and aggregate metrics)
//! - **`validation`**: Input integrity checks (duplicate IDs, bad burst/arrival)
//! - **`workload`**: Editable process table with random generation
//! - **`playback`**: Step/play/pause cursor over a built timeline
//! - **`session`**: Ties the table, a build, and its playback together
//! - **`config`**: Serde-loadable simulation settings
//!
//! # Architecture
//!
//! `RoundRobinScheduler::build` and `ScheduleStats::calculate` are pure
//! functions of their inputs. Everything else is state kept for a
//! presentation layer that drives playback and displays results.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod models;
pub mod playback;
pub mod scheduler;
pub mod session;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
