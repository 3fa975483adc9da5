//! Round-Robin timeline builder.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Admit every process with `arrival <= time` into a FIFO ready queue.
//! 3. If the queue is empty but processes are still pending, emit one idle
//!    unit and advance the clock (or, with idle merging, one idle segment
//!    up to the next arrival).
//! 4. Otherwise run the queue head for `min(remaining, quantum)` units.
//! 5. Admit processes that arrived during the slice, then re-enqueue the
//!    preempted process behind them.
//!
//! Priority is never consulted.
//!
//! # Complexity
//! O(n log n + S) where S = number of emitted segments.
//! Clock arithmetic is checked; overflow is an error, never a wrap.

use std::collections::VecDeque;

use crate::error::{Result, ScheduleError};
use crate::models::{Process, Segment, Timeline};
use crate::validation::validate_processes;

/// Simulation-local working copy of a process.
#[derive(Debug)]
struct RunState<'a> {
    process: &'a Process,
    remaining: i64,
}

impl<'a> RunState<'a> {
    fn new(process: &'a Process) -> Self {
        Self {
            process,
            remaining: process.burst,
        }
    }
}

/// Arrival-ordered processes not yet admitted to the ready queue.
struct Arrivals<'a> {
    sorted: Vec<&'a Process>,
    next: usize,
}

impl<'a> Arrivals<'a> {
    fn new(processes: &'a [Process]) -> Self {
        let mut sorted: Vec<&Process> = processes.iter().collect();
        // sort_by_key is stable: equal arrivals keep input order
        sorted.sort_by_key(|p| p.arrival);
        Self { sorted, next: 0 }
    }

    /// Arrival time of the next process not yet admitted.
    fn next_arrival(&self) -> Option<i64> {
        self.sorted.get(self.next).map(|p| p.arrival)
    }

    /// Moves every process with `arrival <= time` to the back of `ready`.
    fn admit(&mut self, time: i64, ready: &mut VecDeque<RunState<'a>>) {
        while let Some(&p) = self.sorted.get(self.next) {
            if p.arrival > time {
                break;
            }
            ready.push_back(RunState::new(p));
            self.next += 1;
        }
    }
}

fn advance(time: i64, by: i64) -> Result<i64> {
    time.checked_add(by).ok_or_else(|| {
        log::warn!("rejecting build: clock overflow at {time} + {by}");
        ScheduleError::HorizonOverflow { time, by }
    })
}

/// Deterministic Round-Robin scheduler with arrival gating.
///
/// # Example
///
/// ```
/// use rr_sched::models::{Process, Segment};
/// use rr_sched::scheduler::RoundRobinScheduler;
///
/// let processes = vec![
///     Process::new("P1", 5),
///     Process::new("P2", 3).with_arrival(1),
/// ];
/// let timeline = RoundRobinScheduler::new().build(&processes, 2).unwrap();
/// assert_eq!(timeline.segments()[0], Segment::running("P1", 0, 2));
/// assert_eq!(timeline.segments()[1], Segment::running("P2", 2, 4));
/// assert_eq!(timeline.makespan(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    merge_idle: bool,
}

impl RoundRobinScheduler {
    /// Creates a scheduler that emits one idle segment per idle time unit.
    pub fn new() -> Self {
        Self { merge_idle: false }
    }

    /// Merges adjacent idle units into a single segment.
    pub fn with_merge_idle(mut self, merge_idle: bool) -> Self {
        self.merge_idle = merge_idle;
        self
    }

    /// Builds the execution timeline for `processes` with the given quantum.
    ///
    /// An empty process set yields an empty timeline. The same inputs
    /// always yield the same timeline; `processes` is not modified.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidQuantum`] if `quantum <= 0`
    /// - [`ScheduleError::InvalidProcesses`] if the set fails validation
    /// - [`ScheduleError::HorizonOverflow`] if the clock would pass `i64::MAX`
    pub fn build(&self, processes: &[Process], quantum: i64) -> Result<Timeline> {
        if quantum <= 0 {
            log::warn!("rejecting build: quantum {quantum} is not positive");
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        if processes.is_empty() {
            return Ok(Timeline::new());
        }
        if let Err(errors) = validate_processes(processes) {
            log::warn!("rejecting build: {} invalid process field(s)", errors.len());
            return Err(ScheduleError::InvalidProcesses(errors));
        }

        let mut arrivals = Arrivals::new(processes);
        let mut ready: VecDeque<RunState> = VecDeque::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut time: i64 = 0;

        loop {
            arrivals.admit(time, &mut ready);

            let Some(mut current) = ready.pop_front() else {
                let Some(next_arrival) = arrivals.next_arrival() else {
                    break;
                };
                // next_arrival > time here, otherwise it would have been admitted
                let idle_end = if self.merge_idle {
                    next_arrival
                } else {
                    advance(time, 1)?
                };
                timeline.push(Segment::idle(time, idle_end));
                time = idle_end;
                continue;
            };

            let run = current.remaining.min(quantum);
            let end = advance(time, run)?;
            timeline.push(Segment::running(&current.process.id, time, end));
            current.remaining -= run;
            time = end;

            // Arrivals during the slice go ahead of the preempted process
            arrivals.admit(time, &mut ready);
            if current.remaining > 0 {
                ready.push_back(current);
            }
        }

        log::debug!(
            "built timeline: {} processes, quantum {}, {} segments, makespan {}",
            processes.len(),
            quantum,
            timeline.len(),
            timeline.makespan()
        );
        Ok(timeline)
    }
}
