//! Timeline (solution) model.
//!
//! A timeline is the ordered list of execution segments produced by one
//! build. Consecutive segments are contiguous: segment *k* ends where
//! segment *k+1* starts. Idle time is represented explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for idle segments in textual output.
pub const IDLE_LABEL: &str = "IDLE";

/// One contiguous interval `[start, end)` during which a single process
/// (or nothing) occupies the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Running process ID. `None` = processor idle.
    pub process_id: Option<String>,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

/// Ordered, gap-free sequence of segments.
///
/// Built once and then read-only; there are no public mutators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Segment {
    /// Creates a segment for a running process.
    pub fn running(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: Some(process_id.into()),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            process_id: None,
            start,
            end,
        }
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the processor is idle in this segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }

    /// Whether this segment belongs to the given process.
    #[inline]
    pub fn is_for(&self, process_id: &str) -> bool {
        self.process_id.as_deref() == Some(process_id)
    }

    /// Process ID, or [`IDLE_LABEL`] for idle segments.
    pub fn label(&self) -> &str {
        self.process_id.as_deref().unwrap_or(IDLE_LABEL)
    }

    /// Event-log sentence for this segment, e.g. `"P1 runs from 0 to 2"`.
    pub fn describe(&self) -> String {
        format!("{} runs from {} to {}", self.label(), self.start, self.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.label(), self.start, self.end)
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing segment list.
    ///
    /// No contiguity check is made; see [`Timeline::is_contiguous`].
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        log::trace!("segment {segment}");
        self.segments.push(segment);
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over segments in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Segment at `index`.
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Returns all segments of a given process.
    pub fn segments_for(&self, process_id: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.is_for(process_id))
            .collect()
    }

    /// Completion time of a process: end of its last segment by position.
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.is_for(process_id))
            .map(|s| s.end)
    }

    /// Start of the first segment of a process.
    pub fn first_start(&self, process_id: &str) -> Option<i64> {
        self.segments
            .iter()
            .find(|s| s.is_for(process_id))
            .map(|s| s.start)
    }

    /// Total time a process spent on the processor.
    pub fn busy_time(&self, process_id: &str) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_for(process_id))
            .map(Segment::duration)
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Whether every segment is non-empty and each one starts where the
    /// previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.segments.iter().all(|s| s.end > s.start)
            && self.segments.windows(2).all(|w| w[0].end == w[1].start)
    }

    /// Returns a copy with adjacent idle segments merged into one.
    ///
    /// Running segments are left alone, even when the same process runs
    /// twice in a row, so per-slice information is preserved.
    pub fn coalesce_idle(&self) -> Timeline {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match merged.last_mut() {
                Some(prev) if prev.is_idle() && segment.is_idle() && prev.end == segment.start => {
                    prev.end = segment.end;
                }
                _ => merged.push(segment.clone()),
            }
        }
        Timeline { segments: merged }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
