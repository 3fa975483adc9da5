//! Incremental playback of a built timeline.
//!
//! A [`Playback`] is a cursor over a frozen [`Timeline`]. Segments are
//! revealed strictly in order, either one at a time with [`Playback::step`]
//! or on a fixed interval while playing. The caller owns the clock and
//! reports elapsed time through [`Playback::tick`], so there is never more
//! than one reveal in flight.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use rr_sched::models::Process;
//! use rr_sched::playback::Playback;
//! use rr_sched::scheduler::RoundRobinScheduler;
//!
//! let processes = vec![Process::new("P1", 3), Process::new("P2", 2)];
//! let timeline = RoundRobinScheduler::new().build(&processes, 2).unwrap();
//! let mut playback = Playback::new(Arc::new(timeline), Duration::from_millis(800));
//!
//! assert_eq!(playback.step().unwrap().to_string(), "P1 (0-2)");
//! playback.play();
//! let revealed = playback.tick(Duration::from_millis(800));
//! assert_eq!(revealed.len(), 1);
//! assert!(playback.is_finished());
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Segment, Timeline};

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Not advancing on ticks. Initial state.
    Paused,
    /// Advancing one segment per interval.
    Playing,
    /// Every segment has been revealed.
    Finished,
}

/// Cancelable cursor over a shared, read-only timeline.
#[derive(Debug, Clone)]
pub struct Playback {
    timeline: Arc<Timeline>,
    position: usize,
    playing: bool,
    interval: Duration,
    pending: Duration,
}

impl Playback {
    /// Creates a paused playback positioned before the first segment.
    pub fn new(timeline: Arc<Timeline>, interval: Duration) -> Self {
        Self {
            timeline,
            position: 0,
            playing: false,
            interval,
            pending: Duration::ZERO,
        }
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        if self.is_finished() {
            PlaybackState::Finished
        } else if self.playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    /// Whether every segment has been revealed.
    pub fn is_finished(&self) -> bool {
        self.position >= self.timeline.len()
    }

    /// Index of the next segment to reveal.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Segments revealed so far.
    pub fn revealed(&self) -> &[Segment] {
        &self.timeline.segments()[..self.position]
    }

    /// The timeline being played.
    pub fn timeline(&self) -> &Arc<Timeline> {
        &self.timeline
    }

    /// Delay between reveals while playing.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn reveal(&mut self) -> Option<&Segment> {
        let segment = self.timeline.get(self.position)?;
        self.position += 1;
        if self.position >= self.timeline.len() {
            self.playing = false;
        }
        Some(segment)
    }

    /// Cancels timed play and reveals the next segment.
    pub fn step(&mut self) -> Option<&Segment> {
        self.pause();
        self.reveal()
    }

    /// Starts timed play from the cursor and reveals the next segment
    /// immediately. A finished playback is rewound first.
    pub fn play(&mut self) -> Option<&Segment> {
        if self.playing {
            return None;
        }
        if self.is_finished() {
            self.rewind();
        }
        if self.timeline.is_empty() {
            return None;
        }
        self.playing = true;
        self.pending = Duration::ZERO;
        self.reveal()
    }

    /// Cancels timed play. The cursor is kept.
    pub fn pause(&mut self) {
        self.playing = false;
        self.pending = Duration::ZERO;
    }

    /// Moves the cursor back to the first segment and pauses.
    pub fn rewind(&mut self) {
        self.pause();
        self.position = 0;
    }

    /// Advances the playback clock by `elapsed`.
    ///
    /// While playing, one segment is revealed per full interval, in order.
    /// Returns the segments revealed by this call.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<Segment> {
        let mut revealed = Vec::new();
        if !self.playing {
            return revealed;
        }
        self.pending += elapsed;
        while self.playing && self.pending >= self.interval {
            self.pending -= self.interval;
            match self.reveal() {
                Some(segment) => revealed.push(segment.clone()),
                None => break,
            }
        }
        revealed
    }
}

impl Iterator for Playback {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        self.step().cloned()
    }
}
