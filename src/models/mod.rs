//! Scheduling domain models.
//!
//! Provides the input and output types of a Round-Robin simulation.
//!
//! | Type | Role |
//! |------|------|
//! | Process | Input: arrival, burst, priority |
//! | Segment | Output unit: `[start, end)` on one process or idle |
//! | Timeline | Output: ordered, contiguous segments |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Segment, Timeline, IDLE_LABEL};
