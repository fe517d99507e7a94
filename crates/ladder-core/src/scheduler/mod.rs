//! Cycle scheduler.
//!
//! Drives one fetch → build → render cycle at a time with a fixed delay
//! measured from the end of the previous cycle. Waiting goes through the
//! `Sleeper` trait so tests run without wall-clock delays; the same sleeper
//! is used for retry backoff inside a cycle.

mod sleeper;
mod ticker;

pub use sleeper::{RecordingSleeper, Sleeper, ThreadSleeper};
pub use ticker::Scheduler;
