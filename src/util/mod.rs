//! Utility modules: clock, time-based ids.

pub mod clock;
pub mod ids;

pub use clock::{Clock, FixedClock, SystemClock};
