//! Wall-clock capability consumed by the note store

use chrono::{DateTime, Local};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
