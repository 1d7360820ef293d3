//! Browser host services: wall clock and frame/timer scheduling.
//!
//! Everything time-driven on the page goes through these two seams so the
//! animation and countdown logic can run against fakes in tests.

pub mod clock;
pub mod scheduler;

pub use clock::{BrowserClock, Clock};
pub use scheduler::{BrowserScheduler, Scheduler, TaskHandle};
