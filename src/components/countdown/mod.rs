//! Launch countdown.
//!
//! [`time_left`] turns a target instant and "now" into days, hours, minutes
//! and seconds, clamped at zero once the launch has passed.
//! [`start_countdown`] republishes it every second through a scheduler, and
//! [`CountdownTimer`] renders the result.

mod calc;
mod component;

pub use calc::{TICK, TimeLeft, pad2, start_countdown, time_left};
pub use component::CountdownTimer;
