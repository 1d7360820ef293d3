//! Remaining-time arithmetic and the one-second ticker.

use std::time::Duration;

use crate::host::{Clock, Scheduler, TaskHandle};

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Refresh cadence of the countdown.
pub const TICK: Duration = Duration::from_secs(1);

/// Time left until the launch, broken into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct TimeLeft {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64,
}

impl TimeLeft {
	/// Values paired with their labels, largest unit first.
	pub fn units(&self) -> [(u64, &'static str); 4] {
		[
			(self.days, "Days"),
			(self.hours, "Hours"),
			(self.minutes, "Minutes"),
			(self.seconds, "Seconds"),
		]
	}

	/// True once the launch instant has passed.
	pub fn is_zero(&self) -> bool {
		*self == Self::default()
	}
}

/// Remaining time from `now_ms` to `target_ms`, both epoch milliseconds.
///
/// Clamps to zero once the target has passed.
pub fn time_left(target_ms: f64, now_ms: f64) -> TimeLeft {
	let remaining = target_ms - now_ms;
	if !(remaining.is_finite() && remaining > 0.0) {
		return TimeLeft::default();
	}

	let total = remaining.floor() as u64;
	TimeLeft {
		days: total / MS_PER_DAY,
		hours: (total / MS_PER_HOUR) % 24,
		minutes: (total / MS_PER_MINUTE) % 60,
		seconds: (total / MS_PER_SECOND) % 60,
	}
}

/// Zero-pads to two digits; larger values are printed in full.
pub fn pad2(value: u64) -> String {
	format!("{value:02}")
}

/// Publishes the remaining time now and then once per [`TICK`].
pub fn start_countdown<S, C>(
	scheduler: &S,
	clock: C,
	target_ms: f64,
	mut publish: impl FnMut(TimeLeft) + 'static,
) -> TaskHandle
where
	S: Scheduler,
	C: Clock + 'static,
{
	publish(time_left(target_ms, clock.now_ms()));
	scheduler.every(TICK, move || publish(time_left(target_ms, clock.now_ms())))
}
