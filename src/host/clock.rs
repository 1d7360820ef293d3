//! Wall-clock source.

/// Supplies the current time in milliseconds since the Unix epoch.
pub trait Clock {
	/// Milliseconds since the epoch.
	fn now_ms(&self) -> f64;
}

/// `Date.now()` from the JS host.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
	fn now_ms(&self) -> f64 {
		js_sys::Date::now()
	}
}

impl<F: Fn() -> f64> Clock for F {
	fn now_ms(&self) -> f64 {
		self()
	}
}

/// Current calendar year in local time.
pub fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}
