//! Countdown display.

use leptos::prelude::*;
use log::debug;

use super::calc::{TimeLeft, pad2, start_countdown};
use crate::host::{BrowserClock, BrowserScheduler};

/// Four tiles (days, hours, minutes, seconds) counting down to `target_ms`.
///
/// With no target (e.g. an unparseable launch date) the tiles stay at zero.
#[component]
pub fn CountdownTimer(target_ms: Option<f64>) -> impl IntoView {
	let (left, set_left) = signal(TimeLeft::default());

	Effect::new(move |_| {
		let Some(target) = target_ms else {
			return;
		};
		let ticker = start_countdown(&BrowserScheduler, BrowserClock, target, move |value| {
			set_left.set(value)
		});
		debug!("coming-soon: countdown started");
		on_cleanup(move || ticker.cancel());
	});

	let tiles = TimeLeft::default()
		.units()
		.into_iter()
		.enumerate()
		.map(|(index, (_, label))| {
			let value = move || pad2(left.get().units()[index].0);
			let delay = format!("animation-delay: {:.1}s", 0.4 + index as f64 * 0.1);
			view! {
				<div class="countdown-unit fade-up" style=delay>
					<div class="countdown-tile">
						<span class="countdown-value">{value}</span>
						{(label == "Seconds").then(|| view! { <div class="countdown-pulse"></div> })}
					</div>
					<span class="countdown-label">{label}</span>
				</div>
			}
		})
		.collect_view();

	view! { <div class="countdown">{tiles}</div> }
}
