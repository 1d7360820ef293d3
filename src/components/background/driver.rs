//! Frame loop wiring between the scheduler, the field state and a draw callback.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

use super::particles::FieldState;
use crate::host::{Scheduler, TaskHandle};

/// Steps `field` and calls `draw` once per display frame.
///
/// Frames for which `visible` returns false are skipped entirely. The field
/// is shared so resize handlers can swap it between frames; each frame
/// borrows it once, so a replacement is always observed whole.
pub fn animate<S, R>(
	scheduler: &S,
	field: Rc<RefCell<FieldState>>,
	mut rng: R,
	visible: impl Fn() -> bool + 'static,
	mut draw: impl FnMut(&FieldState) + 'static,
) -> TaskHandle
where
	S: Scheduler,
	R: Rng + 'static,
{
	scheduler.every_frame(move |_| {
		if !visible() {
			return;
		}
		let mut field = field.borrow_mut();
		field.step(&mut rng);
		draw(&field);
	})
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::background::theme::ParticleStyle;
	use crate::host::scheduler::manual::ManualScheduler;

	fn field(width: f64, height: f64) -> Rc<RefCell<FieldState>> {
		let mut rng = StdRng::seed_from_u64(42);
		Rc::new(RefCell::new(FieldState::new(
			ParticleStyle::default(),
			width,
			height,
			&mut rng,
		)))
	}

	#[test]
	fn each_frame_steps_then_draws() {
		let scheduler = ManualScheduler::new();
		let state = field(300.0, 300.0);
		let draws = Rc::new(Cell::new(0u32));
		let draws_seen = draws.clone();

		let _task = animate(&scheduler, state.clone(), StdRng::seed_from_u64(1), || true, move |f| {
			draws.set(draws.get() + 1);
			assert!((f.time - draws.get() as f64 * 0.005).abs() < 1e-12);
		});

		for i in 0..4 {
			scheduler.frame(i as f64 * 16.7);
		}
		assert_eq!(draws_seen.get(), 4);
		assert!((state.borrow().time - 0.02).abs() < 1e-12);
	}

	#[test]
	fn teardown_stops_all_frame_work() {
		let scheduler = ManualScheduler::new();
		let state = field(300.0, 300.0);
		let draws = Rc::new(Cell::new(0u32));
		let draws_seen = draws.clone();

		let task = animate(&scheduler, state.clone(), StdRng::seed_from_u64(1), || true, move |_| {
			draws.set(draws.get() + 1)
		});
		scheduler.frame(0.0);
		scheduler.frame(16.0);
		task.cancel();
		let time_at_teardown = state.borrow().time;

		for i in 2..20 {
			scheduler.frame(i as f64 * 16.0);
		}
		assert_eq!(draws_seen.get(), 2);
		assert_eq!(state.borrow().time, time_at_teardown);
		assert_eq!(scheduler.live_tasks(), 0);
	}

	#[test]
	fn hidden_frames_are_skipped() {
		let scheduler = ManualScheduler::new();
		let state = field(300.0, 300.0);
		let hidden = Rc::new(Cell::new(true));
		let hidden_flag = hidden.clone();
		let draws = Rc::new(Cell::new(0u32));
		let draws_seen = draws.clone();

		let _task = animate(
			&scheduler,
			state.clone(),
			StdRng::seed_from_u64(1),
			move || !hidden_flag.get(),
			move |_| draws.set(draws.get() + 1),
		);
		scheduler.frame(0.0);
		scheduler.frame(16.0);
		assert_eq!(draws_seen.get(), 0);
		assert_eq!(state.borrow().time, 0.0);

		hidden.set(false);
		scheduler.frame(32.0);
		assert_eq!(draws_seen.get(), 1);
	}

	#[test]
	fn resize_between_frames_is_seen_whole() {
		let scheduler = ManualScheduler::new();
		let state = field(300.0, 300.0);
		let counts = Rc::new(RefCell::new(Vec::new()));
		let counts_seen = counts.clone();

		let _task = animate(&scheduler, state.clone(), StdRng::seed_from_u64(1), || true, move |f| {
			counts.borrow_mut().push((f.particles.len(), f.width, f.height))
		});
		scheduler.frame(0.0);
		state
			.borrow_mut()
			.resize(600.0, 500.0, &mut StdRng::seed_from_u64(9));
		scheduler.frame(16.0);

		assert_eq!(
			*counts_seen.borrow(),
			vec![(30, 300.0, 300.0), (100, 600.0, 500.0)]
		);
	}
}
