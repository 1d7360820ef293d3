//! Repeating and delayed work on the browser's single thread.
//!
//! [`Scheduler`] is the only way page code registers time-driven callbacks.
//! Every registration returns a [`TaskHandle`]; once the handle is cancelled
//! the work closure is never invoked again. [`BrowserScheduler`] maps the
//! trait onto `requestAnimationFrame`, `setInterval` and `setTimeout`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::warn;
use wasm_bindgen::prelude::*;

/// Cancel token for scheduled work.
///
/// Clones share the same flag. The handle is `Send + Sync` so it can be
/// moved into Leptos cleanup callbacks.
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
	cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
	/// A live handle.
	pub fn new() -> Self {
		Self::default()
	}

	/// A handle for work that was never scheduled.
	pub fn inert() -> Self {
		let handle = Self::new();
		handle.cancel();
		handle
	}

	/// Stop the task. Idempotent.
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Relaxed);
	}

	/// Whether [`cancel`](Self::cancel) was called on this handle or a clone.
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Relaxed)
	}
}

/// Host scheduling primitive.
pub trait Scheduler {
	/// Run `work` once per display frame. The argument is the frame
	/// timestamp in milliseconds.
	fn every_frame(&self, work: impl FnMut(f64) + 'static) -> TaskHandle;

	/// Run `work` repeatedly, once per `period`.
	fn every(&self, period: Duration, work: impl FnMut() + 'static) -> TaskHandle;

	/// Run `work` once after `delay`.
	fn after(&self, delay: Duration, work: impl FnOnce() + 'static) -> TaskHandle;
}

impl<S: Scheduler> Scheduler for Rc<S> {
	fn every_frame(&self, work: impl FnMut(f64) + 'static) -> TaskHandle {
		(**self).every_frame(work)
	}

	fn every(&self, period: Duration, work: impl FnMut() + 'static) -> TaskHandle {
		(**self).every(period, work)
	}

	fn after(&self, delay: Duration, work: impl FnOnce() + 'static) -> TaskHandle {
		(**self).after(delay, work)
	}
}

/// Scheduler backed by the JS event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

impl Scheduler for BrowserScheduler {
	fn every_frame(&self, mut work: impl FnMut(f64) + 'static) -> TaskHandle {
		let Some(window) = web_sys::window() else {
			warn!("coming-soon: no window, frame task not scheduled");
			return TaskHandle::inert();
		};
		let handle = TaskHandle::new();
		let frame: FrameSlot = Rc::new(RefCell::new(None));
		let (frame_inner, token) = (frame.clone(), handle.clone());

		*frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			if token.is_cancelled() {
				// Breaks the self-reference; the closure is freed once it returns.
				let _ = frame_inner.borrow_mut().take();
				return;
			}
			work(timestamp);
			if let Some(ref cb) = *frame_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *frame.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
		handle
	}

	fn every(&self, period: Duration, mut work: impl FnMut() + 'static) -> TaskHandle {
		let Some(window) = web_sys::window() else {
			warn!("coming-soon: no window, interval not scheduled");
			return TaskHandle::inert();
		};
		let handle = TaskHandle::new();
		let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let tick: TickSlot = Rc::new(RefCell::new(None));
		let (tick_inner, id_inner, token) = (tick.clone(), interval_id.clone(), handle.clone());

		*tick.borrow_mut() = Some(Closure::new(move || {
			if token.is_cancelled() {
				if let (Some(win), Some(id)) = (web_sys::window(), id_inner.get()) {
					win.clear_interval_with_handle(id);
				}
				let _ = tick_inner.borrow_mut().take();
				return;
			}
			work();
		}));

		let millis = period.as_millis().min(i32::MAX as u128) as i32;
		let scheduled = tick.borrow().as_ref().map(|cb| {
			window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				millis,
			)
		});
		match scheduled {
			Some(Ok(id)) => interval_id.set(Some(id)),
			_ => {
				warn!("coming-soon: setInterval rejected, periodic task dropped");
				handle.cancel();
				let _ = tick.borrow_mut().take();
			}
		}
		handle
	}

	fn after(&self, delay: Duration, work: impl FnOnce() + 'static) -> TaskHandle {
		let Some(window) = web_sys::window() else {
			warn!("coming-soon: no window, timeout not scheduled");
			return TaskHandle::inert();
		};
		let handle = TaskHandle::new();
		let token = handle.clone();
		let callback = Closure::once_into_js(move || {
			if !token.is_cancelled() {
				work();
			}
		});
		let millis = delay.as_millis().min(i32::MAX as u128) as i32;
		if window
			.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
			.is_err()
		{
			warn!("coming-soon: setTimeout rejected, delayed task dropped");
			handle.cancel();
		}
		handle
	}
}
