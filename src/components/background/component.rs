//! Leptos component wrapping the animated background canvas.
//!
//! The component creates a full-viewport canvas, generates the particle field
//! for the current window size, and drives the frame loop through the browser
//! scheduler. Window resizes regenerate the field. Everything is released on
//! unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::driver::animate;
use super::particles::FieldState;
use super::render;
use super::theme::Theme;
use crate::host::BrowserScheduler;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Sizes the backing store in device pixels while the element keeps its
/// CSS size.
fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64, ratio: f64) {
	canvas.set_width((width * ratio) as u32);
	canvas.set_height((height * ratio) as u32);
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{width}px"));
	let _ = style.set_property("height", &format!("{height}px"));
}

fn page_visible() -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.map(|d| !d.hidden())
		.unwrap_or(true)
}

/// Full-viewport canvas with drifting particles and light beams.
///
/// If the host cannot provide a 2D context the canvas stays empty and the
/// rest of the page is unaffected.
#[component]
pub fn AnimatedBackground(#[prop(optional)] theme: Option<Theme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let theme = theme.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("coming-soon: 2d canvas context unavailable, background disabled");
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("coming-soon: viewport size unavailable, background disabled");
			return;
		};

		let ratio = Rc::new(Cell::new(window.device_pixel_ratio()));
		size_canvas(&canvas, w, h, ratio.get());

		let theme = theme.clone();
		let mut rng = SmallRng::from_entropy();
		let field = Rc::new(RefCell::new(FieldState::new(
			theme.particles.clone(),
			w,
			h,
			&mut rng,
		)));
		info!(
			"coming-soon: background mounted ({} theme), {} particles at {}x{}",
			theme.name,
			field.borrow().particles.len(),
			w,
			h
		);

		let (field_resize, ratio_resize) = (field.clone(), ratio.clone());
		let resize_rng = RefCell::new(SmallRng::from_entropy());
		let resize = window_event_listener(ev::resize, move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Some((nw, nh)) = viewport_size(&win) else {
				return;
			};
			ratio_resize.set(win.device_pixel_ratio());
			size_canvas(&canvas, nw, nh, ratio_resize.get());

			let mut field = field_resize.borrow_mut();
			field.resize(nw, nh, &mut *resize_rng.borrow_mut());
			debug!(
				"coming-soon: viewport {}x{}, regenerated {} particles",
				nw,
				nh,
				field.particles.len()
			);
		});

		let frames = animate(&BrowserScheduler, field, rng, page_visible, move |state| {
			render::render(state, &ctx, &theme, ratio.get());
		});

		on_cleanup(move || {
			frames.cancel();
			resize.remove();
			debug!("coming-soon: background torn down");
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="background-canvas"
			aria-hidden="true"
		/>
	}
}
