//! Canvas rendering for the animated background.
//!
//! Each frame clears the surface and redraws everything in two passes:
//! 1. Light beams (soft stroked curves)
//! 2. Particles (outer glow, then inner core)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::beams;
use super::particles::{FieldState, Particle};
use super::theme::{BeamStyle, Color, Theme};

/// Renders one frame. `pixel_ratio` maps CSS pixels to device pixels.
pub fn render(state: &FieldState, ctx: &CanvasRenderingContext2d, theme: &Theme, pixel_ratio: f64) {
	let _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	for beam in &theme.beams {
		draw_beam(state, ctx, beam);
	}

	for p in &state.particles {
		draw_particle(ctx, p);
	}
}

fn draw_beam(state: &FieldState, ctx: &CanvasRenderingContext2d, beam: &BeamStyle) {
	let points = beams::sample(beam, state.time, state.width, state.height);
	let Some((&(x0, y0), rest)) = points.split_first() else {
		return;
	};

	// Fades in from the left edge and out at the right.
	let gradient = ctx.create_linear_gradient(0.0, 0.0, state.width, 0.0);
	let _ = gradient.add_color_stop(0.0, &beam.color.with_alpha(0.0).to_css());
	let _ = gradient.add_color_stop(0.5, &beam.color.to_css());
	let _ = gradient.add_color_stop(1.0, &beam.color.with_alpha(0.0).to_css());

	ctx.save();
	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(beam.line_width);
	ctx.set_line_cap("round");
	ctx.set_shadow_blur(beam.glow);
	ctx.set_shadow_color(&beam.color.to_css());

	ctx.begin_path();
	ctx.move_to(x0, y0);
	for &(x, y) in rest {
		ctx.line_to(x, y);
	}
	ctx.stroke();
	ctx.restore();
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle) {
	let glow_radius = p.radius * 4.0;

	if let Ok(glow) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, glow_radius) {
		let _ = glow.add_color_stop(0.0, &p.color.with_alpha(p.opacity * 0.5).to_css());
		let _ = glow.add_color_stop(1.0, &p.color.with_alpha(0.0).to_css());

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&glow);
		ctx.fill();
	}

	if let Ok(core) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.radius) {
		let white = Color::rgb(255, 255, 255);
		let _ = core.add_color_stop(0.0, &p.color.lerp(white, 0.5).with_alpha(p.opacity).to_css());
		let _ = core.add_color_stop(1.0, &p.color.with_alpha(p.opacity).to_css());

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&core);
		ctx.fill();
	}
}
