//! Wave-driven particle field.
//!
//! Particles drift rightwards along a band in the lower part of the viewport
//! while two summed waves move them vertically around their baseline. The
//! whole field is regenerated whenever the viewport changes size.

use std::f64::consts::TAU;

use rand::Rng;

use super::theme::{Color, ParticleStyle};

/// Viewport area (square CSS pixels) per particle.
pub const AREA_PER_PARTICLE: f64 = 3000.0;
/// Simulation time added per step.
pub const TIME_STEP: f64 = 0.005;
/// Distance past the right edge at which a particle wraps to the left.
pub const WRAP_MARGIN: f64 = 10.0;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in CSS pixels.
	pub x: f64,
	/// Vertical position, recomputed from the baseline every step.
	pub y: f64,
	/// Anchor the wave motion oscillates around.
	pub baseline_y: f64,
	/// Rightward drift factor.
	pub speed: f64,
	/// Core radius; the glow extends to four times this.
	pub radius: f64,
	/// Palette entry, drawn at `opacity`.
	pub color: Color,
	/// Core alpha in `[0, 1]`.
	pub opacity: f64,
	/// Offset that decorrelates the waves between particles.
	pub phase: f64,
}

/// Number of particles for a viewport, `floor(w * h / 3000)`.
pub fn particle_count(width: f64, height: f64) -> usize {
	if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
		return 0;
	}
	(width * height / AREA_PER_PARTICLE).floor() as usize
}

fn sample_baseline<R: Rng + ?Sized>(style: &ParticleStyle, height: f64, rng: &mut R) -> f64 {
	rng.gen_range(height * style.band.start..height * style.band.end)
}

/// Builds a fresh particle field for the given viewport.
pub fn generate<R: Rng + ?Sized>(
	style: &ParticleStyle,
	width: f64,
	height: f64,
	rng: &mut R,
) -> Vec<Particle> {
	let count = particle_count(width, height);
	let mut particles = Vec::with_capacity(count);

	for _ in 0..count {
		let baseline_y = sample_baseline(style, height, rng);
		particles.push(Particle {
			x: rng.gen_range(0.0..width),
			y: baseline_y,
			baseline_y,
			speed: rng.gen_range(style.speed.clone()),
			radius: rng.gen_range(style.radius.clone()),
			color: style.palette[rng.gen_range(0..style.palette.len())],
			opacity: rng.gen_range(style.opacity.clone()),
			phase: rng.gen_range(0.0..TAU),
		});
	}

	particles
}

/// Advances one particle to simulation time `t`.
///
/// Only the wrap at the right edge consumes randomness; otherwise the result
/// depends on `(t, particle, width, height)` alone.
pub fn step_particle<R: Rng + ?Sized>(
	p: &mut Particle,
	t: f64,
	width: f64,
	height: f64,
	style: &ParticleStyle,
	rng: &mut R,
) {
	let wave1 = (2.0 * t + p.phase + p.x * 0.002).sin() * 40.0;
	let wave2 = (1.5 * t + p.phase * 0.5 + p.x * 0.003).cos() * 25.0;
	p.y = p.baseline_y + wave1 + wave2;
	p.x += p.speed * 0.3;

	if p.x > width + WRAP_MARGIN {
		p.x = -WRAP_MARGIN;
		p.baseline_y = sample_baseline(style, height, rng);
	}
}

/// Everything the animation loop mutates between frames.
#[derive(Clone, Debug)]
pub struct FieldState {
	/// Current particles, replaced wholesale on resize.
	pub particles: Vec<Particle>,
	/// Simulation time accumulator.
	pub time: f64,
	/// Viewport width in CSS pixels.
	pub width: f64,
	/// Viewport height in CSS pixels.
	pub height: f64,
	style: ParticleStyle,
}

impl FieldState {
	/// Generate a fresh field for a `width` x `height` viewport at time zero.
	pub fn new<R: Rng + ?Sized>(style: ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		Self {
			particles: generate(&style, width, height, rng),
			time: 0.0,
			width,
			height,
			style,
		}
	}

	/// Replace the whole field for a new viewport. Time keeps running.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.particles = generate(&self.style, width, height, rng);
		self.width = width;
		self.height = height;
	}

	/// Advance the simulation by one frame.
	pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		self.time += TIME_STEP;
		for p in &mut self.particles {
			step_particle(p, self.time, self.width, self.height, &self.style, rng);
		}
	}
}
