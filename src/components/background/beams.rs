//! Light-beam curves.
//!
//! A beam is a sine/cosine composite sampled across the viewport width at a
//! fixed horizontal step. Sampling is kept apart from drawing so the curve
//! can be checked without a canvas.

use super::theme::BeamStyle;

/// Horizontal distance between samples, in CSS pixels.
pub const SAMPLE_STEP: f64 = 8.0;

/// Vertical position of `beam` at horizontal position `x` and time `t`.
pub fn beam_y(beam: &BeamStyle, x: f64, t: f64, height: f64) -> f64 {
	let phase = t * beam.speed;
	height * beam.base
		+ (x * beam.frequency + phase).sin() * beam.amplitude
		+ (x * beam.frequency * 0.5 + phase * 0.7).cos() * beam.amplitude * 0.5
}

/// Points along the beam from `x = 0` to `x = width`, both ends included.
pub fn sample(beam: &BeamStyle, t: f64, width: f64, height: f64) -> Vec<(f64, f64)> {
	if !(width.is_finite() && height.is_finite()) || width <= 0.0 {
		return Vec::new();
	}

	let steps = (width / SAMPLE_STEP).ceil() as usize;
	(0..=steps)
		.map(|i| {
			let x = (i as f64 * SAMPLE_STEP).min(width);
			(x, beam_y(beam, x, t, height))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::background::theme::Theme;

	#[test]
	fn samples_span_the_full_width() {
		let beam = &Theme::aurora().beams[0];
		for width in [8.0, 100.0, 1280.0, 1283.5] {
			let points = sample(beam, 1.0, width, 720.0);
			assert_eq!(points.first().map(|p| p.0), Some(0.0));
			assert_eq!(points.last().map(|p| p.0), Some(width));
			for pair in points.windows(2) {
				let dx = pair[1].0 - pair[0].0;
				assert!(dx > 0.0 && dx <= SAMPLE_STEP, "step {dx} at width {width}");
			}
		}
	}

	#[test]
	fn curve_stays_within_its_amplitude_band() {
		let theme = Theme::aurora();
		for beam in &theme.beams {
			let center = 720.0 * beam.base;
			let reach = beam.amplitude * 1.5;
			for t in [0.0, 0.7, 12.3, 400.0] {
				for (_, y) in sample(beam, t, 1920.0, 720.0) {
					assert!(y.is_finite());
					assert!((y - center).abs() <= reach + 1e-9);
				}
			}
		}
	}

	#[test]
	fn sampling_is_deterministic_in_time() {
		let beam = &Theme::aurora().beams[1];
		assert_eq!(sample(beam, 3.5, 640.0, 480.0), sample(beam, 3.5, 640.0, 480.0));
		assert_ne!(sample(beam, 3.5, 640.0, 480.0), sample(beam, 3.6, 640.0, 480.0));
	}

	#[test]
	fn empty_viewport_has_no_points() {
		let beam = &Theme::aurora().beams[0];
		assert!(sample(beam, 0.0, 0.0, 480.0).is_empty());
		assert!(sample(beam, 0.0, f64::NAN, 480.0).is_empty());
	}
}
