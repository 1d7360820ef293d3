//! Visual theming for the animated background.
//!
//! Provides the particle palette, the two light-beam styles, and the
//! random ranges particles are drawn from.

use std::ops::Range;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with alpha replaced, clamped to `[0, 1]`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// Hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Random ranges and palette for generated particles.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Particle colors, picked uniformly per particle
	pub palette: [Color; 5],
	/// Horizontal speed range
	pub speed: Range<f64>,
	/// Radius range in CSS pixels
	pub radius: Range<f64>,
	/// Opacity range
	pub opacity: Range<f64>,
	/// Vertical band for baselines, as fractions of the viewport height
	pub band: Range<f64>,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			palette: [
				Color::rgb(56, 189, 248),  // Sky
				Color::rgb(139, 92, 246),  // Violet
				Color::rgb(45, 212, 191),  // Teal
				Color::rgb(236, 72, 153),  // Rose
				Color::rgb(226, 232, 240), // Mist
			],
			speed: 0.2..0.7,
			radius: 0.5..2.5,
			opacity: 0.3..1.0,
			band: 0.4..0.9,
		}
	}
}

/// A soft stroked curve drifting across the viewport.
#[derive(Clone, Debug)]
pub struct BeamStyle {
	/// Stroke color at the middle of the gradient.
	pub color: Color,
	/// Vertical anchor as a fraction of the viewport height
	pub base: f64,
	/// Primary wave amplitude in pixels
	pub amplitude: f64,
	/// Horizontal frequency in radians per pixel
	pub frequency: f64,
	/// Temporal speed multiplier
	pub speed: f64,
	/// Stroke width in pixels
	pub line_width: f64,
	/// Shadow blur radius used for the glow
	pub glow: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Name used by the site config.
	pub name: &'static str,
	/// Palette and ranges for the particle field.
	pub particles: ParticleStyle,
	/// The two light beams, back to front.
	pub beams: [BeamStyle; 2],
}

impl Theme {
	/// Cool cyan/violet theme (default)
	pub fn aurora() -> Self {
		Self {
			name: "aurora",
			particles: ParticleStyle::default(),
			beams: [
				BeamStyle {
					color: Color::rgba(56, 189, 248, 0.35),
					base: 0.55,
					amplitude: 60.0,
					frequency: 0.003,
					speed: 1.0,
					line_width: 2.0,
					glow: 24.0,
				},
				BeamStyle {
					color: Color::rgba(168, 85, 247, 0.3),
					base: 0.7,
					amplitude: 45.0,
					frequency: 0.0022,
					speed: -0.8,
					line_width: 1.5,
					glow: 30.0,
				},
			],
		}
	}

	/// Warm amber/rose theme
	pub fn ember() -> Self {
		Self {
			name: "ember",
			particles: ParticleStyle {
				palette: [
					Color::rgb(251, 191, 36),  // Amber
					Color::rgb(249, 115, 22),  // Orange
					Color::rgb(244, 63, 94),   // Rose
					Color::rgb(253, 224, 71),  // Gold
					Color::rgb(254, 243, 199), // Cream
				],
				..ParticleStyle::default()
			},
			beams: [
				BeamStyle {
					color: Color::rgba(251, 146, 60, 0.35),
					base: 0.6,
					amplitude: 55.0,
					frequency: 0.0028,
					speed: 0.9,
					line_width: 2.0,
					glow: 24.0,
				},
				BeamStyle {
					color: Color::rgba(244, 63, 94, 0.28),
					base: 0.75,
					amplitude: 40.0,
					frequency: 0.002,
					speed: -0.7,
					line_width: 1.5,
					glow: 28.0,
				},
			],
		}
	}

	/// Look up a theme by its `name`.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"aurora" => Some(Self::aurora()),
			"ember" => Some(Self::ember()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::aurora()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_switches_on_alpha() {
		assert_eq!(Color::rgb(56, 189, 248).to_css(), "#38bdf8");
		assert_eq!(
			Color::rgb(56, 189, 248).with_alpha(0.5).to_css(),
			"rgba(56, 189, 248, 0.5)"
		);
	}

	#[test]
	fn with_alpha_clamps() {
		assert_eq!(Color::rgb(1, 2, 3).with_alpha(1.7).a, 1.0);
		assert_eq!(Color::rgb(1, 2, 3).with_alpha(-0.2).a, 0.0);
	}

	#[test]
	fn beams_use_distinct_hues() {
		for theme in [Theme::aurora(), Theme::ember()] {
			let [a, b] = &theme.beams;
			assert_ne!((a.color.r, a.color.g, a.color.b), (b.color.r, b.color.g, b.color.b));
			assert_eq!(Theme::by_name(theme.name).map(|t| t.name), Some(theme.name));
		}
		assert!(Theme::by_name("neon").is_none());
	}
}
