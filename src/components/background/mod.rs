//! Animated page background.
//!
//! Renders a full-viewport canvas behind the page content with:
//! - A particle field sized to the viewport area, drifting on two summed waves
//! - Two soft light beams sweeping across the width
//! - Regeneration of the field on every window resize
//!
//! The simulation lives in [`FieldState`] and is stepped by [`animate`], both
//! independent of the canvas, so the motion can be tested without a browser.

mod beams;
mod component;
mod driver;
mod particles;
mod render;
pub mod theme;

pub use component::AnimatedBackground;
pub use driver::animate;
pub use particles::{FieldState, Particle, generate, particle_count};
pub use theme::{Color, Theme};
