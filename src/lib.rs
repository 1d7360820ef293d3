//! coming-soon: an animated "coming soon" landing page.
//!
//! This crate provides a WASM page with a particle/light-beam canvas
//! background, a countdown to the launch date, an email capture form and
//! social links.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;
pub mod config;
pub mod host;

use components::background::{AnimatedBackground, Theme};
use components::countdown::CountdownTimer;
use components::email::EmailCapture;
use components::social::SocialIcons;
use components::toast::{Toaster, provide_toasts};
pub use config::{SiteConfig, load_site_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("coming-soon: logging initialized");
}

/// Main application component.
/// Loads the site configuration and composes the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_toasts();

	let config = load_site_config();
	let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
		warn!("coming-soon: unknown theme `{}`, using default", config.theme);
		Theme::default()
	});
	let launch_ms = config.launch_ms();
	let year = host::clock::current_year();

	let title = format!("{} | Coming Soon", config.company_name);
	let background_style = format!("background-image: url('{}')", config.background_image);
	let mailto = format!("mailto:{}", config.contact_email);
	let copyright = format!("© {} {}. All rights reserved.", year, config.company_name);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="description" content=config.description.clone() />
		<Meta name="viewport" content="width=device-width, initial-scale=1" />

		<Toaster />

		<div class="backdrop">
			<div class="backdrop-image" style=background_style></div>
			<AnimatedBackground theme=theme />
		</div>

		<div class="page">
			<header class="page-header">
				<div class="brand fade-up">
					<div class="brand-badge">{config.monogram()}</div>
					<span class="brand-name">{config.company_name.clone()}</span>
				</div>
			</header>

			<main class="page-main">
				<div class="hero">
					<h1 class="hero-title fade-up" style="animation-delay: 0.1s">"Coming Soon"</h1>
					<p class="hero-tagline fade-up" style="animation-delay: 0.15s">
						{config.tagline.clone()}
					</p>
					<p class="hero-description fade-up" style="animation-delay: 0.2s">
						{config.description.clone()}
					</p>
				</div>

				<EmailCapture />

				<section class="launch">
					<p class="launch-caption fade-up" style="animation-delay: 0.35s">"Launching in"</p>
					<CountdownTimer target_ms=launch_ms />
				</section>

				<SocialIcons links=config.social.clone() />
			</main>

			<footer class="page-footer fade-up" style="animation-delay: 0.8s">
				<p class="contact">
					"Questions? Reach out to us at "
					<a href=mailto class="contact-link">{config.contact_email.clone()}</a>
				</p>
				<p class="copyright">{copyright}</p>
			</footer>
		</div>
	}
}
