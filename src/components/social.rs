//! Row of social network links.

use leptos::prelude::*;

use crate::config::SocialLink;

/// SVG path data (24x24 viewBox, stroked) for a network name.
///
/// Unknown networks fall back to a plain link glyph.
pub fn icon_path(label: &str) -> &'static str {
	match label.to_ascii_lowercase().as_str() {
		"facebook" => "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
		"twitter" | "x" => {
			"M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
		}
		"instagram" => {
			"M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zm9 9.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4zM17.5 6.5h.01"
		}
		"linkedin" => {
			"M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"
		}
		"youtube" => {
			"M2.5 17a24 24 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.6 49.6 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24 24 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.6 49.6 0 0 1-16.2 0A2 2 0 0 1 2.5 17M10 15l5-3-5-3z"
		}
		_ => "M10 13a5 5 0 0 0 7.5.5l3-3a5 5 0 0 0-7-7l-1.7 1.7M14 11a5 5 0 0 0-7.5-.5l-3 3a5 5 0 0 0 7 7l1.7-1.7",
	}
}

/// Circular icon links, staggered in after the countdown.
#[component]
pub fn SocialIcons(links: Vec<SocialLink>) -> impl IntoView {
	let icons = links
		.into_iter()
		.enumerate()
		.map(|(index, link)| {
			let delay = format!("animation-delay: {:.1}s", 0.6 + index as f64 * 0.1);
			let path = icon_path(&link.label);
			view! {
				<a
					href=link.href
					aria-label=link.label
					class="social-link fade-up"
					style=delay
					target="_blank"
					rel="noopener noreferrer"
				>
					<svg
						class="social-icon"
						viewBox="0 0 24 24"
						fill="none"
						stroke="currentColor"
						stroke-width="2"
						stroke-linecap="round"
						stroke-linejoin="round"
						aria-hidden="true"
					>
						<path d=path></path>
					</svg>
				</a>
			}
		})
		.collect_view();

	view! { <nav class="social-links">{icons}</nav> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_networks_have_distinct_glyphs() {
		let labels = ["Facebook", "Twitter", "Instagram", "LinkedIn", "YouTube"];
		let paths: Vec<_> = labels.iter().map(|l| icon_path(l)).collect();
		for (i, a) in paths.iter().enumerate() {
			for b in &paths[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}

	#[test]
	fn lookup_ignores_case_and_falls_back() {
		assert_eq!(icon_path("YOUTUBE"), icon_path("youtube"));
		assert_eq!(icon_path("x"), icon_path("Twitter"));
		assert_eq!(icon_path("Mastodon"), icon_path("unknown"));
	}
}
