//! Site configuration.
//!
//! Every field has a built-in default. A host page may override any subset
//! once at startup with a JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "company_name": "AUDIT", "launch_date": "2026-03-01T00:00:00" }
//! </script>
//! ```

use chrono::format::ParseErrorKind;
use chrono::{Datelike, Local, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Id of the optional override block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// A link shown in the social icon row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
	/// Network name, also used as the accessible label.
	pub label: String,
	/// Link target.
	pub href: String,
}

impl SocialLink {
	fn placeholder(label: &str) -> Self {
		Self {
			label: label.to_string(),
			href: "#".to_string(),
		}
	}
}

/// Page text, launch instant and assets.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Brand name in the header, title and footer.
	pub company_name: String,
	/// One-line slogan under the heading.
	pub tagline: String,
	/// Paragraph under the tagline, also the meta description.
	pub description: String,
	/// Address in the footer `mailto:` link.
	pub contact_email: String,
	/// Local-time literal, `YYYY-MM-DDTHH:MM[:SS]`.
	pub launch_date: String,
	/// Image drawn behind the animated canvas.
	pub background_image: String,
	/// Background theme name (`aurora` or `ember`).
	pub theme: String,
	/// Social icon row, in display order.
	pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			company_name: "AUDIT".to_string(),
			tagline: "Auditing Today, Protecting Tomorrow".to_string(),
			description: "We're building something extraordinary. Be the first to experience \
			              the future of smart auditing solutions."
				.to_string(),
			contact_email: "hello@audit.com".to_string(),
			launch_date: "2026-03-01T00:00:00".to_string(),
			background_image: "/assets/background.jpg".to_string(),
			theme: "aurora".to_string(),
			social: ["Facebook", "Twitter", "Instagram", "LinkedIn", "YouTube"]
				.into_iter()
				.map(SocialLink::placeholder)
				.collect(),
		}
	}
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	/// The launch literal does not have the expected shape.
	#[error("launch date `{0}` is not of the form YYYY-MM-DDTHH:MM[:SS]")]
	LaunchDateFormat(String),
	/// The launch literal names a day or time that does not exist.
	#[error("launch date `{0}` is out of range")]
	LaunchDateRange(String),
	/// The override block could not be decoded.
	#[error("site config is not valid JSON: {0}")]
	Json(String),
}

const LAUNCH_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const LAUNCH_FORMAT_SHORT: &str = "%Y-%m-%dT%H:%M";

/// Launch dates before the Unix epoch are refused.
const EARLIEST_LAUNCH_YEAR: i32 = 1970;

/// A calendar instant in the visitor's local time zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchDate(NaiveDateTime);

impl LaunchDate {
	/// Parses `YYYY-MM-DDTHH:MM[:SS]`. Surrounding whitespace is ignored.
	pub fn parse(literal: &str) -> Result<Self, ConfigError> {
		let literal = literal.trim();
		let parsed = match NaiveDateTime::parse_from_str(literal, LAUNCH_FORMAT) {
			Err(e) if e.kind() == ParseErrorKind::TooShort => {
				NaiveDateTime::parse_from_str(literal, LAUNCH_FORMAT_SHORT)
			}
			other => other,
		};
		let naive = parsed.map_err(|e| match e.kind() {
			ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
				ConfigError::LaunchDateRange(literal.to_string())
			}
			_ => ConfigError::LaunchDateFormat(literal.to_string()),
		})?;
		// A leap second parses as second 59 with an oversized fraction.
		if naive.year() < EARLIEST_LAUNCH_YEAR || naive.nanosecond() >= 1_000_000_000 {
			return Err(ConfigError::LaunchDateRange(literal.to_string()));
		}
		Ok(Self(naive))
	}

	/// The wall-clock value as written.
	pub fn naive(&self) -> NaiveDateTime {
		self.0
	}

	/// Epoch milliseconds of this local-time instant.
	///
	/// A wall-clock time skipped by a DST change resolves to the same time
	/// one hour later.
	pub fn to_epoch_ms(&self) -> Option<f64> {
		Local
			.from_local_datetime(&self.0)
			.earliest()
			.or_else(|| Local.from_local_datetime(&(self.0 + TimeDelta::hours(1))).earliest())
			.map(|instant| instant.timestamp_millis() as f64)
	}
}

impl SiteConfig {
	/// Applies a JSON override on top of the defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
	}

	/// The launch instant in epoch milliseconds, if the literal is valid.
	pub fn launch_ms(&self) -> Option<f64> {
		match LaunchDate::parse(&self.launch_date) {
			Ok(date) => {
				let ms = date.to_epoch_ms();
				if ms.is_none() {
					warn!("coming-soon: launch date `{}` has no local instant", self.launch_date);
				}
				ms
			}
			Err(e) => {
				warn!("coming-soon: {}", e);
				None
			}
		}
	}

	/// First letter of the company name, for the logo badge.
	pub fn monogram(&self) -> String {
		self.company_name
			.chars()
			.next()
			.map(|c| c.to_uppercase().collect())
			.unwrap_or_default()
	}
}

/// Load the site configuration, honouring an override block with
/// id="site-config" in the host page when present.
pub fn load_site_config() -> SiteConfig {
	let Some(json_text) = config_block_text() else {
		return SiteConfig::default();
	};

	match SiteConfig::from_json(&json_text) {
		Ok(config) => {
			info!("coming-soon: loaded site config for {}", config.company_name);
			config
		}
		Err(e) => {
			warn!("coming-soon: {}, using defaults", e);
			SiteConfig::default()
		}
	}
}

fn config_block_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, sec: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(y, mo, d)
			.unwrap()
			.and_hms_opt(h, mi, sec)
			.unwrap()
	}

	#[test]
	fn parses_full_and_short_literals() {
		let full = LaunchDate::parse("2026-03-01T00:00:00").unwrap();
		assert_eq!(full.naive(), at(2026, 3, 1, 0, 0, 0));
		let short = LaunchDate::parse(" 2028-02-29T23:59 ").unwrap();
		assert_eq!(short.naive(), at(2028, 2, 29, 23, 59, 0));
	}

	#[test]
	fn rejects_malformed_literals() {
		for literal in [
			"",
			"soon",
			"2026-03-01",
			"2026-03-01T00",
			"2026-03-01 00:00:00",
			"2026-03-01T00:00:00Z",
			"2026/03/01T00:00:00",
		] {
			assert!(
				matches!(LaunchDate::parse(literal), Err(ConfigError::LaunchDateFormat(_))),
				"{literal:?}"
			);
		}
	}

	#[test]
	fn rejects_out_of_range_fields() {
		for literal in [
			"2026-13-01T00:00:00",
			"2026-00-10T00:00:00",
			"2026-02-29T00:00:00",
			"2026-04-31T00:00:00",
			"2026-03-01T24:00:00",
			"2026-03-01T12:60:00",
			"2026-03-01T12:00:60",
			"2026-03-01T24:00",
		] {
			assert!(
				matches!(LaunchDate::parse(literal), Err(ConfigError::LaunchDateRange(_))),
				"{literal:?}"
			);
		}
		assert!(LaunchDate::parse("2000-02-29T00:00:00").is_ok());
		assert!(LaunchDate::parse("1900-02-29T00:00:00").is_err());
	}

	#[test]
	fn two_digit_era_years_are_refused() {
		for literal in ["0050-01-01T00:00:00", "0000-02-29T00:00:00", "1969-12-31T23:59:59"] {
			assert_eq!(
				LaunchDate::parse(literal),
				Err(ConfigError::LaunchDateRange(literal.to_string())),
			);
		}
		assert!(LaunchDate::parse("1970-01-02T00:00").is_ok());
	}

	#[test]
	fn epoch_ms_follows_local_calendar() {
		let first = LaunchDate::parse("2026-01-10T12:00").unwrap();
		let next = LaunchDate::parse("2026-01-11T12:00").unwrap();
		let (a, b) = (first.to_epoch_ms().unwrap(), next.to_epoch_ms().unwrap());
		assert_eq!(b - a, 86_400_000.0);
		let expected = Local
			.from_local_datetime(&at(2026, 1, 10, 12, 0, 0))
			.earliest()
			.unwrap()
			.timestamp_millis() as f64;
		assert_eq!(a, expected);
		// Year 2026 in any zone is well past 2025-01-01T00:00Z.
		assert!(a > 1_735_689_600_000.0);
	}

	#[test]
	fn default_launch_date_resolves() {
		assert!(SiteConfig::default().launch_ms().is_some());
		let broken = SiteConfig {
			launch_date: "0099-01-01T00:00".into(),
			..SiteConfig::default()
		};
		assert_eq!(broken.launch_ms(), None);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config = SiteConfig::from_json(r#"{ "company_name": "Nimbus", "theme": "ember" }"#).unwrap();
		let defaults = SiteConfig::default();
		assert_eq!(config.company_name, "Nimbus");
		assert_eq!(config.theme, "ember");
		assert_eq!(config.tagline, defaults.tagline);
		assert_eq!(config.launch_date, defaults.launch_date);
		assert_eq!(config.social.len(), 5);
	}

	#[test]
	fn social_links_can_be_replaced() {
		let config = SiteConfig::from_json(
			r#"{ "social": [{ "label": "YouTube", "href": "https://youtube.com/@audit" }] }"#,
		)
		.unwrap();
		assert_eq!(
			config.social,
			vec![SocialLink {
				label: "YouTube".into(),
				href: "https://youtube.com/@audit".into()
			}]
		);
	}

	#[test]
	fn invalid_json_is_reported() {
		assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
		assert!(matches!(
			SiteConfig::from_json(r#"{ "company_name": 12 }"#),
			Err(ConfigError::Json(_))
		));
	}

	#[test]
	fn monogram_uses_first_letter() {
		assert_eq!(SiteConfig::default().monogram(), "A");
		let config = SiteConfig {
			company_name: "ćma".into(),
			..SiteConfig::default()
		};
		assert_eq!(config.monogram(), "Ć");
		let empty = SiteConfig {
			company_name: String::new(),
			..SiteConfig::default()
		};
		assert_eq!(empty.monogram(), "");
	}
}
