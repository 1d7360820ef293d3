//! Email capture form.
//!
//! Validation is local only and delivery is simulated: a valid address
//! waits [`SIMULATED_LATENCY`] and always succeeds.

use std::sync::LazyLock;
use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;
use regex::Regex;
use thiserror::Error;

use super::toast::{ToastKind, Toasts, use_toasts};
use crate::host::{BrowserScheduler, Scheduler, TaskHandle};

/// Delay of the stubbed signup call.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Notice shown once the signup completes.
pub const SUCCESS_MESSAGE: &str = "Thank you! We'll notify you when we launch.";

static EMAIL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Why an address was refused. The message is shown to the visitor as is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
	/// Nothing but whitespace was entered.
	#[error("Please enter your email address")]
	Empty,
	/// The address lacks a local part, an `@` or a dotted domain.
	#[error("Please enter a valid email address")]
	Malformed,
}

/// Checks an address and returns it trimmed.
pub fn validate_email(input: &str) -> Result<&str, EmailError> {
	let address = input.trim();
	if address.is_empty() {
		return Err(EmailError::Empty);
	}
	if !EMAIL.is_match(address) {
		return Err(EmailError::Malformed);
	}
	Ok(address)
}

/// Stubbed signup: `on_done` runs after [`SIMULATED_LATENCY`].
pub fn submit_signup<S: Scheduler>(scheduler: &S, on_done: impl FnOnce() + 'static) -> TaskHandle {
	scheduler.after(SIMULATED_LATENCY, on_done)
}

/// Reactive state behind [`EmailCapture`].
#[derive(Clone, Copy)]
pub struct SignupForm {
	/// Text currently in the input.
	pub email: RwSignal<String>,
	/// True from a valid submit until the signup completes.
	pub loading: RwSignal<bool>,
	toasts: Toasts,
	pending: StoredValue<Option<TaskHandle>>,
}

impl SignupForm {
	/// An empty, enabled form reporting through `toasts`.
	pub fn new(toasts: Toasts) -> Self {
		Self {
			email: RwSignal::new(String::new()),
			loading: RwSignal::new(false),
			toasts,
			pending: StoredValue::new(None),
		}
	}

	/// Validate the input and start the signup.
	///
	/// Returns `false` when nothing was started: a signup is already in
	/// flight, or the address was refused (an error notice is shown).
	pub fn submit<S: Scheduler + Clone + 'static>(&self, scheduler: &S) -> bool {
		if self.loading.get_untracked() {
			return false;
		}
		if let Err(e) = validate_email(&self.email.get_untracked()) {
			self.toasts.show_with(scheduler, ToastKind::Error, e.to_string());
			return false;
		}

		self.loading.set(true);
		info!("coming-soon: signup submitted");
		let (form, notices) = (*self, scheduler.clone());
		let task = submit_signup(scheduler, move || {
			form.toasts.show_with(&notices, ToastKind::Success, SUCCESS_MESSAGE);
			form.email.set(String::new());
			form.loading.set(false);
			let _ = form.pending.try_set_value(None);
		});
		self.pending.set_value(Some(task));
		true
	}

	/// Drop an in-flight signup without completing it.
	pub fn cancel(&self) {
		let _ = self.pending.try_update_value(|pending| {
			if let Some(task) = pending.take() {
				task.cancel();
			}
		});
	}
}

/// Email input with a "Notify Me" button.
#[component]
pub fn EmailCapture() -> impl IntoView {
	let form = SignupForm::new(use_toasts());
	let SignupForm { email, loading, .. } = form;
	on_cleanup(move || form.cancel());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		form.submit(&BrowserScheduler);
	};

	view! {
		<form
			class="email-capture fade-up"
			style="animation-delay: 0.3s"
			novalidate=true
			on:submit=on_submit
		>
			<input
				type="email"
				class="email-input"
				placeholder="Enter your email"
				aria-label="Email address"
				prop:value=move || email.get()
				on:input=move |ev| email.set(event_target_value(&ev))
				disabled=move || loading.get()
			/>
			<button type="submit" class="notify-button" disabled=move || loading.get()>
				<Show when=move || loading.get() fallback=|| "Notify Me">
					<span class="sending">
						<span class="spinner" aria-hidden="true"></span>
						"Sending..."
					</span>
				</Show>
			</button>
		</form>
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;
	use crate::host::scheduler::manual::ManualScheduler;

	#[test]
	fn empty_input_is_refused() {
		assert_eq!(validate_email(""), Err(EmailError::Empty));
		assert_eq!(validate_email("   "), Err(EmailError::Empty));
		assert_eq!(
			EmailError::Empty.to_string(),
			"Please enter your email address"
		);
	}

	#[test]
	fn malformed_addresses_are_refused() {
		for input in [
			"plainaddress",
			"@example.com",
			"user@",
			"user@example",
			"user@@example.com",
			"us er@example.com",
			"user@exa mple.com",
			"user@.com",
		] {
			assert_eq!(validate_email(input), Err(EmailError::Malformed), "{input:?}");
		}
		assert_eq!(
			EmailError::Malformed.to_string(),
			"Please enter a valid email address"
		);
	}

	#[test]
	fn valid_addresses_are_trimmed() {
		assert_eq!(validate_email("hello@audit.com"), Ok("hello@audit.com"));
		assert_eq!(validate_email("  first.last+tag@sub.example.co  "), Ok("first.last+tag@sub.example.co"));
		assert_eq!(validate_email("a@b.c"), Ok("a@b.c"));
	}

	fn form_with(input: &str) -> (SignupForm, Toasts) {
		let toasts = Toasts::new();
		let form = SignupForm::new(toasts);
		form.email.set(input.to_string());
		(form, toasts)
	}

	fn notices(toasts: &Toasts) -> Vec<(ToastKind, String)> {
		toasts
			.visible()
			.into_iter()
			.map(|t| (t.kind, t.message))
			.collect()
	}

	#[test]
	fn valid_submit_disables_then_clears_and_reenables() {
		let scheduler = Rc::new(ManualScheduler::new());
		let (form, toasts) = form_with("  hello@audit.com ");

		assert!(form.submit(&scheduler));
		assert!(form.loading.get_untracked());
		assert!(!form.submit(&scheduler), "second submit while sending");
		assert_eq!(scheduler.live_tasks(), 1);

		scheduler.advance(Duration::from_millis(999));
		assert!(form.loading.get_untracked());
		assert_eq!(form.email.get_untracked(), "  hello@audit.com ");
		assert!(notices(&toasts).is_empty());

		scheduler.advance(Duration::from_millis(1));
		assert!(!form.loading.get_untracked());
		assert_eq!(form.email.get_untracked(), "");
		assert_eq!(notices(&toasts), vec![(ToastKind::Success, SUCCESS_MESSAGE.to_string())]);

		form.email.set("again@audit.com".into());
		assert!(form.submit(&scheduler));
	}

	#[test]
	fn refused_address_shows_error_and_stays_enabled() {
		let scheduler = Rc::new(ManualScheduler::new());
		let (form, toasts) = form_with("user@example");

		assert!(!form.submit(&scheduler));
		assert!(!form.loading.get_untracked());
		assert_eq!(
			notices(&toasts),
			vec![(ToastKind::Error, "Please enter a valid email address".to_string())]
		);
		assert_eq!(form.email.get_untracked(), "user@example");
	}

	#[test]
	fn cancelled_signup_never_completes() {
		let scheduler = Rc::new(ManualScheduler::new());
		let (form, toasts) = form_with("hello@audit.com");

		assert!(form.submit(&scheduler));
		form.cancel();
		scheduler.advance(Duration::from_secs(5));
		assert!(notices(&toasts).is_empty());
		assert_eq!(form.email.get_untracked(), "hello@audit.com");
		assert_eq!(scheduler.live_tasks(), 0);
	}

	#[test]
	fn signup_completes_after_simulated_latency() {
		let scheduler = ManualScheduler::new();
		let done = Rc::new(Cell::new(false));
		let flag = done.clone();

		let _task = submit_signup(&scheduler, move || flag.set(true));
		scheduler.advance(Duration::from_millis(999));
		assert!(!done.get());
		scheduler.advance(Duration::from_millis(1));
		assert!(done.get());
	}
}
