//! Transient notices shown at the top of the page.

use std::time::Duration;

use leptos::prelude::*;

use crate::host::{BrowserScheduler, Scheduler};

/// How long a notice stays up unless dismissed.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

/// Visual flavour of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	/// Confirmation, green accent.
	Success,
	/// Refusal, red accent.
	Error,
}

/// One visible notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
	/// Unique within the queue, never reused.
	pub id: u64,
	/// Success or error styling.
	pub kind: ToastKind,
	/// Text shown to the visitor.
	pub message: String,
}

/// Ordered list of visible notices, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
	items: Vec<Toast>,
	next_id: u64,
}

impl ToastQueue {
	/// Append a notice and return its id.
	pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.items.push(Toast {
			id,
			kind,
			message: message.into(),
		});
		id
	}

	/// Remove a notice. Unknown ids are ignored.
	pub fn dismiss(&mut self, id: u64) {
		self.items.retain(|t| t.id != id);
	}

	/// Visible notices, oldest first.
	pub fn items(&self) -> &[Toast] {
		&self.items
	}
}

/// Handle to the page's toast queue, shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
	queue: RwSignal<ToastQueue>,
}

impl Toasts {
	pub(crate) fn new() -> Self {
		Self {
			queue: RwSignal::new(ToastQueue::default()),
		}
	}

	/// Push a notice and arrange for it to leave after [`TOAST_LIFETIME`].
	pub fn show_with<S: Scheduler>(
		&self,
		scheduler: &S,
		kind: ToastKind,
		message: impl Into<String>,
	) -> u64 {
		let queue = self.queue;
		let mut id = 0;
		queue.update(|q| id = q.push(kind, message));
		// The page may be gone by the time this fires.
		let _ = scheduler.after(TOAST_LIFETIME, move || {
			let _ = queue.try_update(|q| q.dismiss(id));
		});
		id
	}

	/// Green notice, dismissed by the browser timer.
	pub fn success(&self, message: impl Into<String>) {
		self.show_with(&BrowserScheduler, ToastKind::Success, message);
	}

	/// Red notice, dismissed by the browser timer.
	pub fn error(&self, message: impl Into<String>) {
		self.show_with(&BrowserScheduler, ToastKind::Error, message);
	}

	/// Remove a notice before its lifetime ends.
	pub fn dismiss(&self, id: u64) {
		self.queue.update(|q| q.dismiss(id));
	}

	/// Snapshot of the visible notices. Tracks the queue when read inside
	/// a reactive scope.
	pub fn visible(&self) -> Vec<Toast> {
		self.queue.with(|q| q.items().to_vec())
	}
}

/// Create the toast queue and expose it to descendants.
pub fn provide_toasts() -> Toasts {
	let toasts = Toasts::new();
	provide_context(toasts);
	toasts
}

/// The toast queue provided by an ancestor.
pub fn use_toasts() -> Toasts {
	expect_context::<Toasts>()
}

/// Renders the visible notices. Clicking one dismisses it.
#[component]
pub fn Toaster() -> impl IntoView {
	let toasts = use_toasts();

	view! {
		<div class="toaster" role="status" aria-live="polite">
			<For
				each=move || toasts.visible()
				key=|toast| toast.id
				children=move |toast| {
					let class = match toast.kind {
						ToastKind::Success => "toast toast-success",
						ToastKind::Error => "toast toast-error",
					};
					let id = toast.id;
					view! {
						<div class=class on:click=move |_| toasts.dismiss(id)>
							{toast.message}
						</div>
					}
				}
			/>
		</div>
	}
}
