//! Leptos Toast Notifications
//!
//! Transient `{title, description, variant}` messages for Leptos apps.
//! The queue is plain data so it can be tested without a browser; the
//! `Toaster` handle wraps it in a signal and schedules auto-dismissal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Visual style of a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Errors and rejected input
    Destructive,
}

impl ToastVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Most toasts visible at once; older ones are dropped first
pub const DEFAULT_TOAST_LIMIT: usize = 3;

/// Ordered toast list, newest last
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(DEFAULT_TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Add a toast and return its id
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        if self.toasts.len() > self.limit {
            let overflow = self.toasts.len() - self.limit;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle to the app-wide toast queue
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    duration_ms: i32,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms: i32::try_from(duration_ms).unwrap_or(i32::MAX),
        }
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) {
        let title = title.into();
        log::debug!("[toast] {:?}: {}", variant, title);
        let mut id = 0;
        self.queue.update(|q| id = q.push(title, description, variant));
        self.schedule_dismiss(id);
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title, description, ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title, description, ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    fn schedule_dismiss(&self, id: u64) {
        let Some(win) = web_sys::window() else { return };
        let toaster = *self;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            toaster.dismiss(id);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            self.duration_ms,
        );
        cb.forget();
    }
}

/// Create a toaster and provide it to all children
pub fn provide_toaster(duration_ms: u32) -> Toaster {
    let toaster = Toaster::new(duration_ms);
    provide_context(toaster);
    toaster
}

/// Get the toaster from context
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Fixed-position stack rendering the current toasts
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <ol class="toast-viewport">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li class=toast.variant.class() role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title}</div>
                                <div class="toast-description">{toast.description}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
