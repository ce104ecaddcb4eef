//! Toast Notification Component
//!
//! A single transient message; the page owning the signal replaces or clears
//! it after `TOAST_DISMISS_MS`.

use leptos::prelude::*;

/// Auto-dismiss delay
pub const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

/// Fixed-position transient notification
#[component]
pub fn Toast(message: ReadSignal<Option<ToastMessage>>) -> impl IntoView {
    view! {
        {move || message.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="alert">{toast.text}</div>
            }
        })}
    }
}
