use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

/// A dismissible warning shown in the corner of the window.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub text: String,
}

impl ToastMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            text: text.into(),
        }
    }
}

pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, message: impl Into<String>) {
    let message = ToastMessage::new(message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

/// Appends a toast, dropping the oldest once the stack is full.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toast-stack",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let mut toasts = toasts;
    let dismiss_id = message.id.clone();
    rsx! {
        li { class: "toast toast-warning",
            p { "{message.text}" }
            button {
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
