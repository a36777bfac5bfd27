// Toast notifications: a context-provided manager, the notifier seam used by
// panel actions, and the frame that renders active toasts.

use crate::components::Icon;
use crate::settings::PanelSettings;
use dioxus::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "toast toast-default",
            Self::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, request: ToastRequest);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub request: ToastRequest,
}

fn push_bounded(stack: &mut Vec<Toast>, toast: Toast, max_visible: usize) {
    stack.push(toast);
    let overflow = stack.len().saturating_sub(max_visible.max(1));
    if overflow > 0 {
        stack.drain(..overflow);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    duration_ms: u32,
    max_visible: usize,
}

impl ToastManager {
    pub fn active(&self) -> Vec<Toast> {
        (self.toasts)()
    }

    pub fn dismiss(&self, id: Uuid) {
        let mut toasts = self.toasts;
        toasts.with_mut(|stack| stack.retain(|toast| toast.id != id));
    }
}

impl Notifier for ToastManager {
    fn notify(&self, request: ToastRequest) {
        let id = Uuid::new_v4();
        tracing::debug!(%id, title = %request.title, "showing toast");

        let mut toasts = self.toasts;
        let max_visible = self.max_visible;
        toasts.with_mut(|stack| push_bounded(stack, Toast { id, request }, max_visible));

        let manager = *self;
        let duration_ms = self.duration_ms;
        spawn(async move {
            sleep_ms(duration_ms).await;
            manager.dismiss(id);
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Install a [`ToastManager`] for this component and its descendants.
pub fn use_toast_provider(settings: &PanelSettings) -> ToastManager {
    let toasts = use_signal(Vec::<Toast>::new);
    let duration_ms = settings.toast_duration_ms;
    let max_visible = settings.max_visible_toasts;
    use_context_provider(move || ToastManager {
        toasts,
        duration_ms,
        max_visible,
    })
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

#[component]
pub fn ToastFrame() -> Element {
    let toasts = use_toast();

    rsx! {
        div { class: "toast-frame", role: "status", aria_live: "polite",
            for toast in toasts.active() {
                div {
                    key: "{toast.id}",
                    class: toast.request.variant.class(),
                    Icon { name: "info".to_string(), class: "toast-icon".to_string() }
                    div { class: "toast-body",
                        p { class: "toast-title", "{toast.request.title}" }
                        p { class: "toast-description", "{toast.request.description}" }
                    }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        aria_label: "Dismiss notification",
                        onclick: move |_| toasts.dismiss(toast.id),
                        Icon { name: "x".to_string(), class: "toast-close-icon".to_string() }
                    }
                }
            }
        }
    }
}
