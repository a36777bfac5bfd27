// Plagiarism scan action. The scan itself does not exist yet; activating the
// button only tells the user so.

use crate::components::{Notifier, ToastManager, ToastRequest, ToastVariant};
use dioxus::prelude::try_consume_context;

pub const SCAN_BUTTON_LABEL: &str = "Scan Lyrics for Plagiarism (Future Feature)";
pub const SCAN_NOTICE_TITLE: &str = "Feature Not Implemented";
pub const SCAN_NOTICE_DESCRIPTION: &str =
    "Lyrics plagiarism scanning will be available in a future update.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLyricsAction {
    enabled: bool,
}

impl ScanLyricsAction {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn notice() -> ToastRequest {
        ToastRequest {
            title: SCAN_NOTICE_TITLE.to_string(),
            description: SCAN_NOTICE_DESCRIPTION.to_string(),
            variant: ToastVariant::Default,
        }
    }

    /// Notify once if enabled. Returns whether a notification was sent.
    pub fn trigger<N: Notifier + ?Sized>(&self, notifier: &N) -> bool {
        if !self.enabled {
            return false;
        }
        tracing::info!("plagiarism scan requested; feature not available yet");
        notifier.notify(Self::notice());
        true
    }
}

/// Trigger `action` through the [`ToastManager`] provided by an ancestor.
///
/// Must run inside a component scope. Without a provider the request is only
/// logged. Returns whether a notification was sent.
pub fn request_scan(action: ScanLyricsAction) -> bool {
    match try_consume_context::<ToastManager>() {
        Some(toasts) => action.trigger(&toasts),
        None => {
            tracing::warn!("scan requested but no toast provider is mounted");
            false
        }
    }
}
