use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use multicast::{NOTICE_DURATION, timer_millis};

/// Handle for posting transient notifications. Cheap to copy into handlers.
#[derive(Clone, Copy)]
pub struct Snackbar {
    message: Signal<Option<String>>,
    shown: Signal<u64>,
}

impl Snackbar {
    /// Shows `message`, replacing whatever is on screen, and hides it again
    /// after [`NOTICE_DURATION`] unless a newer message took its place.
    pub fn show(mut self, message: impl Into<String>) {
        let ticket = *self.shown.peek() + 1;
        self.shown.set(ticket);
        self.message.set(Some(message.into()));

        // the form that posted the message may be gone before the timer fires
        spawn_forever(async move {
            TimeoutFuture::new(timer_millis(NOTICE_DURATION)).await;
            if *self.shown.peek() == ticket {
                self.message.set(None);
            }
        });
    }
}

pub fn use_snackbar() -> Snackbar {
    use_context::<Snackbar>()
}

#[component]
pub fn SnackbarProvider(children: Element) -> Element {
    let snackbar = use_context_provider(|| Snackbar {
        message: Signal::new(None),
        shown: Signal::new(0),
    });

    let message = snackbar.message.read().clone();

    rsx! {
        {children}
        div {
            id: "snackbar",
            class: if message.is_some() { "show" } else { "" },
            role: "status",
            {message.clone().unwrap_or_default()}
        }
    }
}
