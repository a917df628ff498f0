//! Toast stack rendering the notification queue.

use leptos::prelude::*;

use crate::state::notify::{NotifyKind, NotifyState, Toast};
#[cfg(feature = "hydrate")]
use crate::state::notify::DISMISS_AFTER_MS;

/// Fixed-position container for the active toasts.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="notification-container">
            <For
                each=move || notify.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastCard toast/> }
            />
        </div>
    }
}

/// One toast with its close button and auto-dismiss timer.
///
/// Each toast gets exactly one timer, guarded by an alive flag that
/// unmount clears; a manual dismissal therefore disarms the pending
/// auto-dismiss instead of leaving it to fire against a later toast.
#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_timer = alive.clone();
        gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || {
            if alive_timer.load(Ordering::Relaxed) {
                notify.update(|state| {
                    state.dismiss(id);
                });
            }
        })
        .forget();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let kind_class = match toast.kind {
        NotifyKind::Success => "notification--success",
        NotifyKind::Error => "notification--error",
    };
    let on_close = move |_| {
        notify.update(|state| {
            state.dismiss(id);
        });
    };

    view! {
        <div class=format!("notification {kind_class}")>
            <div class="notification__content">
                <div class="notification__title">{toast.title.clone()}</div>
                <div class="notification__message">{toast.message.clone()}</div>
            </div>
            <button class="notification__close" on:click=on_close>"\u{d7}"</button>
        </div>
    }
}
