//! Toast notifications.
//!
//! `NotificationService` is provided once at the app root; any component can
//! push a message. Toasts dismiss themselves after the configured lifetime
//! or when closed.

use crate::config::site_config;
use crate::shared::icons::icon;
use contracts::shared::notification::{Notification, NotificationKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show a toast and schedule its removal.
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let message = message.into();
        log::debug!("Notification #{} ({:?}): {}", id, kind, message);
        self.items.update(|items| {
            items.push(Notification { id, kind, message });
        });

        let svc = *self;
        let lifetime = site_config().notifications.lifetime_ms;
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            svc.dismiss(id);
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Info, message)
    }

    /// Remove a toast. Unknown or already dismissed ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)")
}

/// Renders the toast stack. Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notification-stack">
            <For
                each=move || svc.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.css_class() role="status">
                            <div class="notification-content">
                                {icon(n.kind.icon())}
                                <span>{n.message}</span>
                                <button
                                    class="notification-close"
                                    title="Close"
                                    on:click=move |_| svc.dismiss(id)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
