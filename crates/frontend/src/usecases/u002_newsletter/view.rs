use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::submit::use_submitter;
use contracts::usecases::common::submission::Submission;
use contracts::usecases::u002_newsletter::NewsletterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let notifications = use_notifications();
    let submitter = StoredValue::new(use_submitter());
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let subscribe = move || {
        if busy.get_untracked() {
            return;
        }
        let request = NewsletterRequest::new(email.get_untracked());
        if let Err(e) = request.validate() {
            notifications.error(e.to_string());
            return;
        }

        busy.set(true);
        let submitter = submitter.get_value();
        spawn_local(async move {
            let result = submitter.submit(Submission::Newsletter(request)).await;
            busy.set(false);
            match result {
                Ok(receipt) => {
                    email.set(String::new());
                    notifications.success(receipt.message);
                }
                Err(e) => {
                    log::error!("Newsletter subscription failed: {}", e);
                    notifications.error(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="newsletter">
            <h3 class="newsletter-title">"Stay Updated"</h3>
            <p class="newsletter-text">"Get new articles in your inbox. No spam."</p>
            <div class="newsletter-form">
                <input
                    type="email"
                    class="newsletter-input"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            subscribe();
                        }
                    }
                />
                <button
                    class="btn btn-primary newsletter-btn"
                    disabled=move || busy.get()
                    on:click=move |_| subscribe()
                >
                    <span>{move || if busy.get() { "Subscribing..." } else { "Subscribe" }}</span>
                    {move || icon(if busy.get() { "loader" } else { "send" })}
                </button>
            </div>
        </div>
    }
}
