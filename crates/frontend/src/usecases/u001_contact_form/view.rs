use crate::config::site_config;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::submit::use_submitter;
use contracts::usecases::common::submission::Submission;
use contracts::usecases::u001_contact::ContactRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum FormPhase {
    Idle,
    Sending,
    Sent,
}

impl FormPhase {
    fn label(&self) -> &'static str {
        match self {
            FormPhase::Idle => "Send Message",
            FormPhase::Sending => "Sending...",
            FormPhase::Sent => "Message Sent!",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            FormPhase::Idle => "send",
            FormPhase::Sending => "loader",
            FormPhase::Sent => "check-circle",
        }
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let notifications = use_notifications();
    let submitter = StoredValue::new(use_submitter());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let phase = RwSignal::new(FormPhase::Idle);

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != FormPhase::Idle {
            return;
        }

        let request = ContactRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            subject: subject.get_untracked().trim().to_string(),
            message: message.get_untracked().trim().to_string(),
        };
        if let Err(e) = request.validate() {
            notifications.error(e.to_string());
            return;
        }

        phase.set(FormPhase::Sending);
        let submitter = submitter.get_value();
        spawn_local(async move {
            match submitter.submit(Submission::Contact(request)).await {
                Ok(receipt) => {
                    phase.set(FormPhase::Sent);
                    TimeoutFuture::new(site_config().forms.sent_hold_ms).await;
                    reset();
                    phase.set(FormPhase::Idle);
                    notifications.success(receipt.message);
                }
                Err(e) => {
                    log::error!("Contact form submission failed: {}", e);
                    phase.set(FormPhase::Idle);
                    notifications.error(e.to_string());
                }
            }
        });
    };

    view! {
        <form class="contact-form" id="contact-form" on:submit=on_submit novalidate=true>
            <div class="form-group">
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <input
                    type="text"
                    name="subject"
                    placeholder="Subject"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button
                type="submit"
                class="btn btn-primary form-submit"
                disabled=move || phase.get() != FormPhase::Idle
            >
                <span>{move || phase.get().label()}</span>
                {move || icon(phase.get().icon())}
            </button>
        </form>
    }
}
