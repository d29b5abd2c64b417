use crate::config::site_config;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::pages::{articles::ArticlesPage, certificates::CertificatesPage, index::IndexPage, Page};
use crate::shared::effects::{provide_scroll_context, KonamiListener, LoadingScreen, TransitionService};
use crate::shared::notifications::NotificationService;
use crate::shared::submit::{provide_submitter, SimulatedSubmitter};
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let page = Page::detect();

    // Page-wide services, available to every component below.
    provide_context(AppGlobalContext::new(page));
    provide_context(NotificationService::new());
    provide_context(TransitionService::new());
    provide_scroll_context();
    provide_submitter(SimulatedSubmitter {
        delay_ms: site_config().forms.submit_delay_ms,
    });

    view! {
        <ThemeProvider>
            <LoadingScreen />
            <KonamiListener />
            <Shell>
                {match page {
                    Page::Index => view! { <IndexPage /> }.into_any(),
                    Page::Certificates => view! { <CertificatesPage /> }.into_any(),
                    Page::Articles => view! { <ArticlesPage /> }.into_any(),
                }}
            </Shell>
        </ThemeProvider>
    }
}
