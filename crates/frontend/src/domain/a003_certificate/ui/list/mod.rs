pub mod state;

use self::state::create_state;
use crate::shared::catalog_view::CatalogGrid;
use crate::shared::components::{CardAnimated, FilterTabs};
use crate::shared::icons::icon;
use contracts::domain::a003_certificate::aggregate::Certificate;
use leptos::prelude::*;

/// Certificate grid. With `limit` set the filter tabs are hidden and only the
/// first entries are shown.
#[component]
pub fn CertificateList(#[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let filter = create_state(limit);
    let categories = filter.categories();
    let show_tabs = limit.is_none();

    view! {
        {show_tabs.then(move || view! {
            <FilterTabs
                categories=categories
                active=Signal::derive(move || filter.active_category())
                on_select=Callback::new(move |c: String| filter.select_category(c))
            />
        })}
        <CatalogGrid
            filter=filter
            class="certificates-grid"
            empty_message="No certificates in this category yet."
            render=|certificate: Certificate, delay: u32| view! { <CertificateCard certificate=certificate delay_ms=delay /> }
        />
    }
}

#[component]
fn CertificateCard(certificate: Certificate, delay_ms: u32) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms class="certificate-card" ripple=true>
            <div class="certificate-icon">{icon("award")}</div>
            <h3 class="certificate-title">{certificate.title.clone()}</h3>
            <p class="certificate-issuer">{certificate.issuer.clone()}</p>
            <p class="certificate-date">{certificate.issued_label()}</p>
            {(!certificate.description.is_empty()).then(|| view! {
                <p class="certificate-description">{certificate.description.clone()}</p>
            })}
            <div class="certificate-skills">
                {certificate
                    .tags
                    .iter()
                    .map(|t| view! { <span class="skill-tag">{t.clone()}</span> })
                    .collect_view()}
            </div>
            {certificate.credential_url.clone().map(|url| view! {
                <a class="certificate-link" href=url target="_blank" rel="noopener">
                    "View Credential " {icon("external")}
                </a>
            })}
        </CardAnimated>
    }
}
