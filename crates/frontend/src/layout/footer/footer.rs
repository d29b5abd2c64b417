use crate::shared::icons::icon;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="container footer__content">
                <p class="footer__copy">{format!("© {} Portfolio. All rights reserved.", year)}</p>
                <div class="footer__social">
                    <a href="https://github.com/" target="_blank" rel="noopener" aria-label="GitHub">
                        {icon("github")}
                    </a>
                </div>
            </div>
        </footer>
    }
}
