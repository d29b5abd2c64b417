use crate::domain::a003_certificate::ui::list::CertificateList;
use crate::pages::Page;
use leptos::prelude::*;

#[component]
pub fn CertificatesPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"My " <span class="gradient-text">"Certificates"</span></h1>
                <p class="page-subtitle">"Courses and certifications, newest first."</p>
                <a href=Page::Index.href() class="back-link">"← Back to Home"</a>
            </div>
        </section>
        <section class="section certificates">
            <div class="container">
                <CertificateList />
            </div>
        </section>
    }
}
