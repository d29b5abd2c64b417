use crate::domain::a001_article::ui::list::ArticleList;
use crate::usecases::u002_newsletter::NewsletterForm;
use leptos::prelude::*;

#[component]
pub fn ArticlesPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Latest " <span class="gradient-text">"Articles"</span></h1>
                <p class="page-subtitle">"Notes on web, mobile and API development."</p>
            </div>
        </section>
        <section class="section articles">
            <div class="container">
                <ArticleList />
            </div>
        </section>
        <section class="section newsletter-section">
            <div class="container">
                <NewsletterForm />
            </div>
        </section>
    }
}
