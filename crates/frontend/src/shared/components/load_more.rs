use leptos::prelude::*;

/// "Load more" control for paged grids. Hidden once every match is shown.
#[component]
pub fn LoadMoreButton(
    #[prop(into)] has_more: Signal<bool>,
    /// Matches for the current filter.
    #[prop(into)]
    total_count: Signal<usize>,
    /// Matches currently rendered.
    #[prop(into)]
    shown_count: Signal<usize>,
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || has_more.get()>
            <div class="load-more">
                <span class="load-more__info">
                    {move || format!("Showing {} of {}", shown_count.get(), total_count.get())}
                </span>
                <button class="btn btn-secondary load-more__btn" on:click=move |_| on_load_more.run(())>
                    "Load More"
                </button>
            </div>
        </Show>
    }
}
