//! Theme management for the site.
//!
//! Provides a context-based dark/light theme. The preference is persisted in
//! localStorage under the `"theme"` key and mirrored on `<body>` as a class
//! and a `data-theme` attribute.

use crate::shared::dom::body;
use crate::shared::icons::icon;
use contracts::shared::theme::{Theme, THEME_STORAGE_KEY};
use leptos::prelude::*;
use web_sys::window;

/// Load theme from localStorage.
fn load_theme_from_storage() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("Could not persist theme preference");
        }
    }
}

/// Apply theme classes to the body.
fn apply_theme(theme: Theme) {
    let Some(body) = body() else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_2(Theme::Dark.body_class(), Theme::Light.body_class());
    let _ = classes.add_1(theme.body_class());
    let _ = body.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("Theme switched to {}", next);
        self.set_theme(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    // Write the preference back once so a missing key becomes "dark".
    save_theme_to_storage(initial_theme);
    apply_theme(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Navbar button switching between dark and light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            on:click=move |_| ctx.toggle()
            title=move || format!("Switch to {} theme", ctx.get_theme().toggled())
        >
            {move || icon(ctx.get_theme().toggle_icon())}
        </button>
    }
}
