use crate::layout::global_context::use_global_context;
use crate::pages::Page;
use crate::shared::dom;
use crate::shared::effects::{use_scroll, use_transition};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

/// Where a navbar entry leads.
#[derive(Clone, Copy, Debug, PartialEq)]
enum NavTarget {
    /// Section of the index page.
    Section(&'static str),
    /// Another page.
    Page(Page),
}

const NAV_ITEMS: [(&str, NavTarget); 7] = [
    ("Home", NavTarget::Section("home")),
    ("About", NavTarget::Section("about")),
    ("Skills", NavTarget::Section("skills")),
    ("Projects", NavTarget::Section("projects")),
    ("Certificates", NavTarget::Section("certificates")),
    ("Articles", NavTarget::Page(Page::Articles)),
    ("Contact", NavTarget::Section("contact")),
];

impl NavTarget {
    fn href(&self, current: Page) -> String {
        match self {
            NavTarget::Section(id) if current == Page::Index => format!("#{}", id),
            NavTarget::Section(id) => format!("{}#{}", Page::Index.href(), id),
            NavTarget::Page(page) => page.href().to_string(),
        }
    }

    /// Page links light up on their page; section links light up on the
    /// index page while their section is in view.
    fn is_active(&self, current: Page, section_in_view: Option<&str>) -> bool {
        match self {
            NavTarget::Page(page) => *page == current,
            NavTarget::Section(id) => current == Page::Index && section_in_view == Some(*id),
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();
    let scroll = use_scroll();
    let transition = use_transition();
    let page = ctx.page;

    let links = NAV_ITEMS
        .iter()
        .map(|(label, target)| {
            let target = *target;
            let href = target.href(page);
            let section = match target {
                NavTarget::Section(id) => Some(id),
                NavTarget::Page(_) => None,
            };
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ctx.close_menu();
                let Some(id) = section else {
                    return;
                };
                if page != Page::Index {
                    return;
                }
                ev.prevent_default();
                if id == "certificates" {
                    transition.brief();
                }
                if !dom::scroll_to_section(id) {
                    log::warn!("Section #{} not found", id);
                }
            };
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        class:active=move || scroll.with_active_section(|s| target.is_active(page, s))
                        data-section=section
                        on:click=on_click
                    >
                        {*label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" class:scrolled=move || scroll.state().navbar_scrolled>
            <div class="container nav-container">
                <a href=Page::Index.href() class="nav-logo">"Portfolio"</a>
                <ul class="nav-menu" class:active=move || ctx.menu_open.get()>
                    {links}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        class="hamburger"
                        class:active=move || ctx.menu_open.get()
                        aria-label="Toggle menu"
                        on:click=move |_| ctx.toggle_menu()
                    >
                        {icon("menu")}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_links_stay_on_index() {
        let target = NavTarget::Section("projects");
        assert_eq!(target.href(Page::Index), "#projects");
        assert_eq!(target.href(Page::Articles), "index.html#projects");
    }

    #[test]
    fn test_page_links() {
        let target = NavTarget::Page(Page::Articles);
        assert_eq!(target.href(Page::Index), "articles.html");
        assert!(target.is_active(Page::Articles, None));
        assert!(!target.is_active(Page::Index, None));
        assert!(!target.is_active(Page::Index, Some("projects")));
    }

    #[test]
    fn test_section_link_follows_scroll() {
        let target = NavTarget::Section("projects");
        assert!(target.is_active(Page::Index, Some("projects")));
        assert!(!target.is_active(Page::Index, Some("about")));
        assert!(!target.is_active(Page::Index, None));
        // Section ids on other pages do not light up index links
        assert!(!target.is_active(Page::Certificates, Some("projects")));
    }
}
