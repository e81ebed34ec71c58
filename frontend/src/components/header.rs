use yew::prelude::*;

use crate::animation::{Pose, Variant};
use crate::config::{BRAND_COLOR, HEADER_SLIDE_IN_DELAY_MS, MOBILE_BREAKPOINT_PX};
use crate::content::{NavLink, CONTACT_LINK, NAV_LINKS};
use crate::hooks::{use_mounted_after, use_scrolled};

/// Open/closed state of the collapsible mobile navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    pub fn button_label(self) -> &'static str {
        if self.open {
            "Fechar menu"
        } else {
            "Abrir menu"
        }
    }

    fn button_icon(self) -> &'static str {
        if self.open {
            "fas fa-xmark"
        } else {
            "fas fa-bars"
        }
    }
}

fn nav_anchor(link: &NavLink, class: &'static str, onclick: Option<Callback<MouseEvent>>) -> Html {
    html! {
        <a href={link.href()} class={class} onclick={onclick}>{link.label}</a>
    }
}

#[function_component]
pub fn Header() -> Html {
    let menu = use_state(MenuState::default);
    let scrolled = use_scrolled();
    let mounted = use_mounted_after(HEADER_SLIDE_IN_DELAY_MS);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggle();
            log::debug!("Mobile menu {}", if next.is_open() { "opened" } else { "closed" });
            menu.set(next);
        })
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.close()))
    };

    let pose = if mounted { Pose::Visible } else { Pose::Hidden };
    let open = menu.is_open();

    let header_css = format!(
        r#"
        .site-header {{
            position: sticky;
            top: 0;
            z-index: 50;
            width: 100%;
            background: transparent;
            border-bottom: 1px solid transparent;
        }}
        .site-header.scrolled {{
            background: rgba(255, 255, 255, 0.92);
            backdrop-filter: blur(8px);
            border-bottom-color: #e5e7eb;
        }}
        .header-bar {{
            display: flex;
            height: 4rem;
            align-items: center;
            justify-content: space-between;
        }}
        .header-logo img {{
            height: 2rem;
            width: auto;
        }}
        .desktop-nav {{
            display: flex;
            align-items: center;
            gap: 1.5rem;
        }}
        .nav-link {{
            font-size: 0.875rem;
            font-weight: 500;
            color: inherit;
            text-decoration: none;
        }}
        .nav-link:hover {{
            color: {brand};
        }}
        .nav-cta {{
            padding: 0.5rem 0.9rem;
            border-radius: 0.375rem;
            background: {brand};
            color: white;
            font-size: 0.875rem;
            text-decoration: none;
        }}
        .menu-button {{
            display: none;
            background: none;
            border: none;
            font-size: 1.4rem;
            cursor: pointer;
        }}
        .mobile-menu {{
            display: none;
            max-height: 0;
            opacity: 0;
            overflow: hidden;
            visibility: hidden;
            transition: max-height 0.3s ease, opacity 0.3s ease, visibility 0s linear 0.3s;
        }}
        .mobile-menu nav {{
            display: flex;
            flex-direction: column;
            gap: 1rem;
            padding: 1rem 0;
        }}
        .mobile-menu .nav-cta {{
            text-align: center;
        }}
        @media (max-width: {breakpoint}px) {{
            .desktop-nav {{
                display: none;
            }}
            .menu-button {{
                display: block;
            }}
            .mobile-menu {{
                display: block;
            }}
            .mobile-menu.open {{
                max-height: 20rem;
                opacity: 1;
                visibility: visible;
                transition: max-height 0.3s ease, opacity 0.3s ease, visibility 0s;
                border-top: 1px solid #e5e7eb;
            }}
        }}
    "#,
        brand = BRAND_COLOR,
        breakpoint = MOBILE_BREAKPOINT_PX - 1,
    );

    html! {
        <header
            class={classes!("site-header", scrolled.then_some("scrolled"))}
            style={Variant::slide_down().style(pose)}
        >
            <style>{header_css}</style>
            <div class="container header-bar">
                <div class="header-logo">
                    <img src="/quiosque.svg" alt="Quiosque Logo" width="32" height="32" />
                </div>
                <button
                    class="menu-button"
                    aria-label={menu.button_label()}
                    aria-expanded={open.to_string()}
                    aria-controls="mobile-menu"
                    onclick={toggle_menu}
                >
                    <i class={menu.button_icon()}></i>
                </button>
                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|link| nav_anchor(link, "nav-link", None)) }
                    { nav_anchor(&CONTACT_LINK, "nav-cta", None) }
                </nav>
            </div>
            <div
                id="mobile-menu"
                class={classes!("container", "mobile-menu", open.then_some("open"))}
                aria-hidden={(!open).to_string()}
                inert={(!open).then_some("")}
            >
                <nav>
                    { for NAV_LINKS.iter().map(|link| nav_anchor(link, "nav-link", Some(close_menu.clone()))) }
                    { nav_anchor(&CONTACT_LINK, "nav-cta", Some(close_menu.clone())) }
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_collapsed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.button_label(), "Abrir menu");
    }

    #[test]
    fn each_click_flips_the_menu() {
        let mut menu = MenuState::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            menu = menu.toggle();
            seen.push(menu.is_open());
        }
        assert_eq!(seen, vec![true, false, true, false]);
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let menu = MenuState::default().toggle();
        assert_eq!(menu.button_label(), "Fechar menu");
        assert!(!menu.close().is_open());
        assert!(!MenuState::default().close().is_open());
    }
}
