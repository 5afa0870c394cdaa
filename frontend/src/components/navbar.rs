use yew::prelude::*;
use yew_hooks::{use_window_scroll, use_window_size};
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::Size;
use crate::components::theme_toggle::ThemeToggle;
use crate::theme::use_theme;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: AttrValue,
    pub to: Route,
    pub badge: Option<(AttrValue, BadgeVariant)>,
}

impl NavItem {
    pub fn new(label: &'static str, to: Route) -> Self {
        NavItem {
            label: AttrValue::Static(label),
            to,
            badge: None,
        }
    }

    pub fn with_badge(mut self, text: &'static str, variant: BadgeVariant) -> Self {
        self.badge = Some((AttrValue::Static(text), variant));
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or(AttrValue::Static("Kgency"))]
    pub logo_text: AttrValue,
    #[prop_or_default]
    pub items: Vec<NavItem>,
    #[prop_or(true)]
    pub sticky: bool,
    #[prop_or_default]
    pub transparent: bool,
    #[prop_or(true)]
    pub show_theme_toggle: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let theme = use_theme();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (window_width, _) = use_window_size();
    let route = use_route::<Route>();

    let is_mobile = window_width < 768.0;
    let is_scrolled = scroll_y > 64.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let background = if props.transparent && !is_scrolled {
        theme.colors.surfaces.translucent
    } else {
        theme.colors.surfaces.background
    };
    let nav_style = format!(
        "position: {}; top: 0; left: 0; right: 0; z-index: 50; background-color: {}; \
         border-bottom: 1px solid {}; backdrop-filter: {}; transition: all 0.2s ease;",
        if props.sticky { "sticky" } else { "static" },
        background,
        theme.colors.border.primary,
        if props.transparent { "blur(10px)" } else { "none" },
    );

    let link = |item: &NavItem| {
        let active = route.as_ref() == Some(&item.to);
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={item.to.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                    <span style={format!(
                        "display: flex; align-items: center; gap: {}; padding: {} {}; border-radius: {}; \
                         font-size: {}; font-weight: {}; color: {}; background-color: {};",
                        theme.space(2),
                        theme.space(2),
                        theme.space(4),
                        theme.radius.md,
                        theme.typography.font_size.sm,
                        theme.typography.font_weight.medium,
                        if active { theme.colors.text.accent } else { theme.colors.text.secondary },
                        if active { theme.colors.surfaces.panel } else { "transparent" },
                    )}>
                        {item.label.clone()}
                        if let Some((text, variant)) = &item.badge {
                            <Badge variant={*variant} size={Size::Sm}>{text.clone()}</Badge>
                        }
                    </span>
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))} style={nav_style}>
            <div style={format!(
                "max-width: 1400px; margin: 0 auto; padding: 0 {}; display: flex; align-items: center; \
                 justify-content: space-between; height: 64px;",
                theme.space(6),
            )}>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span style={format!(
                        "font-size: {}; font-weight: {}; color: {};",
                        theme.typography.font_size.xl,
                        theme.typography.font_weight.bold,
                        theme.colors.text.primary,
                    )}>{props.logo_text.clone()}</span>
                </Link<Route>>
                if is_mobile {
                    <button class="burger-menu" onclick={toggle_menu} style={format!(
                        "padding: {}; background-color: transparent; border: none; cursor: pointer; color: {}; font-size: 20px;",
                        theme.space(2),
                        theme.colors.text.primary,
                    )}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                } else {
                    <div style={format!("display: flex; align-items: center; gap: {};", theme.space(1))}>
                        { for props.items.iter().map(|item| link(item)) }
                        if props.show_theme_toggle {
                            <ThemeToggle />
                        }
                    </div>
                }
            </div>
            if is_mobile && *menu_open {
                <div class="mobile-menu-open" style={format!(
                    "display: flex; flex-direction: column; gap: {}; padding: {}; background-color: {}; border-top: 1px solid {};",
                    theme.space(1),
                    theme.space(4),
                    theme.colors.surfaces.background,
                    theme.colors.border.primary,
                )}>
                    { for props.items.iter().map(|item| link(item)) }
                    if props.show_theme_toggle {
                        <ThemeToggle />
                    }
                </div>
            }
        </nav>
    }
}
