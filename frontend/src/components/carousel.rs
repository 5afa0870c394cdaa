use yew::prelude::*;

use crate::carousel::CarouselConfig;
use crate::config::DEFAULT_AUTO_PLAY_INTERVAL_MS;
use crate::hooks::use_carousel;
use crate::theme::{use_theme, Theme};

#[derive(Clone, PartialEq)]
pub struct CarouselItem {
    pub id: String,
    pub content: Html,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub items: Vec<CarouselItem>,
    #[prop_or_default]
    pub auto_play: bool,
    #[prop_or(DEFAULT_AUTO_PLAY_INTERVAL_MS)]
    pub auto_play_interval_ms: u32,
    #[prop_or(true)]
    pub show_dots: bool,
    #[prop_or(true)]
    pub show_arrows: bool,
    #[prop_or(1)]
    pub items_per_view: usize,
    #[prop_or(16)]
    pub gap_px: u32,
}

fn arrow_style(theme: &Theme, side: &str, hovering: bool) -> String {
    format!(
        "position: absolute; {}: {}; top: 50%; transform: translateY(-50%); width: 40px; height: 40px; \
         border-radius: {}; background-color: {}; border: 1px solid {}; color: {}; cursor: pointer; \
         display: flex; align-items: center; justify-content: center; font-size: 18px; font-weight: bold; \
         opacity: {}; transition: all 0.2s ease; z-index: 10; box-shadow: {};",
        side,
        theme.space(2),
        theme.radius.full,
        theme.colors.surfaces.background,
        theme.colors.border.primary,
        theme.colors.text.primary,
        if hovering { "1" } else { "0.7" },
        theme.shadows.sm,
    )
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let theme = use_theme();
    let hovering = use_state(|| false);
    let per_view = props.items_per_view.max(1);
    let carousel = use_carousel(
        props.items.len(),
        CarouselConfig {
            items_per_view: per_view,
            auto_play: props.auto_play,
            auto_play_interval_ms: props.auto_play_interval_ms,
        },
    );

    let onmouseenter = {
        let hovering = hovering.clone();
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            hovering.set(true);
            carousel.set_suspended(true);
        })
    };
    let onmouseleave = {
        let hovering = hovering.clone();
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            hovering.set(false);
            carousel.set_suspended(false);
        })
    };
    let go_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.previous())
    };
    let go_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };

    let item_basis = format!(
        "flex: 0 0 calc((100% - {}px) / {});",
        (per_view as u32 - 1) * props.gap_px,
        per_view
    );
    let slides = (0..carousel.page_count).map(|page| {
        html! {
            <div key={page} style={format!(
                "min-width: 100%; display: flex; gap: {}px; padding: {};",
                props.gap_px,
                theme.space(4),
            )}>
                { for carousel.pager.page_items(&props.items, page).iter().map(|item| html! {
                    <div key={item.id.clone()} style={item_basis.clone()}>
                        { item.content.clone() }
                    </div>
                }) }
            </div>
        }
    });

    let dots = (0..carousel.page_count).map(|page| {
        let active = page == carousel.current_page;
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.go_to(page as i64))
        };
        html! {
            <button
                key={page}
                {onclick}
                aria-label={format!("Go to slide {}", page + 1)}
                style={format!(
                    "width: 8px; height: 8px; border-radius: {}; border: none; background-color: {}; \
                     cursor: pointer; transition: all 0.2s ease; opacity: {};",
                    theme.radius.full,
                    if active { theme.colors.primary.s500 } else { theme.colors.border.primary },
                    if active { "1" } else { "0.6" },
                )}
            />
        }
    });

    let multi_page = carousel.page_count > 1;

    html! {
        <div
            class="carousel"
            {onmouseenter}
            {onmouseleave}
            style={format!(
                "position: relative; overflow: hidden; border-radius: {}; background-color: {}; border: 1px solid {};",
                theme.radius.lg,
                theme.colors.surfaces.elevated,
                theme.colors.border.primary,
            )}
        >
            <div style={format!(
                "display: flex; transform: translateX(-{}%); transition: transform 0.3s ease-in-out;",
                carousel.current_page * 100,
            )}>
                { for slides }
            </div>
            if props.show_arrows && multi_page {
                <button aria-label="Previous slide" onclick={go_previous} style={arrow_style(theme, "left", *hovering)}>{"‹"}</button>
                <button aria-label="Next slide" onclick={go_next} style={arrow_style(theme, "right", *hovering)}>{"›"}</button>
            }
            if props.show_dots && multi_page {
                <div style={format!(
                    "position: absolute; bottom: {}; left: 50%; transform: translateX(-50%); display: flex; gap: {}; z-index: 10;",
                    theme.space(3),
                    theme.space(2),
                )}>
                    { for dots }
                </div>
            }
        </div>
    }
}
