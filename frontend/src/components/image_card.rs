use yew::prelude::*;

use crate::components::badge::{Badge, BadgeLabel};
use crate::components::button::Size;
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ImageCardProps {
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub image_alt: AttrValue,
    #[prop_or(200)]
    pub image_height: u32,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub badge: Option<BadgeLabel>,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or(true)]
    pub hover: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ImageCard)]
pub fn image_card(props: &ImageCardProps) -> Html {
    let theme = use_theme();
    let hovered = use_state(|| false);
    let loaded = use_state(|| false);
    let lifted = props.hover && *hovered;
    let has_children = !props.children.is_empty();

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    html! {
        <div {onmouseenter} {onmouseleave} style={format!(
            "background-color: {}; border: 1px solid {}; border-radius: {}; padding: 0; overflow: hidden; \
             box-shadow: {}; transform: {}; transition: all {} ease;",
            theme.colors.surfaces.elevated,
            if lifted { theme.colors.border.hover } else { theme.colors.border.primary },
            theme.radius.lg,
            if lifted { theme.shadows.lg } else { theme.shadows.sm },
            if lifted { "translateY(-2px)" } else { "none" },
            theme.animation.normal,
        )}>
            if let Some(src) = &props.image {
                <div style={format!(
                    "position: relative; width: 100%; height: {}px; background-color: {}; overflow: hidden;",
                    props.image_height,
                    theme.colors.surfaces.panel,
                )}>
                    if !*loaded {
                        <div style={format!(
                            "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; \
                             color: {}; font-size: {};",
                            theme.colors.text.tertiary,
                            theme.typography.font_size.sm,
                        )}>{"Loading..."}</div>
                    }
                    <img src={src.clone()} alt={props.image_alt.clone()} {onload} style={format!(
                        "width: 100%; height: 100%; object-fit: cover; transition: transform 0.3s ease; \
                         transform: scale({}); opacity: {};",
                        if lifted { "1.05" } else { "1" },
                        if *loaded { "1" } else { "0" },
                    )} />
                    if let Some(badge) = &props.badge {
                        <div style={format!("position: absolute; top: {0}; right: {0};", theme.space(3))}>
                            <Badge variant={badge.variant} size={Size::Sm}>{badge.text.clone()}</Badge>
                        </div>
                    }
                </div>
            }
            <div style={format!("padding: {};", theme.space(6))}>
                if let Some(title) = &props.title {
                    <h3 style={format!(
                        "font-size: {}; font-weight: {}; color: {}; margin: 0 0 {};",
                        theme.typography.font_size.lg,
                        theme.typography.font_weight.semibold,
                        theme.colors.text.primary,
                        if props.description.is_some() || has_children { theme.space(2) } else { "0" },
                    )}>{title.clone()}</h3>
                }
                if let Some(description) = &props.description {
                    <p style={format!(
                        "font-size: {}; color: {}; line-height: {}; margin: 0 0 {};",
                        theme.typography.font_size.sm,
                        theme.colors.text.secondary,
                        theme.typography.line_height.relaxed,
                        if has_children || props.footer.is_some() { theme.space(4) } else { "0" },
                    )}>{description.clone()}</p>
                }
                if has_children {
                    <div style={format!(
                        "margin-bottom: {};",
                        if props.footer.is_some() { theme.space(4) } else { "0" },
                    )}>
                        { for props.children.iter() }
                    </div>
                }
                if let Some(footer) = &props.footer {
                    <div style={format!(
                        "padding-top: {0}; margin-top: {0}; border-top: 1px solid {1};",
                        theme.space(4),
                        theme.colors.border.secondary,
                    )}>{footer.clone()}</div>
                }
            </div>
        </div>
    }
}
