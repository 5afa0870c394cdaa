use yew::prelude::*;

use crate::theme::use_theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or("button")]
    pub button_type: &'static str,
    #[prop_or_default]
    pub style: String,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let theme = use_theme();
    let hovered = use_state(|| false);

    let (background, color, border, hover_background) = match props.variant {
        ButtonVariant::Primary => (
            theme.colors.primary.s500,
            theme.colors.text.inverse,
            theme.colors.primary.s500,
            theme.colors.primary.s600,
        ),
        ButtonVariant::Secondary => (
            "transparent",
            theme.colors.text.primary,
            theme.colors.border.primary,
            theme.colors.surfaces.panel,
        ),
    };
    let (font_size, padding) = match props.size {
        Size::Sm => ("0.75rem", "0.375rem 0.75rem"),
        Size::Md => ("0.875rem", "0.5rem 1rem"),
        Size::Lg => ("1rem", "0.75rem 1.5rem"),
    };
    let active = *hovered && !props.disabled;

    let style = format!(
        "background-color: {}; color: {}; border: 1px solid {}; border-radius: {}; \
         font-size: {}; padding: {}; font-weight: {}; cursor: {}; opacity: {}; \
         transition: all {} ease; {}",
        if active { hover_background } else { background },
        color,
        border,
        theme.radius.md,
        font_size,
        padding,
        theme.typography.font_weight.medium,
        if props.disabled { "not-allowed" } else { "pointer" },
        if props.disabled { "0.6" } else { "1" },
        theme.animation.fast,
        props.style,
    );

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <button
            type={props.button_type}
            style={style}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
            {onmouseenter}
            {onmouseleave}
        >
            { for props.children.iter() }
        </button>
    }
}
