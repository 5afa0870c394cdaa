use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::theme::{use_theme, Theme};

const ERROR_BORDER: &str = "#cf222e";

/// Border colour for the input's current state. An error wins over focus,
/// focus wins over hover.
pub fn border_color(theme: &Theme, has_error: bool, focused: bool, hovered: bool) -> &'static str {
    if has_error {
        ERROR_BORDER
    } else if focused {
        theme.colors.border.focus
    } else if hovered {
        theme.colors.border.hover
    } else {
        theme.colors.border.primary
    }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub style: String,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let theme = use_theme();
    let focused = use_state(|| false);
    let hovered = use_state(|| false);

    let border = border_color(theme, props.error.is_some(), *focused, *hovered);
    let style = format!(
        "width: 100%; padding: {} {}; background-color: {}; border: 1px solid {}; border-radius: {}; \
         font-size: {}; color: {}; font-family: inherit; outline: none; box-shadow: {}; \
         transition: all {} ease; {}",
        theme.space(2),
        theme.space(3),
        theme.colors.surfaces.background,
        border,
        theme.radius.md,
        theme.typography.font_size.sm,
        theme.colors.text.primary,
        if *focused { format!("0 0 0 3px {}33", theme.colors.primary.s500) } else { "none".to_string() },
        theme.animation.fast,
        props.style,
    );

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let oninput = props
        .oninput
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());

    html! {
        <div style={format!("display: flex; flex-direction: column; gap: {};", theme.space(1))}>
            if let Some(label) = &props.label {
                <label style={format!(
                    "font-size: {}; font-weight: {}; color: {};",
                    theme.typography.font_size.sm,
                    theme.typography.font_weight.medium,
                    theme.colors.text.primary,
                )}>{label.clone()}</label>
            }
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {style}
                {oninput}
                {onfocus}
                {onblur}
                {onmouseenter}
                {onmouseleave}
            />
            if let Some(error) = &props.error {
                <span style={format!(
                    "font-size: {}; color: {};",
                    theme.typography.font_size.xs,
                    theme.colors.semantic.error,
                )}>{error.clone()}</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_border_beats_focus_and_hover() {
        let theme = &Theme::DARK;
        assert_eq!(border_color(theme, true, true, true), ERROR_BORDER);
        assert_eq!(border_color(theme, false, true, true), theme.colors.border.focus);
        assert_eq!(border_color(theme, false, false, true), theme.colors.border.hover);
        assert_eq!(border_color(theme, false, false, false), theme.colors.border.primary);
    }
}
