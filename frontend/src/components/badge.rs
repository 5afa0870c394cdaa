use yew::prelude::*;

use crate::components::button::Size;
use crate::theme::use_theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
}

/// Badge text plus colour, for components that render an optional badge.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeLabel {
    pub text: AttrValue,
    pub variant: BadgeVariant,
}

impl BadgeLabel {
    pub fn new(text: &'static str, variant: BadgeVariant) -> Self {
        BadgeLabel {
            text: AttrValue::Static(text),
            variant,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub size: Size,
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let theme = use_theme();
    let colors = &theme.colors;

    // (background, text, border)
    let (background, color, border) = match props.variant {
        BadgeVariant::Primary => (colors.primary.s100, colors.primary.s700, colors.primary.s200),
        BadgeVariant::Secondary => (colors.neutral.s100, colors.neutral.s700, colors.neutral.s200),
        BadgeVariant::Success => ("#f0fff4", colors.semantic.success, "#bbf7d0"),
        BadgeVariant::Warning => ("#fef3c7", "#92400e", "#fde68a"),
        BadgeVariant::Error => ("#fef2f2", colors.semantic.error, "#fecaca"),
        BadgeVariant::Info => ("#eff6ff", colors.semantic.info, "#bfdbfe"),
    };
    let (font_size, padding) = match props.size {
        Size::Sm => (theme.typography.font_size.xs, format!("{} {}", theme.space(1), theme.space(2))),
        Size::Md => (theme.typography.font_size.sm, format!("{} {}", theme.space(1), theme.space(3))),
        Size::Lg => (theme.typography.font_size.base, format!("{} {}", theme.space(2), theme.space(4))),
    };

    html! {
        <span style={format!(
            "display: inline-flex; align-items: center; border-radius: {}; font-weight: {}; \
             background-color: {}; color: {}; border: 1px solid {}; font-size: {}; padding: {};",
            theme.radius.full,
            theme.typography.font_weight.medium,
            background,
            color,
            border,
            font_size,
            padding,
        )}>
            { for props.children.iter() }
        </span>
    }
}
