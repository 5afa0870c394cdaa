use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant, Size};
use crate::theme::{ThemeContext, ThemeMode};

/// Label for the button that would switch away from `mode`.
pub fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "🌙 Dark",
        ThemeMode::Dark => "☀️ Light",
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    /// Pin to the top right corner of the viewport instead of flowing inline.
    #[prop_or_default]
    pub fixed: bool,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let context = use_context::<ThemeContext>().unwrap_or_default();
    let label = toggle_label(context.mode);

    let onclick = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| context.toggle())
    };
    let style = if props.fixed {
        "position: fixed; top: 20px; right: 20px; z-index: 50;".to_string()
    } else {
        String::new()
    };

    html! {
        <Button variant={ButtonVariant::Secondary} size={Size::Sm} {onclick} {style}>
            {label}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_other_mode() {
        assert_eq!(toggle_label(ThemeMode::Dark), "☀️ Light");
        assert_eq!(toggle_label(ThemeMode::Light), "🌙 Dark");
    }
}
