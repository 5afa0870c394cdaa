use yew::prelude::*;

use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or(true)]
    pub hover: bool,
    #[prop_or_default]
    pub style: String,
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let theme = use_theme();
    let hovered = use_state(|| false);
    let lifted = props.hover && *hovered;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            {onmouseenter}
            {onmouseleave}
            style={format!(
                "background-color: {}; border: 1px solid {}; border-radius: {}; padding: {}; \
                 box-shadow: {}; transform: {}; transition: all {} {}; height: 100%; \
                 display: flex; flex-direction: column; {}",
                theme.colors.surfaces.elevated,
                if lifted { theme.colors.border.hover } else { theme.colors.border.primary },
                theme.radius.lg,
                theme.space(6),
                if lifted { theme.shadows.lg } else { theme.shadows.sm },
                if lifted { "translateY(-2px)" } else { "none" },
                theme.animation.normal,
                theme.animation.ease_in_out,
                props.style,
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
