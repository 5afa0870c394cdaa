use yew::prelude::*;

use crate::hooks::use_scroll_reveal;
use crate::motion::{Direction, Motion};
use crate::reveal::RevealConfig;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(800)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(30)]
    pub distance_px: u32,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: String,
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let reveal = use_scroll_reveal(RevealConfig {
        threshold: props.threshold,
        ..RevealConfig::default()
    });

    let motion = Motion {
        direction: props.direction,
        distance_px: props.distance_px,
        duration_ms: props.duration_ms,
        delay_ms: props.delay_ms,
    };

    html! {
        <div
            ref={reveal.node_ref}
            class={props.class.clone()}
            style={format!("{} {}", motion.style(reveal.is_revealed), props.style)}
        >
            { for props.children.iter() }
        </div>
    }
}
