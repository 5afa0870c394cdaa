use yew::prelude::*;

use crate::components::button::Size;
use crate::theme::{use_theme, Theme};

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureStat {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureCardVariant {
    #[default]
    Default,
    Minimal,
    Bordered,
}

/// Type and spacing scale for one card size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureScale {
    pub padding: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stat_value: &'static str,
    pub stat_label: &'static str,
}

impl FeatureScale {
    pub fn for_size(theme: &Theme, size: Size) -> Self {
        let fs = &theme.typography.font_size;
        match size {
            Size::Sm => FeatureScale {
                padding: theme.space(4),
                icon: "32px",
                title: fs.lg,
                description: fs.sm,
                stat_value: fs.xl,
                stat_label: fs.xs,
            },
            Size::Md => FeatureScale {
                padding: theme.space(6),
                icon: "48px",
                title: fs.xl,
                description: fs.base,
                stat_value: fs.xl2,
                stat_label: fs.sm,
            },
            Size::Lg => FeatureScale {
                padding: theme.space(8),
                icon: "64px",
                title: fs.xl2,
                description: fs.lg,
                stat_value: fs.xl3,
                stat_label: fs.base,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub stats: Option<FeatureStat>,
    #[prop_or_default]
    pub highlight: bool,
    #[prop_or_default]
    pub variant: FeatureCardVariant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or(true)]
    pub hover: bool,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let theme = use_theme();
    let hovered = use_state(|| false);
    let scale = FeatureScale::for_size(theme, props.size);
    let lifted = props.hover && *hovered;
    let primary = &theme.colors.primary;

    let frame = match props.variant {
        FeatureCardVariant::Minimal => "background-color: transparent; border: none;".to_string(),
        FeatureCardVariant::Bordered => format!(
            "background-color: {}; border: 2px solid {}; border-radius: {};",
            theme.colors.surfaces.background,
            if props.highlight { primary.s500 } else { theme.colors.border.primary },
            theme.radius.xl,
        ),
        FeatureCardVariant::Default => format!(
            "background-color: {}; border: 1px solid {}; border-radius: {};",
            if props.highlight { primary.s50 } else { theme.colors.surfaces.elevated },
            if props.highlight { primary.s200 } else { theme.colors.border.primary },
            theme.radius.lg,
        ),
    };
    let lift = if lifted && props.variant != FeatureCardVariant::Minimal {
        format!("transform: translateY(-2px); box-shadow: {};", theme.shadows.lg)
    } else {
        String::new()
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div {onmouseenter} {onmouseleave} style={format!(
            "{} {} padding: {}; height: 100%; display: flex; flex-direction: column; text-align: center; \
             position: relative; transition: all {} ease;",
            frame,
            lift,
            scale.padding,
            theme.animation.normal,
        )}>
            if props.highlight && props.variant == FeatureCardVariant::Default {
                <div style={format!(
                    "position: absolute; top: 0; left: 50%; transform: translateX(-50%); width: 60px; height: 4px; \
                     background-color: {}; border-radius: 0 0 {} {};",
                    primary.s500,
                    theme.radius.sm,
                    theme.radius.sm,
                )} />
            }
            <div style={format!(
                "font-size: {}; color: {}; margin-bottom: {}; display: flex; align-items: center; \
                 justify-content: center; transition: transform 0.2s ease; transform: scale({});",
                scale.icon,
                if props.highlight { primary.s600 } else { primary.s500 },
                theme.space(4),
                if *hovered { "1.1" } else { "1" },
            )}>{props.icon.clone()}</div>
            if let Some(stats) = &props.stats {
                <div style={format!("margin-bottom: {};", theme.space(4))}>
                    <div style={format!(
                        "font-size: {}; font-weight: {}; color: {}; line-height: {};",
                        scale.stat_value,
                        theme.typography.font_weight.bold,
                        primary.s600,
                        theme.typography.line_height.tight,
                    )}>{stats.value.clone()}</div>
                    <div style={format!(
                        "font-size: {}; color: {}; font-weight: {}; text-transform: uppercase; letter-spacing: 0.025em;",
                        scale.stat_label,
                        theme.colors.text.tertiary,
                        theme.typography.font_weight.medium,
                    )}>{stats.label.clone()}</div>
                </div>
            }
            <h3 style={format!(
                "font-size: {}; font-weight: {}; color: {}; margin-bottom: {}; line-height: {};",
                scale.title,
                theme.typography.font_weight.semibold,
                if props.highlight { primary.s800 } else { theme.colors.text.primary },
                theme.space(3),
                theme.typography.line_height.tight,
            )}>{props.title.clone()}</h3>
            <p style={format!(
                "font-size: {}; color: {}; line-height: {}; flex: 1;",
                scale.description,
                theme.colors.text.secondary,
                theme.typography.line_height.relaxed,
            )}>{props.description.clone()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_grows_with_size() {
        let theme = &Theme::DARK;
        let sm = FeatureScale::for_size(theme, Size::Sm);
        let lg = FeatureScale::for_size(theme, Size::Lg);
        assert_eq!(sm.icon, "32px");
        assert_eq!(FeatureScale::for_size(theme, Size::default()).icon, "48px");
        assert_eq!(lg.icon, "64px");
        assert_eq!(sm.padding, "1rem");
        assert_eq!(lg.padding, "2rem");
        assert_eq!(lg.title, theme.typography.font_size.xl2);
    }
}
