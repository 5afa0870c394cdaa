use yew::prelude::*;

use crate::components::badge::{Badge, BadgeLabel};
use crate::components::button::Size;
use crate::theme::{use_theme, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    pub fn store_name(self) -> &'static str {
        match self {
            Platform::Ios => "App Store",
            Platform::Android => "Google Play",
            Platform::Web => "Web App",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Platform::Ios => "🍎",
            Platform::Android => "🤖",
            Platform::Web => "🌐",
        }
    }

    /// Call to action shown above the store name.
    pub fn prefix(self) -> &'static str {
        match self {
            Platform::Ios => "Download on the",
            Platform::Android => "Get it on",
            Platform::Web => "Launch",
        }
    }

    pub fn background(self, theme: &Theme) -> &'static str {
        match self {
            Platform::Ios => "#000000",
            Platform::Android => "#01875f",
            Platform::Web => theme.colors.primary.s600,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rating {
    pub score: f32,
    pub count: AttrValue,
}

impl Rating {
    /// Whole stars out of five.
    pub fn filled_stars(&self) -> usize {
        self.score.floor().clamp(0.0, 5.0) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppStoreVariant {
    Button,
    #[default]
    Card,
}

#[derive(Properties, PartialEq)]
pub struct AppStoreCardProps {
    pub platform: Platform,
    pub app_name: AttrValue,
    pub download_url: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub rating: Option<Rating>,
    #[prop_or_default]
    pub badge: Option<BadgeLabel>,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub variant: AppStoreVariant,
    #[prop_or(true)]
    pub hover: bool,
}

#[function_component(AppStoreCard)]
pub fn app_store_card(props: &AppStoreCardProps) -> Html {
    let theme = use_theme();
    let hovered = use_state(|| false);
    let platform = props.platform;
    let fs = &theme.typography.font_size;
    let button = props.variant == AppStoreVariant::Button;
    let lifted = props.hover && *hovered;

    // (padding, icon, title, subtitle, description, min height)
    let (padding, icon_size, title_size, subtitle_size, description_size, min_height) = match (props.size, button) {
        (Size::Sm, true) => (format!("{} {}", theme.space(2), theme.space(4)), "20px", fs.sm, fs.xs, fs.sm, "44px"),
        (Size::Md, true) => (format!("{} {}", theme.space(3), theme.space(6)), "24px", fs.base, fs.sm, fs.base, "52px"),
        (Size::Lg, true) => (format!("{} {}", theme.space(4), theme.space(8)), "28px", fs.lg, fs.base, fs.lg, "60px"),
        (Size::Sm, false) => (theme.space(4).to_string(), "32px", fs.lg, fs.sm, fs.sm, "auto"),
        (Size::Md, false) => (theme.space(6).to_string(), "48px", fs.xl, fs.base, fs.base, "auto"),
        (Size::Lg, false) => (theme.space(8).to_string(), "64px", fs.xl2, fs.lg, fs.lg, "auto"),
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    if button {
        return html! {
            <a href={props.download_url.clone()} target="_blank" rel="noopener noreferrer"
                {onmouseenter} {onmouseleave}
                style={format!(
                    "display: flex; align-items: center; gap: {}; background-color: {}; color: #ffffff; border-radius: {}; \
                     padding: {}; min-height: {}; text-align: left; text-decoration: none; transition: all 0.2s ease; {}",
                    theme.space(3),
                    platform.background(theme),
                    theme.radius.lg,
                    padding,
                    min_height,
                    if lifted {
                        format!("transform: translateY(-2px); box-shadow: {}; opacity: 0.9;", theme.shadows.lg)
                    } else {
                        String::new()
                    },
                )}
            >
                <div style={format!("font-size: {};", icon_size)}>{platform.icon()}</div>
                <div>
                    <div style={format!("font-size: {}; opacity: 0.8; line-height: 1.2;", subtitle_size)}>{platform.prefix()}</div>
                    <div style={format!(
                        "font-size: {}; font-weight: {}; line-height: 1.2;",
                        title_size,
                        theme.typography.font_weight.semibold,
                    )}>{platform.store_name()}</div>
                </div>
            </a>
        };
    }

    html! {
        <a href={props.download_url.clone()} target="_blank" rel="noopener noreferrer"
            {onmouseenter} {onmouseleave}
            style={format!(
                "display: block; text-align: center; text-decoration: none; background-color: {}; border: 1px solid {}; \
                 border-radius: {}; padding: {}; box-shadow: {}; transform: {}; transition: all {} ease;",
                theme.colors.surfaces.elevated,
                if lifted { theme.colors.border.hover } else { theme.colors.border.primary },
                theme.radius.lg,
                padding,
                if lifted { theme.shadows.lg } else { theme.shadows.sm },
                if lifted { "translateY(-2px)" } else { "none" },
                theme.animation.normal,
            )}
        >
            if let Some(badge) = &props.badge {
                <div style={format!("margin-bottom: {};", theme.space(3))}>
                    <Badge variant={badge.variant} size={Size::Sm}>{badge.text.clone()}</Badge>
                </div>
            }
            <div style={format!(
                "font-size: {}; display: flex; align-items: center; justify-content: center; width: 80px; height: 80px; \
                 margin: 0 auto {}; background-color: {}; border-radius: {}; transition: transform 0.2s ease; transform: scale({});",
                icon_size,
                theme.space(4),
                platform.background(theme),
                theme.radius.xl,
                if *hovered { "1.05" } else { "1" },
            )}>{platform.icon()}</div>
            <h3 style={format!(
                "font-size: {}; font-weight: {}; color: {}; margin-bottom: {}; line-height: {};",
                title_size,
                theme.typography.font_weight.semibold,
                theme.colors.text.primary,
                theme.space(2),
                theme.typography.line_height.tight,
            )}>{props.app_name.clone()}</h3>
            <p style={format!(
                "font-size: {}; color: {}; font-weight: {}; margin-bottom: {};",
                subtitle_size,
                theme.colors.text.secondary,
                theme.typography.font_weight.medium,
                if props.description.is_some() { theme.space(3) } else { theme.space(4) },
            )}>{format!("{} {}", platform.prefix(), platform.store_name())}</p>
            if let Some(description) = &props.description {
                <p style={format!(
                    "font-size: {}; color: {}; line-height: {}; margin-bottom: {};",
                    description_size,
                    theme.colors.text.secondary,
                    theme.typography.line_height.relaxed,
                    theme.space(4),
                )}>{description.clone()}</p>
            }
            if let Some(rating) = &props.rating {
                <div style={format!(
                    "display: flex; align-items: center; justify-content: center; gap: {}; margin-bottom: {};",
                    theme.space(2),
                    theme.space(4),
                )}>
                    <div style="display: flex; gap: 2px;">
                        { for (0..5).map(|i| html! {
                            <span style={format!(
                                "color: {}; font-size: {};",
                                if i < rating.filled_stars() { "#fbbf24" } else { theme.colors.border.primary },
                                fs.sm,
                            )}>{"★"}</span>
                        }) }
                    </div>
                    <span style={format!("font-size: {}; color: {};", fs.sm, theme.colors.text.tertiary)}>
                        {format!("{} ({})", rating.score, rating.count)}
                    </span>
                </div>
            }
            <div style={format!(
                "background-color: {}; color: #ffffff; padding: {} {}; border-radius: {}; font-size: {}; font-weight: {}; \
                 transition: all 0.2s ease; opacity: {};",
                platform.background(theme),
                theme.space(3),
                theme.space(6),
                theme.radius.lg,
                subtitle_size,
                theme.typography.font_weight.semibold,
                if *hovered { "0.9" } else { "1" },
            )}>{"Download Now"}</div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_floor_the_score() {
        let rating = |score| Rating { score, count: AttrValue::Static("1k") };
        assert_eq!(rating(4.8).filled_stars(), 4);
        assert_eq!(rating(5.0).filled_stars(), 5);
        assert_eq!(rating(7.5).filled_stars(), 5);
        assert_eq!(rating(-1.0).filled_stars(), 0);
    }

    #[test]
    fn platforms() {
        assert_eq!(Platform::Ios.prefix(), "Download on the");
        assert_eq!(Platform::Android.background(&Theme::DARK), "#01875f");
        assert_eq!(Platform::Web.background(&Theme::DARK), Theme::DARK.colors.primary.s600);
        assert_eq!(Platform::Web.store_name(), "Web App");
    }
}
