use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::components::badge::{Badge, BadgeLabel};
use crate::components::button::{Button, ButtonVariant, Size};
use crate::components::fade_in::FadeIn;
use crate::config::DEFAULT_COUNTER_DURATION_MS;
use crate::hooks::{use_counter, use_scroll_reveal};
use crate::motion::Direction;
use crate::reveal::RevealConfig;
use crate::theme::{use_theme, Theme};

#[derive(Clone, Debug, PartialEq)]
pub enum StatValue {
    Number(u32),
    Text(AttrValue),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroStat {
    pub value: StatValue,
    pub suffix: AttrValue,
    pub label: AttrValue,
    /// Count up from zero when the stat scrolls into view.
    pub animate: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroAction {
    pub text: AttrValue,
    pub href: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HeroMedia {
    Image { src: AttrValue, alt: AttrValue },
    Video { src: AttrValue, poster: Option<AttrValue> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroFeature {
    pub icon: AttrValue,
    pub text: AttrValue,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroVariant {
    #[default]
    Default,
    Gradient,
    Minimal,
    /// Soft gradient with floating particles.
    Interactive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    pub fn justify(self) -> &'static str {
        match self {
            TextAlign::Left => "flex-start",
            TextAlign::Center => "center",
            TextAlign::Right => "flex-end",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeroSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroScale {
    /// Vertical padding.
    pub padding: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Width cap of centred content.
    pub max_width: &'static str,
}

impl HeroSize {
    pub fn scale(self, theme: &Theme) -> HeroScale {
        let fs = &theme.typography.font_size;
        match self {
            HeroSize::Sm => HeroScale {
                padding: theme.space(16),
                title: fs.xl3,
                subtitle: fs.xl,
                description: fs.base,
                max_width: "600px",
            },
            HeroSize::Md => HeroScale {
                padding: theme.space(20),
                title: fs.xl4,
                subtitle: fs.xl2,
                description: fs.lg,
                max_width: "700px",
            },
            HeroSize::Lg => HeroScale {
                padding: theme.space(24),
                title: fs.xl5,
                subtitle: fs.xl3,
                description: fs.xl,
                max_width: "800px",
            },
            HeroSize::Xl => HeroScale {
                padding: theme.space(32),
                title: fs.xl6,
                subtitle: fs.xl4,
                description: fs.xl2,
                max_width: "900px",
            },
        }
    }
}

/// `12584` becomes `"12,584"`.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One floating dot of the interactive background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub opacity: f32,
    pub duration_s: f32,
    pub delay_s: f32,
}

pub const PARTICLE_COUNT: usize = 20;

/// Scattered particle layout. Derived from the index so every render of a
/// hero places the particles identically.
pub fn particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let mut seed = (i as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            let mut unit = || {
                // xorshift64
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                (seed >> 40) as f32 / (1u64 << 24) as f32
            };
            Particle {
                size_px: unit() * 4.0 + 2.0,
                left_pct: unit() * 100.0,
                top_pct: unit() * 100.0,
                opacity: unit() * 0.5 + 0.2,
                duration_s: unit() * 3.0 + 2.0,
                delay_s: unit() * 2.0,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub badge: Option<BadgeLabel>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub primary_action: Option<HeroAction>,
    #[prop_or_default]
    pub secondary_action: Option<HeroAction>,
    #[prop_or_default]
    pub media: Option<HeroMedia>,
    #[prop_or_default]
    pub stats: Vec<HeroStat>,
    #[prop_or_default]
    pub features: Vec<HeroFeature>,
    #[prop_or_default]
    pub background_image: Option<AttrValue>,
    #[prop_or(true)]
    pub background_overlay: bool,
    #[prop_or_default]
    pub text_align: TextAlign,
    #[prop_or_default]
    pub size: HeroSize,
    #[prop_or_default]
    pub variant: HeroVariant,
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: HeroStat,
    on_gradient: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let theme = use_theme();
    let reveal = use_scroll_reveal(RevealConfig::default());
    let stat = &props.stat;
    let target = match stat.value {
        StatValue::Number(n) if stat.animate => n,
        _ => 0,
    };
    let counted = use_counter(target, DEFAULT_COUNTER_DURATION_MS, reveal.is_revealed && target > 0);

    let shown = match &stat.value {
        StatValue::Number(_) if stat.animate => group_thousands(counted),
        StatValue::Number(n) => group_thousands(*n),
        StatValue::Text(text) => text.to_string(),
    };

    html! {
        <div ref={reveal.node_ref} style="text-align: center;">
            <div style={format!(
                "font-size: {}; font-weight: {}; color: {}; margin-bottom: {};",
                theme.typography.font_size.xl3,
                theme.typography.font_weight.bold,
                if props.on_gradient { theme.colors.text.inverse } else { theme.colors.primary.s600 },
                theme.space(2),
            )}>{format!("{}{}", shown, stat.suffix)}</div>
            <div style={format!(
                "font-size: {}; font-weight: {}; color: {};",
                theme.typography.font_size.sm,
                theme.typography.font_weight.medium,
                if props.on_gradient { "rgba(255, 255, 255, 0.8)" } else { theme.colors.text.secondary },
            )}>
                {stat.label.clone()}
            </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = use_theme();
    let (window_width, _) = use_window_size();
    let particle_layout = use_memo(|_| particles(PARTICLE_COUNT), ());

    let is_mobile = window_width < 768.0;
    let scale = props.size.scale(theme);
    let align = props.text_align;
    let centered = align == TextAlign::Center;
    let gradient = props.variant == HeroVariant::Gradient;
    let image = props.background_image.as_ref();
    let on_image = image.is_some() || gradient;

    let background = match props.variant {
        HeroVariant::Gradient => format!(
            "background: linear-gradient(135deg, {} 0%, {} 100%); color: {};",
            theme.colors.primary.s600, theme.colors.primary.s800, theme.colors.text.inverse
        ),
        HeroVariant::Interactive => format!(
            "background: linear-gradient(135deg, {} 0%, {} 100%);",
            theme.colors.primary.s50, theme.colors.primary.s100
        ),
        HeroVariant::Minimal => "background-color: transparent;".to_string(),
        HeroVariant::Default if image.is_some() => "background-color: transparent;".to_string(),
        HeroVariant::Default => format!("background-color: {};", theme.colors.surfaces.background),
    };
    let text_shadow = |strong: &'static str| if image.is_some() { strong } else { "none" };

    let action = |action: &HeroAction, variant: ButtonVariant| {
        html! {
            <a href={action.href.clone()} style="text-decoration: none;">
                <Button {variant} size={Size::Lg} style="min-width: 140px;">{action.text.clone()}</Button>
            </a>
        }
    };
    let has_actions = props.primary_action.is_some() || props.secondary_action.is_some();

    let media = props.media.as_ref().map(|media| {
        let body = match media {
            HeroMedia::Image { src, alt } => html! {
                <img src={src.clone()} alt={alt.clone()} style="width: 100%; height: auto; display: block;" />
            },
            HeroMedia::Video { src, poster } => html! {
                <video src={src.clone()} poster={poster.clone()} controls=true style="width: 100%; height: auto; display: block;" />
            },
        };
        html! {
            <div style={format!("border-radius: {}; overflow: hidden; box-shadow: {};", theme.radius.xl, theme.shadows.xl)}>
                {body}
            </div>
        }
    });
    let has_media = media.is_some();

    html! {
        <section class="hero" style={format!("position: relative; overflow: hidden; {}", background)}>
            if let Some(image) = image {
                <div style={format!(
                    "position: absolute; inset: 0; background-image: url({}); background-size: cover; \
                     background-position: center; background-repeat: no-repeat; z-index: 1;",
                    image,
                )} />
                if props.background_overlay {
                    <div style={format!(
                        "position: absolute; inset: 0; background-color: {}; z-index: 2;",
                        if gradient { "rgba(0, 0, 0, 0.15)" } else { "rgba(0, 0, 0, 0.2)" },
                    )} />
                }
            }
            <div style={format!(
                "position: relative; z-index: 3; max-width: 1400px; margin: 0 auto; padding: {} {}; display: grid; \
                 grid-template-columns: {}; gap: {}; align-items: center; min-height: {};",
                scale.padding,
                if is_mobile { theme.space(8) } else { theme.space(6) },
                if has_media && !is_mobile { "1fr 1fr" } else { "1fr" },
                theme.space(12),
                if has_media { "auto" } else { "60vh" },
            )}>
                <div style={format!(
                    "text-align: {}; max-width: {}; margin: {}; padding: {};",
                    align.css(),
                    if centered { scale.max_width } else { "100%" },
                    if centered { "0 auto" } else { "0" },
                    if is_mobile { format!("0 {}", theme.space(4)) } else { "0".to_string() },
                )}>
                    if let Some(badge) = &props.badge {
                        <FadeIn delay_ms={100} direction={Direction::Up}>
                            <div style={format!("margin-bottom: {};", theme.space(4))}>
                                <Badge variant={badge.variant}>{badge.text.clone()}</Badge>
                            </div>
                        </FadeIn>
                    }
                    if let Some(subtitle) = &props.subtitle {
                        <FadeIn delay_ms={300} direction={Direction::Up}>
                            <h2 style={format!(
                                "font-size: {}; font-weight: {}; color: {}; margin: 0 0 {}; line-height: {}; text-shadow: {};",
                                scale.subtitle,
                                theme.typography.font_weight.medium,
                                if on_image { "#f0f9ff" } else { theme.colors.text.accent },
                                theme.space(2),
                                theme.typography.line_height.tight,
                                text_shadow("1px 1px 6px rgba(0, 0, 0, 0.7), 0 0 8px rgba(0, 0, 0, 0.3)"),
                            )}>{subtitle.clone()}</h2>
                        </FadeIn>
                    }
                    <FadeIn delay_ms={500} direction={Direction::Up}>
                        <h1 style={format!(
                            "font-size: {}; font-weight: {}; line-height: {}; color: {}; margin: 0 0 {}; \
                             letter-spacing: -0.025em; text-shadow: {};",
                            scale.title,
                            theme.typography.font_weight.bold,
                            theme.typography.line_height.tight,
                            if on_image { "#ffffff" } else { theme.colors.text.primary },
                            if props.description.is_some() { theme.space(6) } else { theme.space(8) },
                            text_shadow("2px 2px 8px rgba(0, 0, 0, 0.8), 0 0 12px rgba(0, 0, 0, 0.3)"),
                        )}>{props.title.clone()}</h1>
                    </FadeIn>
                    if let Some(description) = &props.description {
                        <FadeIn delay_ms={700} direction={Direction::Up}>
                            <p style={format!(
                                "font-size: {}; color: {}; line-height: {}; max-width: {}; margin: {}; text-shadow: {};",
                                scale.description,
                                if on_image { "#e2e8f0" } else { theme.colors.text.secondary },
                                theme.typography.line_height.relaxed,
                                if centered { "600px" } else { "100%" },
                                if centered {
                                    format!("0 auto {}", theme.space(8))
                                } else {
                                    format!("0 0 {}", theme.space(8))
                                },
                                text_shadow("1px 1px 4px rgba(0, 0, 0, 0.6), 0 0 6px rgba(0, 0, 0, 0.3)"),
                            )}>{description.clone()}</p>
                        </FadeIn>
                    }
                    if has_actions {
                        <FadeIn delay_ms={900} direction={Direction::Up}>
                            <div style={format!(
                                "display: flex; gap: {}; justify-content: {}; flex-wrap: wrap;",
                                theme.space(4),
                                align.justify(),
                            )}>
                                if let Some(primary) = &props.primary_action {
                                    { action(primary, ButtonVariant::Primary) }
                                }
                                if let Some(secondary) = &props.secondary_action {
                                    { action(secondary, ButtonVariant::Secondary) }
                                }
                            </div>
                        </FadeIn>
                    }
                    if !props.features.is_empty() {
                        <div style={format!(
                            "display: flex; flex-wrap: wrap; gap: {}; justify-content: {}; margin-top: {};",
                            theme.space(4),
                            if centered { "center" } else { "flex-start" },
                            theme.space(8),
                        )}>
                            { for props.features.iter().map(|feature| html! {
                                <div style={format!(
                                    "display: flex; align-items: center; gap: {}; padding: {} {}; background-color: {}; \
                                     border-radius: {}; font-size: {}; color: {};",
                                    theme.space(2),
                                    theme.space(2),
                                    theme.space(4),
                                    if gradient { "rgba(255, 255, 255, 0.1)" } else { theme.colors.surfaces.panel },
                                    theme.radius.full,
                                    theme.typography.font_size.sm,
                                    if gradient { theme.colors.text.inverse } else { theme.colors.text.secondary },
                                )}>
                                    <span style="font-size: 1.2em;">{feature.icon.clone()}</span>
                                    <span>{feature.text.clone()}</span>
                                </div>
                            }) }
                        </div>
                    }
                    if !props.stats.is_empty() {
                        <div style={format!(
                            "display: grid; grid-template-columns: repeat({}, 1fr); gap: {}; margin-top: {}; padding: {}; \
                             background-color: {}; border-radius: {}; backdrop-filter: blur(10px);",
                            props.stats.len().min(3),
                            theme.space(8),
                            theme.space(12),
                            theme.space(6),
                            if gradient { "rgba(255, 255, 255, 0.1)" } else { theme.colors.surfaces.elevated },
                            theme.radius.xl,
                        )}>
                            { for props.stats.iter().map(|stat| html! {
                                <StatCounter stat={stat.clone()} on_gradient={gradient} />
                            }) }
                        </div>
                    }
                </div>
                { media.unwrap_or_default() }
            </div>
            if props.variant == HeroVariant::Interactive {
                <div style="position: absolute; inset: 0; overflow: hidden; pointer-events: none; z-index: 1;">
                    { for particle_layout.iter().map(|p| html! {
                        <div style={format!(
                            "position: absolute; width: {size:.1}px; height: {size:.1}px; background-color: {}; border-radius: 50%; \
                             left: {:.1}%; top: {:.1}%; opacity: {:.2}; animation: float {:.2}s ease-in-out infinite {:.2}s;",
                            theme.colors.primary.s300,
                            p.left_pct,
                            p.top_pct,
                            p.opacity,
                            p.duration_s,
                            p.delay_s,
                            size = p.size_px,
                        )} />
                    }) }
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1247), "1,247");
        assert_eq!(group_thousands(12584), "12,584");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn sizes_scale_the_title() {
        let theme = &Theme::DARK;
        assert_eq!(HeroSize::default().scale(theme).title, theme.typography.font_size.xl5);
        assert_eq!(HeroSize::Sm.scale(theme).max_width, "600px");
        assert_eq!(HeroSize::Xl.scale(theme).padding, "8rem");
        assert_eq!(HeroSize::Xl.scale(theme).title, theme.typography.font_size.xl6);
    }

    #[test]
    fn alignment() {
        assert_eq!(TextAlign::default().css(), "center");
        assert_eq!(TextAlign::Right.justify(), "flex-end");
        assert_eq!(TextAlign::Left.justify(), "flex-start");
    }

    #[test]
    fn particles_are_stable_and_in_range() {
        let layout = particles(PARTICLE_COUNT);
        assert_eq!(layout.len(), PARTICLE_COUNT);
        assert_eq!(layout, particles(PARTICLE_COUNT));
        for p in &layout {
            assert!((2.0..6.0).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.2..0.7).contains(&p.opacity));
            assert!((2.0..5.0).contains(&p.duration_s));
            assert!((0.0..2.0).contains(&p.delay_s));
        }
        assert_ne!(layout[0], layout[1]);
    }
}
