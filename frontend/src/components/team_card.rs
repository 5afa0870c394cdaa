use yew::prelude::*;

use crate::theme::use_theme;

/// Up to two uppercase initials, one per space-separated word.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SocialLinks {
    pub linkedin: Option<AttrValue>,
    pub twitter: Option<AttrValue>,
    pub github: Option<AttrValue>,
    pub email: Option<AttrValue>,
}

impl SocialLinks {
    /// `(glyph, url)` for every link that is set, in display order.
    pub fn entries(&self) -> Vec<(&'static str, AttrValue)> {
        [
            ("in", &self.linkedin),
            ("X", &self.twitter),
            ("gh", &self.github),
            ("@", &self.email),
        ]
        .into_iter()
        .filter_map(|(glyph, url)| url.clone().map(|url| (glyph, url)))
        .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeamCardVariant {
    #[default]
    Default,
    Compact,
    Detailed,
}

impl TeamCardVariant {
    pub fn avatar_px(self) -> u32 {
        match self {
            TeamCardVariant::Compact => 80,
            TeamCardVariant::Default => 100,
            TeamCardVariant::Detailed => 120,
        }
    }

    pub fn shows_bio(self) -> bool {
        self != TeamCardVariant::Compact
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub name: AttrValue,
    pub role: AttrValue,
    #[prop_or_default]
    pub bio: Option<AttrValue>,
    #[prop_or_default]
    pub avatar: Option<AttrValue>,
    #[prop_or_default]
    pub social: SocialLinks,
    #[prop_or_default]
    pub variant: TeamCardVariant,
    #[prop_or(true)]
    pub hover: bool,
}

#[derive(Properties, PartialEq)]
struct SocialLinkProps {
    glyph: &'static str,
    href: AttrValue,
}

#[function_component(SocialLink)]
fn social_link(props: &SocialLinkProps) -> Html {
    let theme = use_theme();
    let hovered = use_state(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <a href={props.href.clone()} target="_blank" rel="noopener noreferrer" {onmouseenter} {onmouseleave} style={format!(
            "width: 32px; height: 32px; border-radius: {}; background-color: {}; color: {}; display: flex; \
             align-items: center; justify-content: center; text-decoration: none; font-size: {}; transition: all 0.2s ease;",
            theme.radius.md,
            if *hovered { theme.colors.primary.s500 } else { theme.colors.surfaces.panel },
            if *hovered { theme.colors.text.inverse } else { theme.colors.text.secondary },
            theme.typography.font_size.sm,
        )}>{props.glyph}</a>
    }
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let theme = use_theme();
    let hovered = use_state(|| false);
    let variant = props.variant;
    let detailed = variant == TeamCardVariant::Detailed;
    let compact = variant == TeamCardVariant::Compact;
    let lifted = props.hover && *hovered;
    let avatar_px = variant.avatar_px();

    let layout = if detailed {
        format!("display: flex; gap: {}; align-items: flex-start;", theme.space(6))
    } else {
        "text-align: center;".to_string()
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let avatar = html! {
        <div style={format!(
            "width: {px}px; height: {px}px; border-radius: 50%; background-color: {}; color: {}; display: flex; \
             align-items: center; justify-content: center; font-size: {}; font-weight: {}; overflow: hidden; \
             margin: {}; flex-shrink: 0;",
            theme.colors.primary.s100,
            theme.colors.primary.s600,
            theme.typography.font_size.xl2,
            theme.typography.font_weight.bold,
            if detailed { "0".to_string() } else { format!("0 auto {}", theme.space(4)) },
            px = avatar_px,
        )}>
            if let Some(src) = &props.avatar {
                <img src={src.clone()} alt={props.name.clone()} style="width: 100%; height: 100%; object-fit: cover;" />
            } else {
                {initials(&props.name)}
            }
        </div>
    };

    let links = props.social.entries();
    let details = html! {
        <>
            <h3 style={format!(
                "font-size: {}; font-weight: {}; color: {}; margin-bottom: {}; line-height: {};",
                if compact { theme.typography.font_size.lg } else { theme.typography.font_size.xl },
                theme.typography.font_weight.semibold,
                theme.colors.text.primary,
                theme.space(1),
                theme.typography.line_height.tight,
            )}>{props.name.clone()}</h3>
            <p style={format!(
                "font-size: {}; color: {}; font-weight: {}; margin-bottom: {};",
                if compact { theme.typography.font_size.sm } else { theme.typography.font_size.base },
                theme.colors.primary.s600,
                theme.typography.font_weight.medium,
                if props.bio.is_some() { theme.space(3) } else { theme.space(4) },
            )}>{props.role.clone()}</p>
            if let Some(bio) = props.bio.as_ref().filter(|_| variant.shows_bio()) {
                <p style={format!(
                    "font-size: {}; color: {}; line-height: {}; margin-bottom: {};",
                    theme.typography.font_size.sm,
                    theme.colors.text.secondary,
                    theme.typography.line_height.relaxed,
                    theme.space(4),
                )}>{bio.clone()}</p>
            }
            if !links.is_empty() {
                <div style={format!(
                    "display: flex; gap: {}; justify-content: {};",
                    theme.space(3),
                    if detailed { "flex-start" } else { "center" },
                )}>
                    { for links.into_iter().map(|(glyph, href)| html! { <SocialLink key={glyph} {glyph} {href} /> }) }
                </div>
            }
        </>
    };

    html! {
        <div {onmouseenter} {onmouseleave} style={format!(
            "background-color: {}; border: 1px solid {}; border-radius: {}; padding: {}; box-shadow: {}; \
             transform: {}; transition: all {} ease; {}",
            theme.colors.surfaces.elevated,
            if lifted { theme.colors.border.hover } else { theme.colors.border.primary },
            theme.radius.lg,
            if compact { theme.space(4) } else { theme.space(6) },
            if lifted { theme.shadows.lg } else { theme.shadows.sm },
            if lifted { "translateY(-2px)" } else { "none" },
            theme.animation.normal,
            layout,
        )}>
            {avatar}
            if detailed {
                <div style="flex: 1;">{details}</div>
            } else {
                {details}
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("kim min ji"), "KM");
        assert_eq!(initials("Nguyen"), "N");
        assert_eq!(initials("  Ana  Lima"), "AL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn avatar_and_bio_follow_the_variant() {
        assert_eq!(TeamCardVariant::Compact.avatar_px(), 80);
        assert_eq!(TeamCardVariant::default().avatar_px(), 100);
        assert_eq!(TeamCardVariant::Detailed.avatar_px(), 120);
        assert!(!TeamCardVariant::Compact.shows_bio());
        assert!(TeamCardVariant::Detailed.shows_bio());
    }

    #[test]
    fn social_entries_skip_missing_links() {
        let social = SocialLinks {
            github: Some(AttrValue::Static("https://github.com/kgency")),
            email: Some(AttrValue::Static("mailto:team@kgency.com")),
            ..SocialLinks::default()
        };
        let glyphs: Vec<_> = social.entries().into_iter().map(|(glyph, _)| glyph).collect();
        assert_eq!(glyphs, vec!["gh", "@"]);
        assert!(SocialLinks::default().entries().is_empty());
    }
}
