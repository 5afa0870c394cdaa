//! Page scaffolding: a full-height column, width-capped containers,
//! responsive grids and vertically padded sections.

use yew::prelude::*;

use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub style: String,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let theme = use_theme();
    html! {
        <div style={format!(
            "min-height: 100vh; display: flex; flex-direction: column; background-color: {}; {}",
            theme.colors.surfaces.background,
            props.style,
        )}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Xl2,
    Full,
}

impl ContainerSize {
    pub fn max_width(self) -> &'static str {
        match self {
            ContainerSize::Sm => "640px",
            ContainerSize::Md => "768px",
            ContainerSize::Lg => "1024px",
            ContainerSize::Xl => "1280px",
            ContainerSize::Xl2 => "1536px",
            ContainerSize::Full => "100%",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub size: ContainerSize,
    #[prop_or_default]
    pub style: String,
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    let theme = use_theme();
    html! {
        <div style={format!(
            "width: 100%; max-width: {}; margin: 0 auto; padding: 0 {}; {}",
            props.size.max_width(),
            theme.space(6),
            props.style,
        )}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GridProps {
    /// Fixed column count. `None` fills the row with `min_column_px` wide tracks.
    #[prop_or_default]
    pub columns: Option<usize>,
    #[prop_or(240)]
    pub min_column_px: u32,
    /// Spacing token for the gap.
    #[prop_or(4)]
    pub gap: u8,
    #[prop_or_default]
    pub style: String,
    pub children: Children,
}

pub fn grid_template(columns: Option<usize>, min_column_px: u32) -> String {
    match columns {
        Some(n) => format!("repeat({}, minmax(0, 1fr))", n.max(1)),
        None => format!("repeat(auto-fit, minmax({}px, 1fr))", min_column_px),
    }
}

#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    let theme = use_theme();
    html! {
        <div style={format!(
            "display: grid; grid-template-columns: {}; gap: {}; {}",
            grid_template(props.columns, props.min_column_px),
            theme.space(props.gap),
            props.style,
        )}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionSpacing {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl SectionSpacing {
    /// Spacing token used above and below the section.
    pub fn token(self) -> u8 {
        match self {
            SectionSpacing::Sm => 8,
            SectionSpacing::Md => 12,
            SectionSpacing::Lg => 16,
            SectionSpacing::Xl => 20,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub spacing: SectionSpacing,
    #[prop_or_default]
    pub style: String,
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let theme = use_theme();
    html! {
        <section id={props.id.clone()} style={format!(
            "padding: {} 0; scroll-margin-top: 64px; {}",
            theme.space(props.spacing.token()),
            props.style,
        )}>
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn container_widths() {
        assert_eq!(ContainerSize::default().max_width(), "1024px");
        assert_eq!(ContainerSize::Xl2.max_width(), "1536px");
        assert_eq!(ContainerSize::Full.max_width(), "100%");
    }

    #[test]
    fn section_spacing_resolves_to_known_tokens() {
        for spacing in [SectionSpacing::Sm, SectionSpacing::Md, SectionSpacing::Lg, SectionSpacing::Xl] {
            assert_ne!(Theme::DARK.space(spacing.token()), "0");
        }
    }

    #[test]
    fn grid_columns() {
        assert_eq!(grid_template(Some(3), 240), "repeat(3, minmax(0, 1fr))");
        assert_eq!(grid_template(Some(0), 240), "repeat(1, minmax(0, 1fr))");
        assert_eq!(grid_template(None, 300), "repeat(auto-fit, minmax(300px, 1fr))");
    }
}
