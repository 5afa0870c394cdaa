//! Design tokens and the theme context every component reads from.

use log::debug;
use yew::prelude::*;

/// Color ramp keyed 50..900.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    pub s50: &'static str,
    pub s100: &'static str,
    pub s200: &'static str,
    pub s300: &'static str,
    pub s400: &'static str,
    pub s500: &'static str,
    pub s600: &'static str,
    pub s700: &'static str,
    pub s800: &'static str,
    pub s900: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surfaces {
    pub background: &'static str,
    pub foreground: &'static str,
    pub elevated: &'static str,
    pub translucent: &'static str,
    pub panel: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub inverse: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub focus: &'static str,
    pub hover: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Semantic {
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub primary: Scale,
    pub neutral: Scale,
    pub error: Scale,
    pub surfaces: Surfaces,
    pub text: TextColors,
    pub border: BorderColors,
    pub semantic: Semantic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSizes {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xl2: &'static str,
    pub xl3: &'static str,
    pub xl4: &'static str,
    pub xl5: &'static str,
    pub xl6: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontWeights {
    pub light: &'static str,
    pub normal: &'static str,
    pub medium: &'static str,
    pub semibold: &'static str,
    pub bold: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineHeights {
    pub tight: &'static str,
    pub normal: &'static str,
    pub relaxed: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radii {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xl2: &'static str,
    pub full: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shadows {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTokens {
    pub fast: &'static str,
    pub normal: &'static str,
    pub slow: &'static str,
    pub ease_out: &'static str,
    pub ease_in_out: &'static str,
}

const SPACING: [(u8, &str); 14] = [
    (0, "0"),
    (1, "0.25rem"),
    (2, "0.5rem"),
    (3, "0.75rem"),
    (4, "1rem"),
    (5, "1.25rem"),
    (6, "1.5rem"),
    (8, "2rem"),
    (10, "2.5rem"),
    (12, "3rem"),
    (16, "4rem"),
    (20, "5rem"),
    (24, "6rem"),
    (32, "8rem"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub colors: Colors,
    pub typography: Typography,
    pub radius: Radii,
    pub shadows: Shadows,
    pub animation: AnimationTokens,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        colors: Colors {
            primary: Scale {
                s50: "#f4f5ff",
                s100: "#e8eaff",
                s200: "#d4d8ff",
                s300: "#b5bbff",
                s400: "#9196ff",
                s500: "#5e6ad2",
                s600: "#4c57c4",
                s700: "#3d47a8",
                s800: "#2e3680",
                s900: "#1f2354",
            },
            neutral: Scale {
                s50: "#fafbfc",
                s100: "#f6f8fa",
                s200: "#eaeef2",
                s300: "#d0d7de",
                s400: "#8b949e",
                s500: "#656d76",
                s600: "#4a5568",
                s700: "#2d3748",
                s800: "#1a1e23",
                s900: "#0d1117",
            },
            error: Scale {
                s50: "#fef2f2",
                s100: "#fee2e2",
                s200: "#fecaca",
                s300: "#fca5a5",
                s400: "#f87171",
                s500: "#ef4444",
                s600: "#dc2626",
                s700: "#b91c1c",
                s800: "#991b1b",
                s900: "#7f1d1d",
            },
            surfaces: Surfaces {
                background: "#ffffff",
                foreground: "#fafbfc",
                elevated: "#ffffff",
                translucent: "rgba(255, 255, 255, 0.8)",
                panel: "#f8f9fa",
            },
            text: TextColors {
                primary: "#1a1a1a",
                secondary: "#6b7280",
                tertiary: "#9ca3af",
                inverse: "#ffffff",
                accent: "#5e6ad2",
            },
            border: BorderColors {
                primary: "#e5e7eb",
                secondary: "#f3f4f6",
                focus: "#5e6ad2",
                hover: "#d1d5db",
            },
            semantic: Semantic {
                success: "#1a7f37",
                warning: "#d1242f",
                error: "#cf222e",
                info: "#0969da",
            },
        },
        typography: Typography {
            font_family: "Inter, -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Helvetica Neue', Arial, sans-serif",
            font_size: FontSizes {
                xs: "0.75rem",
                sm: "0.875rem",
                base: "1rem",
                lg: "1.125rem",
                xl: "1.25rem",
                xl2: "1.5rem",
                xl3: "1.875rem",
                xl4: "2.25rem",
                xl5: "3rem",
                xl6: "3.75rem",
            },
            font_weight: FontWeights {
                light: "300",
                normal: "400",
                medium: "500",
                semibold: "600",
                bold: "700",
            },
            line_height: LineHeights {
                tight: "1.25",
                normal: "1.5",
                relaxed: "1.625",
            },
        },
        radius: Radii {
            sm: "0.125rem",
            md: "0.375rem",
            lg: "0.5rem",
            xl: "0.75rem",
            xl2: "1rem",
            full: "9999px",
        },
        shadows: Shadows {
            sm: "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
        },
        animation: AnimationTokens {
            fast: "150ms",
            normal: "300ms",
            slow: "500ms",
            ease_out: "cubic-bezier(0, 0, 0.2, 1)",
            ease_in_out: "cubic-bezier(0.4, 0, 0.2, 1)",
        },
    };

    /// The light theme with dark surfaces, text and borders.
    pub const DARK: Theme = Theme {
        colors: Colors {
            surfaces: Surfaces {
                background: "#0f0f10",
                foreground: "#1a1a1b",
                elevated: "#222224",
                translucent: "rgba(15, 15, 16, 0.8)",
                panel: "#1a1a1b",
            },
            text: TextColors {
                primary: "#ffffff",
                secondary: "#a1a1aa",
                tertiary: "#71717a",
                inverse: "#0f0f10",
                accent: "#7c8aff",
            },
            border: BorderColors {
                primary: "#2a2a2c",
                secondary: "#1e1e20",
                focus: "#7c8aff",
                hover: "#3a3a3c",
            },
            ..Theme::LIGHT.colors
        },
        ..Theme::LIGHT
    };

    /// Spacing scale. Unknown tokens resolve to zero.
    pub fn space(&self, token: u8) -> &'static str {
        SPACING
            .iter()
            .find(|(key, _)| *key == token)
            .map(|(_, value)| *value)
            .unwrap_or("0")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeMode::Light => &Theme::LIGHT,
            ThemeMode::Dark => &Theme::DARK,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub theme: &'static Theme,
}

impl ThemeContext {
    pub fn fixed_dark() -> Self {
        ThemeContext {
            mode: ThemeMode::Dark,
            theme: ThemeMode::Dark.theme(),
        }
    }

    /// Switching is disabled; the site ships dark only.
    pub fn toggle(&self) {
        debug!("Theme toggle ignored, mode is fixed to {:?}", self.mode);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::fixed_dark()
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let context = use_memo(|_| ThemeContext::fixed_dark(), ());
    let theme = context.theme;

    html! {
        <ContextProvider<ThemeContext> context={(*context).clone()}>
            <div class="theme-root" style={format!(
                "background-color: {}; color: {}; font-family: {}; min-height: 100vh;",
                theme.colors.surfaces.background,
                theme.colors.text.primary,
                theme.typography.font_family,
            )}>
                { for props.children.iter() }
            </div>
        </ContextProvider<ThemeContext>>
    }
}

/// Theme of the nearest provider, or the dark theme outside one.
#[hook]
pub fn use_theme() -> &'static Theme {
    use_context::<ThemeContext>().unwrap_or_default().theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_overrides_only_surface_colors() {
        assert_eq!(Theme::DARK.colors.surfaces.background, "#0f0f10");
        assert_eq!(Theme::DARK.colors.text.primary, "#ffffff");
        assert_eq!(Theme::DARK.colors.primary, Theme::LIGHT.colors.primary);
        assert_eq!(Theme::DARK.typography, Theme::LIGHT.typography);
    }

    #[test]
    fn spacing_tokens() {
        let theme = &Theme::DARK;
        assert_eq!(theme.space(4), "1rem");
        assert_eq!(theme.space(32), "8rem");
        assert_eq!(theme.space(7), "0");
    }

    #[test]
    fn context_is_fixed_dark() {
        let context = ThemeContext::default();
        context.toggle();
        assert_eq!(context.mode, ThemeMode::Dark);
        assert_eq!(context.theme, &Theme::DARK);
        assert_eq!(ThemeMode::Light.theme(), &Theme::LIGHT);
    }
}
