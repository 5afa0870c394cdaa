use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::button::{Button, Size};
use crate::theme::use_theme;
use crate::validation::is_valid_email;

#[derive(Clone, Debug, PartialEq)]
pub struct FooterLink {
    pub label: AttrValue,
    pub href: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FooterSection {
    pub title: AttrValue,
    pub links: Vec<FooterLink>,
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or(AttrValue::Static("Kgency"))]
    pub logo_text: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub sections: Vec<FooterSection>,
    #[prop_or_default]
    pub bottom_text: Option<AttrValue>,
    /// Shows the newsletter signup when set.
    #[prop_or_default]
    pub on_subscribe: Option<Callback<String>>,
}

fn copyright(logo_text: &str) -> String {
    format!("© {}. All rights reserved.", logo_text)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let theme = use_theme();
    let email = use_state(String::new);
    let email_error = use_state(|| false);

    let oninput = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
            email_error.set(false);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let email_error = email_error.clone();
        let on_subscribe = props.on_subscribe.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !is_valid_email(&email) {
                email_error.set(true);
                return;
            }
            if let Some(on_subscribe) = &on_subscribe {
                info!("Newsletter signup submitted");
                on_subscribe.emit((*email).clone());
            }
            email.set(String::new());
        })
    };

    let muted = format!(
        "font-size: {}; color: {};",
        theme.typography.font_size.sm,
        theme.colors.text.tertiary
    );
    let bottom_text = props
        .bottom_text
        .clone()
        .unwrap_or_else(|| AttrValue::from(copyright(&props.logo_text)));

    html! {
        <footer style={format!(
            "background-color: {}; border-top: 1px solid {};",
            theme.colors.surfaces.foreground,
            theme.colors.border.primary,
        )}>
            <div style={format!(
                "max-width: 1400px; margin: 0 auto; padding: {} {} {};",
                theme.space(16),
                theme.space(6),
                theme.space(8),
            )}>
                <div style={format!(
                    "display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: {}; margin-bottom: {};",
                    theme.space(8),
                    theme.space(12),
                )}>
                    <div style="grid-column: 1 / -1; max-width: 400px;">
                        <div style={format!(
                            "font-size: {}; font-weight: {}; color: {}; margin-bottom: {};",
                            theme.typography.font_size.xl,
                            theme.typography.font_weight.bold,
                            theme.colors.text.primary,
                            theme.space(4),
                        )}>{props.logo_text.clone()}</div>
                        if let Some(description) = &props.description {
                            <p style={format!(
                                "color: {}; line-height: {}; margin-bottom: {};",
                                theme.colors.text.secondary,
                                theme.typography.line_height.relaxed,
                                theme.space(6),
                            )}>{description.clone()}</p>
                        }
                        if props.on_subscribe.is_some() {
                            <form {onsubmit} novalidate=true style={format!("display: flex; gap: {};", theme.space(2))}>
                                <input
                                    type="email"
                                    placeholder="your@email.com"
                                    value={(*email).clone()}
                                    {oninput}
                                    style={format!(
                                        "flex: 1; padding: {} {}; background-color: {}; border: 1px solid {}; border-radius: {}; color: {};",
                                        theme.space(2),
                                        theme.space(3),
                                        theme.colors.surfaces.background,
                                        if *email_error { theme.colors.error.s500 } else { theme.colors.border.primary },
                                        theme.radius.md,
                                        theme.colors.text.primary,
                                    )}
                                />
                                <Button button_type="submit" size={Size::Sm}>{"Subscribe"}</Button>
                            </form>
                            if *email_error {
                                <div style={format!("font-size: {}; color: {}; margin-top: {};",
                                    theme.typography.font_size.sm,
                                    theme.colors.error.s600,
                                    theme.space(1),
                                )}>{"Invalid email address"}</div>
                            }
                        }
                    </div>
                    { for props.sections.iter().map(|section| html! {
                        <div>
                            <h4 style={format!(
                                "font-size: {}; font-weight: {}; color: {}; margin-bottom: {};",
                                theme.typography.font_size.sm,
                                theme.typography.font_weight.semibold,
                                theme.colors.text.primary,
                                theme.space(4),
                            )}>{section.title.clone()}</h4>
                            <ul style="list-style: none; margin: 0; padding: 0;">
                                { for section.links.iter().map(|link| html! {
                                    <li style={format!("margin-bottom: {};", theme.space(2))}>
                                        <a href={link.href.clone()} style={format!(
                                            "font-size: {}; color: {}; text-decoration: none;",
                                            theme.typography.font_size.sm,
                                            theme.colors.text.secondary,
                                        )}>{link.label.clone()}</a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div style={format!(
                    "border-top: 1px solid {}; padding-top: {}; {}",
                    theme.colors.border.primary,
                    theme.space(6),
                    muted,
                )}>{bottom_text}</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_text_defaults_to_copyright() {
        assert_eq!(copyright("Kgency"), "© Kgency. All rights reserved.");
    }
}
