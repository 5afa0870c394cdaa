//! Static legal documents rendered from data: numbered cards holding
//! headings, paragraphs, labelled bullet lists and tables.

use yew::prelude::*;

use crate::components::card::Card;
use crate::theme::use_theme;

pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
    /// Highlighted notice box.
    Notice(&'static str),
    /// `(label, text)`; an empty label renders a plain bullet.
    Bullets(&'static [(&'static str, &'static str)]),
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
}

pub struct PolicySection {
    pub icon: &'static str,
    pub title: &'static str,
    pub blocks: &'static [Block],
}

impl PolicySection {
    /// Tables whose rows differ in width from the header, or from the first
    /// row when there is no header.
    pub fn ragged_tables(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| match block {
                Block::Table { headers, rows } => {
                    let width = match (headers.len(), rows.first()) {
                        (0, Some(first)) => first.len(),
                        (n, _) => n,
                    };
                    rows.iter().any(|row| row.len() != width)
                }
                _ => false,
            })
            .count()
    }
}

#[derive(Properties)]
pub struct PolicyCardProps {
    pub section: &'static PolicySection,
}

impl PartialEq for PolicyCardProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.section, other.section)
    }
}

#[function_component(PolicyCard)]
pub fn policy_card(props: &PolicyCardProps) -> Html {
    let theme = use_theme();
    let section = props.section;
    let text = format!(
        "font-size: {}; color: {}; line-height: {}; margin-bottom: {};",
        theme.typography.font_size.base,
        theme.colors.text.secondary,
        theme.typography.line_height.relaxed,
        theme.space(4),
    );
    let cell = format!(
        "padding: {}; font-size: {}; border-bottom: 1px solid {}; text-align: left; vertical-align: top;",
        theme.space(3),
        theme.typography.font_size.sm,
        theme.colors.border.primary,
    );

    let block = |block: &Block| match block {
        Block::Heading(title) => html! {
            <h3 style={format!(
                "font-size: {}; font-weight: {}; color: {}; margin: {} 0 {};",
                theme.typography.font_size.lg,
                theme.typography.font_weight.semibold,
                theme.colors.text.primary,
                theme.space(6),
                theme.space(3),
            )}>{*title}</h3>
        },
        Block::Paragraph(body) => html! { <p style={text.clone()}>{*body}</p> },
        Block::Notice(body) => html! {
            <p style={format!(
                "padding: {}; margin-bottom: {}; border-radius: {}; background-color: {}; color: {}; font-weight: {};",
                theme.space(4),
                theme.space(4),
                theme.radius.md,
                theme.colors.surfaces.panel,
                theme.colors.semantic.warning,
                theme.typography.font_weight.medium,
            )}>{*body}</p>
        },
        Block::Bullets(items) => html! {
            <ul style={format!("{} padding-left: {};", text, theme.space(6))}>
                { for items.iter().map(|(label, body)| html! {
                    <li style={format!("margin-bottom: {};", theme.space(2))}>
                        if !label.is_empty() {
                            <strong style={format!("color: {};", theme.colors.text.primary)}>{format!("{}: ", label)}</strong>
                        }
                        {*body}
                    </li>
                }) }
            </ul>
        },
        Block::Table { headers, rows } => html! {
            <div style={format!("overflow-x: auto; margin-bottom: {};", theme.space(4))}>
                <table style="width: 100%; border-collapse: collapse;">
                    if !headers.is_empty() {
                        <thead>
                            <tr style={format!("background-color: {};", theme.colors.surfaces.panel)}>
                                { for headers.iter().map(|h| html! {
                                    <th style={format!("{} font-weight: {}; color: {};", cell, theme.typography.font_weight.semibold, theme.colors.text.primary)}>{*h}</th>
                                }) }
                            </tr>
                        </thead>
                    }
                    <tbody>
                        { for rows.iter().map(|row| html! {
                            <tr>
                                { for row.iter().map(|value| html! {
                                    <td style={format!("{} color: {};", cell, theme.colors.text.secondary)}>{*value}</td>
                                }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <div style={format!("margin-bottom: {};", theme.space(8))}>
            <Card hover=false>
                <h2 style={format!(
                    "font-size: {}; font-weight: {}; color: {}; margin-bottom: {};",
                    theme.typography.font_size.xl,
                    theme.typography.font_weight.semibold,
                    theme.colors.text.primary,
                    theme.space(4),
                )}>{format!("{} {}", section.icon, section.title)}</h2>
                { for section.blocks.iter().map(block) }
            </Card>
        </div>
    }
}

/// `mailto:` link with an encoded subject and body.
pub fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        assert_eq!(
            mailto("help@kgency.com", "Delete account", "Email: \nReason: "),
            "mailto:help@kgency.com?subject=Delete%20account&body=Email%3A%20%0AReason%3A%20"
        );
    }

    #[test]
    fn ragged_tables_are_counted() {
        static SECTION: PolicySection = PolicySection {
            icon: "📋",
            title: "Test",
            blocks: &[
                Block::Paragraph("text"),
                Block::Table { headers: &["a", "b"], rows: &[&["1", "2"], &["3"]] },
                Block::Table { headers: &["a"], rows: &[&["1"]] },
                Block::Table { headers: &[], rows: &[&["k", "v"], &["k", "v"]] },
            ],
        };
        assert_eq!(SECTION.ragged_tables(), 1);
    }
}
