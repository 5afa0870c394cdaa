use yew::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, Size};
use crate::components::footer::Footer;
use crate::components::layout::{Container, ContainerSize, Layout, Section, SectionSpacing};
use crate::components::navbar::Navbar;
use crate::components::policy::{mailto, Block, PolicyCard, PolicySection};
use crate::config::CONTACT_EMAIL;
use crate::pages::home::nav_items;
use crate::theme::use_theme;

/// Deletion is finished this many business days after the request.
pub const DELETION_BUSINESS_DAYS: u32 = 7;

const STEPS: [(&str, &str); 3] = [
    (
        "Email a deletion request",
        "Send a request to the address below. Include your registered email address and the reason for deletion.",
    ),
    (
        "Identity check",
        "We confirm that you own the account. We will contact you if we need more information.",
    ),
    (
        "Deletion and confirmation",
        "The account is deleted within 7 business days of the request and a confirmation email is sent.",
    ),
];

pub static SECTIONS: [PolicySection; 4] = [
    PolicySection {
        icon: "📱",
        title: "App information",
        blocks: &[Block::Bullets(&[
            ("App name", "Kgency"),
            ("Developer", "Kgency Inc."),
            ("Service", "Hiring platform matching foreign talent with companies"),
        ])],
    },
    PolicySection {
        icon: "📊",
        title: "What happens to your data",
        blocks: &[
            Block::Paragraph("When an account is deleted, its data is handled as follows:"),
            Block::Table {
                headers: &["Data", "Handling", "Retention"],
                rows: &[
                    &["Personal details (name, email, phone)", "Deleted", "Within 7 days of the request"],
                    &["Profile (experience, education, skills)", "Deleted", "Within 7 days of the request"],
                    &["Chat messages", "Deleted", "Within 7 days of the request"],
                    &["Uploaded files (resume, portfolio)", "Deleted", "Within 7 days of the request"],
                    &["Payment records", "Deleted after the legal retention period", "5 years (E-Commerce Act)"],
                    &["Service usage logs", "Kept for statistics with identifiers removed", "3 years"],
                ],
            },
        ],
    },
    PolicySection {
        icon: "⚠️",
        title: "Before you delete",
        blocks: &[Block::Bullets(&[
            ("", "A deleted account cannot be restored."),
            ("", "Finish any hiring process in progress first."),
            ("", "For company members, posted job listings are deleted too."),
            ("", "Some data is kept for the period the law requires."),
        ])],
    },
    PolicySection {
        icon: "❓",
        title: "Frequently asked questions",
        blocks: &[
            Block::Heading("Q. How long does deletion take?"),
            Block::Paragraph("A. Within 7 business days of the request, after the identity check."),
            Block::Heading("Q. Can a deleted account be restored?"),
            Block::Paragraph("A. No. Deletion cannot be undone, so please decide carefully."),
            Block::Heading("Q. Can I delete only some of my data?"),
            Block::Paragraph(
                "A. Only whole accounts can be deleted here. Remove individual items from the app settings.",
            ),
        ],
    },
];

/// Prefilled request email.
pub fn deletion_request_link() -> String {
    mailto(
        CONTACT_EMAIL,
        "Account deletion request",
        "I would like my account deleted.\n\nRegistered email: \nReason: ",
    )
}

#[function_component(AccountDeletion)]
pub fn account_deletion() -> Html {
    let theme = use_theme();
    let request = deletion_request_link();

    html! {
        <Layout>
            <Navbar items={nav_items()} />
            <Section spacing={SectionSpacing::Md}>
                <Container size={ContainerSize::Md}>
                    <div style={format!("text-align: center; margin-bottom: {};", theme.space(12))}>
                        <Badge variant={BadgeVariant::Warning}>{"Account deletion policy"}</Badge>
                        <h1 style={format!(
                            "font-size: {}; font-weight: {}; color: {}; margin: {} 0;",
                            theme.typography.font_size.xl3,
                            theme.typography.font_weight.bold,
                            theme.colors.text.primary,
                            theme.space(4),
                        )}>{"Account and data deletion"}</h1>
                        <p style={format!("font-size: {}; color: {};", theme.typography.font_size.lg, theme.colors.text.secondary)}>
                            {"How Kgency users delete their account and what happens to their data"}
                        </p>
                    </div>

                    <PolicyCard section={&SECTIONS[0]} />

                    <div style={format!(
                        "margin-bottom: {}; padding: {}; border-radius: {}; background-color: {}; border: 1px solid {};",
                        theme.space(8),
                        theme.space(6),
                        theme.radius.lg,
                        theme.colors.surfaces.elevated,
                        theme.colors.border.primary,
                    )}>
                        <h2 style={format!(
                            "font-size: {}; font-weight: {}; margin-bottom: {};",
                            theme.typography.font_size.xl,
                            theme.typography.font_weight.semibold,
                            theme.space(4),
                        )}>{"🗑️ How to delete your account"}</h2>
                        <p style={format!("color: {}; margin-bottom: {};", theme.colors.text.secondary, theme.space(6))}>
                            {"Follow these steps to request deletion:"}
                        </p>
                        <ol style={format!("list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: {};", theme.space(3))}>
                            { for STEPS.iter().enumerate().map(|(index, (title, body))| html! {
                                <li style={format!(
                                    "display: flex; gap: {}; padding: {}; border-radius: {}; background-color: {};",
                                    theme.space(3),
                                    theme.space(4),
                                    theme.radius.lg,
                                    theme.colors.surfaces.panel,
                                )}>
                                    <span style={format!(
                                        "width: 28px; height: 28px; border-radius: 50%; display: flex; align-items: center; \
                                         justify-content: center; flex-shrink: 0; background-color: {}; color: {}; font-size: {}; font-weight: {};",
                                        theme.colors.primary.s500,
                                        theme.colors.text.inverse,
                                        theme.typography.font_size.sm,
                                        theme.typography.font_weight.bold,
                                    )}>{(index + 1).to_string()}</span>
                                    <div>
                                        <strong style={format!("display: block; margin-bottom: {};", theme.space(1))}>{*title}</strong>
                                        <p style={format!("color: {}; font-size: {};", theme.colors.text.secondary, theme.typography.font_size.sm)}>{*body}</p>
                                    </div>
                                </li>
                            }) }
                        </ol>
                    </div>

                    { for SECTIONS[1..].iter().map(|section| html! { <PolicyCard {section} /> }) }

                    <div style={format!(
                        "text-align: center; padding: {}; margin-top: {}; border-radius: {}; background-color: {};",
                        theme.space(6),
                        theme.space(8),
                        theme.radius.lg,
                        theme.colors.surfaces.foreground,
                    )}>
                        <h3 style={format!("font-size: {}; font-weight: {}; margin-bottom: {};", theme.typography.font_size.xl, theme.typography.font_weight.bold, theme.space(4))}>
                            {"Request account deletion"}
                        </h3>
                        <p style={format!("color: {}; margin-bottom: {};", theme.colors.text.secondary, theme.space(6))}>
                            {format!("Email {} to delete your account.", CONTACT_EMAIL)}
                        </p>
                        <a href={request} style="text-decoration: none;">
                            <Button size={Size::Lg}>{"Request deletion by email"}</Button>
                        </a>
                    </div>
                </Container>
            </Section>
            <Footer description="Connecting international talent with Korean companies." />
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_link_targets_the_support_inbox() {
        let link = deletion_request_link();
        assert!(link.starts_with(&format!("mailto:{}?subject=Account%20deletion%20request", CONTACT_EMAIL)));
        assert!(link.contains("%0A%0ARegistered%20email"));
    }

    #[test]
    fn promised_window_matches_the_steps() {
        let days = format!("{} business days", DELETION_BUSINESS_DAYS);
        assert!(STEPS[2].1.contains(&days));
        assert!(SECTIONS.iter().all(|section| section.ragged_tables() == 0));
    }
}
