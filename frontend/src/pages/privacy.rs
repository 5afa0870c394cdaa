use yew::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::footer::Footer;
use crate::components::layout::{Container, ContainerSize, Layout, Section, SectionSpacing};
use crate::components::navbar::Navbar;
use crate::components::policy::{mailto, Block, PolicyCard, PolicySection};
use crate::config::CONTACT_EMAIL;
use crate::pages::home::nav_items;
use crate::theme::use_theme;

pub const EFFECTIVE_DATE: &str = "January 1, 2024";

pub static SECTIONS: [PolicySection; 10] = [
    PolicySection {
        icon: "📋",
        title: "1. Personal information we collect",
        blocks: &[
            Block::Heading("a. Required"),
            Block::Bullets(&[
                ("Job seekers", "Name, email address, phone number, date of birth, nationality, visa status"),
                ("Company members", "Contact name, company name, business registration number, email address, phone number"),
                ("Everyone", "Service usage records, access logs, IP address, cookies"),
            ]),
            Block::Heading("b. Optional"),
            Block::Bullets(&[
                ("", "Education, work history, certificates, language skills, portfolio"),
                ("", "Profile photo, cover letter"),
                ("", "Preferred work region, desired salary"),
            ]),
            Block::Heading("c. Collected automatically"),
            Block::Bullets(&[
                ("", "Device information (model, OS version, device identifier)"),
                ("", "Service usage records and app usage patterns"),
                ("", "Location (optional, only with consent)"),
            ]),
        ],
    },
    PolicySection {
        icon: "🎯",
        title: "2. Why we collect it",
        blocks: &[Block::Table {
            headers: &["Purpose", "Details", "Legal basis"],
            rows: &[
                &["Member management", "Sign-up, identity checks, abuse prevention, notices", "Performance of contract"],
                &["Matching service", "Job seeker and company matching, interview scheduling, hiring support", "Performance of contract"],
                &["Personalised service", "Recommendations and tailored job information", "Legitimate interest"],
                &["Marketing", "Events, benefits and service promotion", "Consent"],
            ],
        }],
    },
    PolicySection {
        icon: "🗄️",
        title: "3. Retention and destruction",
        blocks: &[
            Block::Heading("a. Retention period"),
            Block::Bullets(&[
                ("Member information", "Until the member withdraws"),
                ("Hiring information", "3 years after hiring ends"),
                ("Marketing information", "Until consent is withdrawn"),
            ]),
            Block::Heading("b. Retention required by law"),
            Block::Table {
                headers: &["Record", "Period", "Legal basis"],
                rows: &[
                    &["Contracts and withdrawals of offers", "5 years", "E-Commerce Act"],
                    &["Payments and supply of goods", "5 years", "E-Commerce Act"],
                    &["Consumer complaints and disputes", "3 years", "E-Commerce Act"],
                    &["Login records", "3 months", "Protection of Communications Secrets Act"],
                ],
            },
            Block::Heading("c. How we destroy it"),
            Block::Bullets(&[
                ("Electronic files", "Permanently deleted so they cannot be recovered"),
                ("Paper documents", "Shredded or incinerated"),
            ]),
        ],
    },
    PolicySection {
        icon: "🤝",
        title: "4. Third parties and processors",
        blocks: &[
            Block::Heading("a. Provision to third parties"),
            Block::Paragraph("Kgency does not give personal information to third parties, except in these cases:"),
            Block::Bullets(&[
                ("", "The user agreed in advance"),
                ("", "The law requires it or an investigative agency requests it"),
                ("", "A company the user applied to needs it to run the hiring process"),
            ]),
            Block::Heading("b. Processors"),
            Block::Table {
                headers: &["Processor", "Task"],
                rows: &[
                    &["Amazon Web Services (AWS)", "Cloud servers and data storage"],
                    &["Google Firebase", "Push notifications"],
                    &["NICE Payments Co., Ltd.", "Payment processing"],
                    &["SendGrid", "Email delivery"],
                ],
            },
        ],
    },
    PolicySection {
        icon: "✅",
        title: "5. Your rights",
        blocks: &[
            Block::Paragraph("You can exercise these rights at any time:"),
            Block::Bullets(&[
                ("Access", "See the personal information we hold"),
                ("Correction and deletion", "Fix or remove wrong information"),
                ("Suspension", "Ask us to stop processing"),
                ("Withdrawal of consent", "Withdraw consent to collection and use"),
            ]),
            Block::Paragraph("Use 'Settings → Privacy' in the app or email privacy@kgency.com."),
        ],
    },
    PolicySection {
        icon: "👶",
        title: "6. Children under 14",
        blocks: &[
            Block::Notice("⚠️ Kgency does not allow children under 14 to sign up."),
            Block::Paragraph(
                "We do not collect personal information of children under 14. If it must be collected, we first \
                 obtain the consent of a legal guardian. Information found to belong to a child under 14 is destroyed at once.",
            ),
        ],
    },
    PolicySection {
        icon: "🔒",
        title: "7. Safeguards",
        blocks: &[
            Block::Heading("a. Technical"),
            Block::Bullets(&[
                ("", "Encryption in transit (SSL/TLS)"),
                ("", "One-way hashed passwords"),
                ("", "Intrusion prevention systems"),
                ("", "Regular vulnerability checks"),
            ]),
            Block::Heading("b. Administrative"),
            Block::Bullets(&[
                ("", "Least-privilege access to personal information"),
                ("", "Regular security training for staff"),
                ("", "An internal privacy management plan"),
                ("", "Regular audits of processing"),
            ]),
        ],
    },
    PolicySection {
        icon: "🍪",
        title: "8. Cookies",
        blocks: &[
            Block::Heading("a. What we use them for"),
            Block::Bullets(&[
                ("", "Keeping you signed in"),
                ("", "Personalised service"),
                ("", "Usage statistics"),
            ]),
            Block::Heading("b. Refusing cookies"),
            Block::Paragraph(
                "You can refuse cookies in your browser settings. Some features may not work without them.",
            ),
            Block::Bullets(&[
                ("Chrome", "Settings → Privacy and security → Cookies and other site data"),
                ("Safari", "Preferences → Privacy → Block cookies"),
            ]),
        ],
    },
    PolicySection {
        icon: "📞",
        title: "9. Privacy officer and contacts",
        blocks: &[
            Block::Table {
                headers: &[],
                rows: &[
                    &["Privacy officer", "Hyunsoo Kim"],
                    &["Team / position", "Information Security / Team lead"],
                    &["Email", "privacy@kgency.com"],
                    &["Phone", "02-1234-5678"],
                ],
            },
            Block::Heading("Other reporting and counselling bodies"),
            Block::Bullets(&[
                ("", "Personal Information Infringement Report Center: 118"),
                ("", "Personal Information Protection Commission: 1833-6972"),
                ("", "Supreme Prosecutors' Office Cyber Investigation: 1301"),
                ("", "National Police Agency Cyber Bureau: 182"),
            ]),
        ],
    },
    PolicySection {
        icon: "📅",
        title: "10. Changes to this policy",
        blocks: &[
            Block::Paragraph(
                "This policy applies from January 1, 2024. Changes are announced 7 days before they take effect.",
            ),
            Block::Table {
                headers: &["Version", "Effective", "Changes"],
                rows: &[&["1.0", "2024.01.01", "First version"]],
            },
        ],
    },
];

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let theme = use_theme();

    html! {
        <Layout>
            <Navbar items={nav_items()} />
            <Section spacing={SectionSpacing::Md}>
                <Container size={ContainerSize::Md}>
                    <div style={format!("text-align: center; margin-bottom: {};", theme.space(12))}>
                        <Badge variant={BadgeVariant::Primary}>{"Privacy policy"}</Badge>
                        <h1 style={format!(
                            "font-size: {}; font-weight: {}; color: {}; margin: {} 0;",
                            theme.typography.font_size.xl3,
                            theme.typography.font_weight.bold,
                            theme.colors.text.primary,
                            theme.space(4),
                        )}>{"Kgency Privacy Policy"}</h1>
                        <p style={format!("font-size: {}; color: {};", theme.typography.font_size.lg, theme.colors.text.secondary)}>
                            {"Kgency values your personal information and protects it under the Personal Information Protection Act."}
                        </p>
                        <p style={format!("font-size: {}; color: {}; margin-top: {};", theme.typography.font_size.sm, theme.colors.text.tertiary, theme.space(2))}>
                            {format!("Effective {}", EFFECTIVE_DATE)}
                        </p>
                    </div>
                    { for SECTIONS.iter().map(|section| html! { <PolicyCard {section} /> }) }
                    <div style={format!(
                        "text-align: center; padding: {}; border-radius: {}; background-color: {};",
                        theme.space(6),
                        theme.radius.lg,
                        theme.colors.surfaces.foreground,
                    )}>
                        <h3 style={format!("font-size: {}; font-weight: {}; margin-bottom: {};", theme.typography.font_size.xl, theme.typography.font_weight.bold, theme.space(4))}>
                            {"Privacy questions"}
                        </h3>
                        <p style={format!("color: {}; margin-bottom: {};", theme.colors.text.secondary, theme.space(4))}>
                            {"Ask us anything about how your personal information is handled."}
                        </p>
                        <a href={mailto(CONTACT_EMAIL, "Privacy question", "")} style={format!("color: {}; font-weight: {};", theme.colors.text.accent, theme.typography.font_weight.semibold)}>
                            {format!("📧 {}", CONTACT_EMAIL)}
                        </a>
                        <p style={format!("font-size: {}; color: {}; margin-top: {};", theme.typography.font_size.sm, theme.colors.text.tertiary, theme.space(4))}>
                            {"We answer within 24 business hours."}
                        </p>
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
    fn sections_are_numbered_in_order() {
        for (index, section) in SECTIONS.iter().enumerate() {
            assert!(section.title.starts_with(&format!("{}. ", index + 1)), "{}", section.title);
            assert_eq!(section.ragged_tables(), 0, "{}", section.title);
        }
    }
}
