use log::{info, warn};
use yew::prelude::*;

use crate::app::Route;
use crate::components::badge::{BadgeLabel, BadgeVariant};
use crate::components::contact_form::ContactForm;
use crate::components::fade_in::FadeIn;
use crate::components::feature_card::FeatureCard;
use crate::components::footer::{Footer, FooterLink, FooterSection};
use crate::components::hero::{Hero, HeroAction, HeroFeature, HeroStat, HeroVariant, StatValue};
use crate::components::navbar::{NavItem, Navbar};
use crate::components::testimonials::{
    Author, CustomerTestimonials, Stat, TestimonialEntry, TestimonialLayout,
};
use crate::motion::{default_stagger_delay, Direction};
use crate::theme::use_theme;
use crate::validation::ContactFormData;

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", Route::Home),
        NavItem::new("Components", Route::Catalog).with_badge("New", BadgeVariant::Info),
        NavItem::new("FAQ", Route::Faq),
    ]
}

fn hero_stats() -> Vec<HeroStat> {
    vec![
        HeroStat {
            value: StatValue::Number(1247),
            suffix: AttrValue::Static(""),
            label: AttrValue::Static("Successful matches"),
            animate: true,
        },
        HeroStat {
            value: StatValue::Text(AttrValue::Static("500+")),
            suffix: AttrValue::Static(""),
            label: AttrValue::Static("Registered companies"),
            animate: false,
        },
        HeroStat {
            value: StatValue::Number(12584),
            suffix: AttrValue::Static(""),
            label: AttrValue::Static("Active job seekers"),
            animate: true,
        },
    ]
}

fn hero_features() -> Vec<HeroFeature> {
    [("✅", "Verified candidates"), ("📅", "Instant interview booking"), ("🌐", "Twelve countries")]
        .into_iter()
        .map(|(icon, text)| HeroFeature {
            icon: AttrValue::Static(icon),
            text: AttrValue::Static(text),
        })
        .collect()
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🌏",
        "Global network",
        "Direct access to a talent pool across twelve countries.",
    ),
    (
        "⚡",
        "Real-time matching",
        "Candidates and companies are connected as soon as both sides fit.",
    ),
    (
        "🤝",
        "Two-way interest",
        "When a company and a candidate both show interest, the interview is booked.",
    ),
];

pub fn testimonials() -> Vec<TestimonialEntry> {
    let entry = |content: &'static str, name: &'static str, role: &'static str, company: Option<&'static str>| {
        TestimonialEntry {
            content: AttrValue::Static(content),
            author: Author {
                name: AttrValue::Static(name),
                role: AttrValue::Static(role),
                company: company.map(AttrValue::Static),
            },
            rating: Some(5),
        }
    };
    vec![
        entry(
            "We filled three production roles in two weeks. Interviews were booked the day both sides said yes.",
            "Minji Kim",
            "HR Manager",
            Some("Hanil Manufacturing"),
        ),
        entry(
            "I found a job in Korea without an agent. The matching score told me exactly where I fit.",
            "Nguyen Van An",
            "Welder",
            None,
        ),
        entry(
            "Scheduling used to take days of phone calls. Now it is one tap.",
            "Seojun Lee",
            "Plant Director",
            Some("Daesung Logistics"),
        ),
        entry(
            "The app is simple enough that my whole team uses it.",
            "Siti Rahma",
            "Line Supervisor",
            None,
        ),
    ]
}

fn footer_sections() -> Vec<FooterSection> {
    let link = |label: &'static str, href: &'static str| FooterLink {
        label: AttrValue::Static(label),
        href: AttrValue::Static(href),
    };
    vec![
        FooterSection {
            title: AttrValue::Static("Services"),
            links: vec![
                link("For companies", "#companies"),
                link("For job seekers", "#jobseekers"),
                link("Success stories", "#success-stories"),
            ],
        },
        FooterSection {
            title: AttrValue::Static("Support"),
            links: vec![link("FAQ", "/faq"), link("Contact", "#contact")],
        },
        FooterSection {
            title: AttrValue::Static("Legal"),
            links: vec![
                link("Privacy policy", "/privacy"),
                link("Account deletion", "/account-deletion"),
            ],
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let theme = use_theme();

    let on_contact = Callback::from(|data: ContactFormData| match serde_json::to_string(&data) {
        Ok(json) => info!("Contact request: {}", json),
        Err(e) => warn!("Could not serialize contact request: {}", e),
    });
    let on_subscribe = Callback::from(|email: String| info!("Newsletter signup for {}", email));

    let section = |max_width: u32| {
        format!(
            "max-width: {}px; margin: 0 auto; padding: {} {}; scroll-margin-top: 64px;",
            max_width,
            theme.space(20),
            theme.space(6),
        )
    };
    let heading = format!(
        "font-size: {}; font-weight: {}; text-align: center; margin-bottom: {};",
        theme.typography.font_size.xl3,
        theme.typography.font_weight.bold,
        theme.space(12),
    );

    html! {
        <div class="home-page">
            <Navbar items={nav_items()} transparent=true />
            <Hero
                badge={BadgeLabel::new("Global talent matching", BadgeVariant::Primary)}
                title="The smart platform connecting international talent with companies"
                subtitle="Two-way matching, interviews confirmed instantly"
                description="When a company and a candidate both show interest, the interview is set."
                primary_action={HeroAction { text: AttrValue::Static("Get started"), href: AttrValue::Static("#contact") }}
                secondary_action={HeroAction { text: AttrValue::Static("Learn more"), href: AttrValue::Static("#about") }}
                stats={hero_stats()}
                features={hero_features()}
                variant={HeroVariant::Gradient}
            />

            <section id="about" style={section(1200)}>
                <FadeIn>
                    <h2 style={heading.clone()}>{"Why Kgency"}</h2>
                </FadeIn>
                <div style={format!("display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: {};", theme.space(6))}>
                    { for FEATURES.iter().enumerate().map(|(index, (icon, title, text))| html! {
                        <FadeIn delay_ms={default_stagger_delay(index)} direction={Direction::Up}>
                            <FeatureCard icon={*icon} title={*title} description={*text} highlight={index == 1} />
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section id="success-stories" style={section(1200)}>
                <FadeIn>
                    <h2 style={heading.clone()}>{"What our customers say"}</h2>
                </FadeIn>
                <CustomerTestimonials
                    testimonials={testimonials()}
                    layout={TestimonialLayout::Carousel}
                    stats={vec![
                        Stat { value: AttrValue::Static("98%"), label: AttrValue::Static("Match success rate") },
                        Stat { value: AttrValue::Static("12"), label: AttrValue::Static("Countries") },
                        Stat { value: AttrValue::Static("3 days"), label: AttrValue::Static("Average time to interview") },
                    ]}
                />
            </section>

            <section id="contact" style={section(720)}>
                <FadeIn direction={Direction::Left}>
                    <h2 style={heading}>{"Contact us"}</h2>
                    <ContactForm onsubmit={on_contact} />
                </FadeIn>
            </section>

            <Footer
                description="Connecting international talent with Korean companies."
                sections={footer_sections()}
                on_subscribe={on_subscribe}
            />
        </div>
    }
}
