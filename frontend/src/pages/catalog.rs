use log::info;
use yew::prelude::*;

use crate::components::app_store_card::{AppStoreCard, AppStoreVariant, Platform, Rating};
use crate::components::badge::{Badge, BadgeLabel, BadgeVariant};
use crate::components::button::{Button, ButtonVariant, Size};
use crate::components::card::Card;
use crate::components::carousel::{Carousel, CarouselItem};
use crate::components::contact_form::{ContactForm, FormVariant};
use crate::components::fade_in::FadeIn;
use crate::components::feature_card::{FeatureCard, FeatureCardVariant, FeatureStat};
use crate::components::hero::{Hero, HeroAction, HeroFeature, HeroMedia, HeroSize, HeroVariant, TextAlign};
use crate::components::image_card::ImageCard;
use crate::components::input::Input;
use crate::components::layout::{Container, ContainerSize, Grid, Layout};
use crate::components::navbar::Navbar;
use crate::components::team_card::{SocialLinks, TeamCard, TeamCardVariant};
use crate::components::testimonials::{CustomerTestimonials, TestimonialLayout};
use crate::components::theme_toggle::ThemeToggle;
use crate::hooks::use_scroll_reveal;
use crate::motion::{animation_style, AnimationKind, Direction};
use crate::pages::home::{nav_items, testimonials};
use crate::reveal::RevealConfig;
use crate::theme::use_theme;
use crate::validation::{ContactFormData, FieldSet};

fn slides(count: usize) -> Vec<CarouselItem> {
    (1..=count)
        .map(|n| CarouselItem {
            id: format!("slide-{}", n),
            content: html! {
                <Card hover=false style="height: 160px; display: flex; align-items: center; justify-content: center;">
                    <span style="font-size: 1.5rem;">{format!("Slide {}", n)}</span>
                </Card>
            },
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct AnimationSampleProps {
    kind: AnimationKind,
    label: &'static str,
}

/// Plays a keyed animation every time it enters the viewport.
#[function_component(AnimationSample)]
fn animation_sample(props: &AnimationSampleProps) -> Html {
    let theme = use_theme();
    let reveal = use_scroll_reveal(RevealConfig {
        trigger_once: false,
        ..RevealConfig::default()
    });

    html! {
        <div ref={reveal.node_ref} style={format!(
            "padding: {}; border-radius: {}; background-color: {}; text-align: center; {}",
            theme.space(6),
            theme.radius.lg,
            theme.colors.surfaces.elevated,
            animation_style(reveal.is_revealed, props.kind, 600, 0),
        )}>{props.label}</div>
    }
}

#[derive(Properties, PartialEq)]
struct ShowcaseProps {
    title: &'static str,
    children: Children,
}

#[function_component(Showcase)]
fn showcase(props: &ShowcaseProps) -> Html {
    let theme = use_theme();
    html! {
        <section style={format!("margin-bottom: {};", theme.space(16))}>
            <h2 style={format!(
                "font-size: {}; font-weight: {}; margin-bottom: {};",
                theme.typography.font_size.xl2,
                theme.typography.font_weight.semibold,
                theme.space(6),
            )}>{props.title}</h2>
            { for props.children.iter() }
        </section>
    }
}

fn hero_features() -> Vec<HeroFeature> {
    [("⚡", "Fast"), ("🔒", "Secure"), ("🌏", "Global")]
        .into_iter()
        .map(|(icon, text)| HeroFeature {
            icon: AttrValue::Static(icon),
            text: AttrValue::Static(text),
        })
        .collect()
}

#[function_component(Catalog)]
pub fn catalog() -> Html {
    let theme = use_theme();
    let clicks = use_state(|| 0u32);
    let loading = use_state(|| false);
    let email = use_state(String::new);

    let onclick = {
        let clicks = clicks.clone();
        Callback::from(move |_: MouseEvent| clicks.set(*clicks + 1))
    };
    let toggle_loading = {
        let loading = loading.clone();
        Callback::from(move |_: MouseEvent| loading.set(!*loading))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let email_error = (!email.is_empty() && !email.contains('@')).then(|| AttrValue::Static("Enter a valid email address"));
    let on_contact = Callback::from(|data: ContactFormData| info!("Catalog form submitted by {}", data.email));

    let row = format!("display: flex; gap: {}; flex-wrap: wrap; align-items: center;", theme.space(3));
    let grid = format!(
        "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: {};",
        theme.space(6)
    );

    html! {
        <Layout>
            <Navbar items={nav_items()} />
            <Container size={ContainerSize::Xl} style={format!("padding-top: {}; padding-bottom: {};", theme.space(16), theme.space(16))}>
                <div style={format!("display: flex; justify-content: space-between; align-items: center; margin-bottom: {};", theme.space(12))}>
                    <h1 style={format!(
                        "font-size: {}; font-weight: {};",
                        theme.typography.font_size.xl4,
                        theme.typography.font_weight.bold,
                    )}>{"Components"}</h1>
                    <ThemeToggle />
                </div>

                <Showcase title="Buttons">
                    <div style={row.clone()}>
                        <Button onclick={onclick.clone()}>{format!("Clicked {} times", *clicks)}</Button>
                        <Button variant={ButtonVariant::Secondary} {onclick}>{"Secondary"}</Button>
                        <Button size={Size::Sm}>{"Small"}</Button>
                        <Button size={Size::Lg}>{"Large"}</Button>
                        <Button disabled=true>{"Disabled"}</Button>
                    </div>
                </Showcase>

                <Showcase title="Badges">
                    <div style={row.clone()}>
                        <Badge variant={BadgeVariant::Primary}>{"Primary"}</Badge>
                        <Badge variant={BadgeVariant::Secondary}>{"Secondary"}</Badge>
                        <Badge variant={BadgeVariant::Success}>{"Success"}</Badge>
                        <Badge variant={BadgeVariant::Warning}>{"Warning"}</Badge>
                        <Badge variant={BadgeVariant::Error}>{"Error"}</Badge>
                        <Badge variant={BadgeVariant::Info} size={Size::Lg}>{"Info"}</Badge>
                    </div>
                </Showcase>

                <Showcase title="Inputs">
                    <Grid columns={Some(2)}>
                        <Input label="Full name" placeholder="Jane Doe" />
                        <Input
                            label="Email"
                            input_type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email}
                            error={email_error}
                        />
                        <Input label="Company" value="Kgency Inc." disabled=true />
                        <Input label="Phone" error="Phone number is required" />
                    </Grid>
                </Showcase>

                <Showcase title="Feature cards">
                    <Grid>
                        <FeatureCard icon="🌏" title="Global network" description="Talent from twelve countries." />
                        <FeatureCard
                            icon="⚡"
                            title="Real-time matching"
                            description="Connected as soon as both sides fit."
                            highlight=true
                            stats={FeatureStat { value: AttrValue::Static("98%"), label: AttrValue::Static("Success rate") }}
                        />
                        <FeatureCard icon="🤝" title="Minimal" description="No surface, no shadow." variant={FeatureCardVariant::Minimal} />
                        <FeatureCard icon="📋" title="Bordered" description="Outlined card." variant={FeatureCardVariant::Bordered} size={Size::Sm} />
                        <FeatureCard icon="🚀" title="Large" description="The biggest scale." size={Size::Lg} hover=false />
                    </Grid>
                </Showcase>

                <Showcase title="Team cards">
                    <Grid min_column_px={220}>
                        <TeamCard
                            name="Hyunsoo Kim"
                            role="CEO"
                            bio="Ten years building hiring products."
                            social={SocialLinks {
                                linkedin: Some(AttrValue::Static("https://linkedin.com")),
                                email: Some(AttrValue::Static("ceo@kgency.com")),
                                ..SocialLinks::default()
                            }}
                        />
                        <TeamCard name="Nguyen Van An" role="Engineer" variant={TeamCardVariant::Compact} />
                        <TeamCard
                            name="Siti Rahma"
                            role="Designer"
                            bio="Designs every screen of the app."
                            variant={TeamCardVariant::Detailed}
                            social={SocialLinks {
                                github: Some(AttrValue::Static("https://github.com")),
                                twitter: Some(AttrValue::Static("https://x.com")),
                                ..SocialLinks::default()
                            }}
                        />
                    </Grid>
                </Showcase>

                <Showcase title="Image cards">
                    <Grid>
                        <ImageCard
                            image="https://picsum.photos/seed/kgency/600/400"
                            image_alt="Factory floor"
                            title="Manufacturing"
                            description="Production roles across Korea."
                            badge={BadgeLabel::new("Hiring", BadgeVariant::Success)}
                            footer={html! { <Button size={Size::Sm}>{"View jobs"}</Button> }}
                        />
                        <ImageCard title="No image" description="Renders a placeholder." image_height={160} />
                        <ImageCard image="https://picsum.photos/seed/office/600/400" image_alt="Office" hover=false>
                            <p>{"Custom children below the image."}</p>
                        </ImageCard>
                    </Grid>
                </Showcase>

                <Showcase title="App store cards">
                    <Grid>
                        <AppStoreCard
                            platform={Platform::Ios}
                            app_name="Kgency"
                            download_url="https://apps.apple.com"
                            description="Hire international talent on the go."
                            rating={Rating { score: 4.8, count: AttrValue::Static("1.2k") }}
                            badge={BadgeLabel::new("New", BadgeVariant::Info)}
                        />
                        <AppStoreCard platform={Platform::Android} app_name="Kgency" download_url="https://play.google.com" />
                        <AppStoreCard platform={Platform::Web} app_name="Kgency Web" download_url="/" size={Size::Sm} />
                    </Grid>
                    <div style={format!("margin-top: {}; {}", theme.space(6), row)}>
                        <AppStoreCard platform={Platform::Ios} app_name="Kgency" download_url="https://apps.apple.com" variant={AppStoreVariant::Button} />
                        <AppStoreCard platform={Platform::Android} app_name="Kgency" download_url="https://play.google.com" variant={AppStoreVariant::Button} size={Size::Sm} />
                        <AppStoreCard platform={Platform::Web} app_name="Kgency" download_url="/" variant={AppStoreVariant::Button} size={Size::Lg} />
                    </div>
                </Showcase>

                <Showcase title="Heroes">
                    <Hero
                        title="Interactive hero"
                        subtitle="Floating particles over a soft gradient"
                        badge={BadgeLabel::new("Beta", BadgeVariant::Warning)}
                        features={hero_features()}
                        primary_action={HeroAction { text: AttrValue::Static("Start"), href: AttrValue::Static("#") }}
                        variant={HeroVariant::Interactive}
                        size={HeroSize::Md}
                    />
                    <div style={format!("margin-top: {};", theme.space(8))}>
                        <Hero
                            title="Side by side"
                            description="Left aligned copy next to an image."
                            media={HeroMedia::Image {
                                src: AttrValue::Static("https://picsum.photos/seed/hero/800/600"),
                                alt: AttrValue::Static("Team meeting"),
                            }}
                            text_align={TextAlign::Left}
                            size={HeroSize::Sm}
                            variant={HeroVariant::Minimal}
                        />
                    </div>
                </Showcase>

                <Showcase title="Carousel">
                    <Carousel items={slides(5)} auto_play=true />
                    <div style={format!("margin-top: {};", theme.space(8))}>
                        <Carousel items={slides(10)} items_per_view={3} auto_play=true auto_play_interval_ms={4000} />
                    </div>
                    <div style={format!("margin-top: {};", theme.space(8))}>
                        <Carousel items={slides(4)} items_per_view={2} show_arrows=false />
                    </div>
                </Showcase>

                <Showcase title="Scroll animations">
                    <div style={grid.clone()}>
                        <FadeIn direction={Direction::Up}><Card>{"Up"}</Card></FadeIn>
                        <FadeIn direction={Direction::Down} delay_ms={100}><Card>{"Down"}</Card></FadeIn>
                        <FadeIn direction={Direction::Left} delay_ms={200}><Card>{"Left"}</Card></FadeIn>
                        <FadeIn direction={Direction::Right} delay_ms={300}><Card>{"Right"}</Card></FadeIn>
                        <FadeIn direction={Direction::None} delay_ms={400}><Card>{"Fade only"}</Card></FadeIn>
                    </div>
                    <div style={format!("margin-top: {}; {}", theme.space(6), grid)}>
                        <AnimationSample kind={AnimationKind::FadeIn} label="Fade in" />
                        <AnimationSample kind={AnimationKind::SlideUp} label="Slide up" />
                        <AnimationSample kind={AnimationKind::SlideInLeft} label="Slide in left" />
                        <AnimationSample kind={AnimationKind::SlideInRight} label="Slide in right" />
                        <AnimationSample kind={AnimationKind::ScaleIn} label="Scale in" />
                    </div>
                </Showcase>

                <Showcase title="Testimonials">
                    <CustomerTestimonials testimonials={testimonials()} layout={TestimonialLayout::Grid} />
                    <div style={format!("margin-top: {};", theme.space(8))}>
                        <CustomerTestimonials testimonials={testimonials()[..2].to_vec()} layout={TestimonialLayout::Minimal} />
                    </div>
                </Showcase>

                <Showcase title="Contact form">
                    <div style={format!("margin-bottom: {};", theme.space(4))}>
                        <Button variant={ButtonVariant::Secondary} size={Size::Sm} onclick={toggle_loading}>
                            { if *loading { "Stop loading" } else { "Simulate loading" } }
                        </Button>
                    </div>
                    <div style={grid}>
                        <ContactForm onsubmit={on_contact.clone()} loading={*loading} />
                        <ContactForm
                            onsubmit={on_contact}
                            variant={FormVariant::Bordered}
                            fields={FieldSet { phone: true, company: true, ..FieldSet::default() }}
                            submit_text="Request a call"
                            loading={*loading}
                        />
                    </div>
                </Showcase>
            </Container>
        </Layout>
    }
}
