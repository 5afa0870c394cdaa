use yew::prelude::*;

use crate::carousel::Pager;
use crate::components::button::{Button, ButtonVariant, Size};
use crate::components::fade_in::FadeIn;
use crate::motion::default_stagger_delay;
use crate::theme::use_theme;

#[derive(Clone, Debug, PartialEq)]
pub struct Author {
    pub name: AttrValue,
    pub role: AttrValue,
    pub company: Option<AttrValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestimonialEntry {
    pub content: AttrValue,
    pub author: Author,
    pub rating: Option<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TestimonialLayout {
    #[default]
    Grid,
    Carousel,
    Minimal,
}

#[derive(Properties, PartialEq)]
pub struct TestimonialProps {
    pub entry: TestimonialEntry,
    #[prop_or_default]
    pub featured: bool,
}

#[function_component(Testimonial)]
pub fn testimonial(props: &TestimonialProps) -> Html {
    let theme = use_theme();
    let entry = &props.entry;
    let stars = entry.rating.map(|rating| {
        let filled = rating.min(5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    });

    html! {
        <div style={format!(
            "background-color: {}; border: 1px solid {}; border-radius: {}; padding: {}; height: 100%; box-shadow: {};",
            theme.colors.surfaces.elevated,
            if props.featured { theme.colors.primary.s500 } else { theme.colors.border.primary },
            theme.radius.lg,
            theme.space(6),
            if props.featured { theme.shadows.md } else { "none" },
        )}>
            if let Some(stars) = stars {
                <div style={format!("color: {}; margin-bottom: {};", theme.colors.primary.s400, theme.space(3))}>{stars}</div>
            }
            <p style={format!(
                "font-size: {}; line-height: {}; color: {}; margin-bottom: {};",
                theme.typography.font_size.base,
                theme.typography.line_height.relaxed,
                theme.colors.text.primary,
                theme.space(4),
            )}>{format!("“{}”", entry.content)}</p>
            <div style={format!("font-weight: {}; color: {};", theme.typography.font_weight.semibold, theme.colors.text.primary)}>
                {entry.author.name.clone()}
            </div>
            <div style={format!("font-size: {}; color: {};", theme.typography.font_size.sm, theme.colors.text.secondary)}>
                {
                    match &entry.author.company {
                        Some(company) => format!("{}, {}", entry.author.role, company),
                        None => entry.author.role.to_string(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CustomerTestimonialsProps {
    pub testimonials: Vec<TestimonialEntry>,
    #[prop_or_default]
    pub stats: Vec<Stat>,
    #[prop_or_default]
    pub layout: TestimonialLayout,
    #[prop_or(2)]
    pub items_per_page: usize,
}

/// Testimonial section. The carousel layout pages by hand, without a timer.
#[function_component(CustomerTestimonials)]
pub fn customer_testimonials(props: &CustomerTestimonialsProps) -> Html {
    let theme = use_theme();
    let pager = use_state(|| Pager::new(props.testimonials.len(), props.items_per_page));

    // Replacing the list re-clamps the page instead of resetting it
    {
        let pager = pager.clone();
        use_effect_with_deps(
            move |(count, per_page): &(usize, usize)| {
                let mut next = *pager;
                next.reshape(*count, *per_page);
                if next != *pager {
                    pager.set(next);
                }
                || ()
            },
            (props.testimonials.len(), props.items_per_page),
        );
    }

    let step = |forward: bool| {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *pager;
            if forward {
                next.next();
            } else {
                next.previous();
            }
            pager.set(next);
        })
    };

    let grid = |columns: usize| {
        format!(
            "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {};",
            columns.max(1),
            theme.space(8)
        )
    };

    let cards = |entries: &[TestimonialEntry], featured: bool| -> Html {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                html! {
                    <FadeIn delay_ms={default_stagger_delay(index)}>
                        <Testimonial entry={entry.clone()} {featured} />
                    </FadeIn>
                }
            })
            .collect()
    };

    let body = match props.layout {
        TestimonialLayout::Grid => html! {
            <div style={grid(props.testimonials.len().min(3))}>
                { cards(&props.testimonials, false) }
            </div>
        },
        TestimonialLayout::Minimal => html! {
            <div style={format!("display: flex; flex-direction: column; gap: {};", theme.space(6))}>
                { cards(&props.testimonials, false) }
            </div>
        },
        TestimonialLayout::Carousel => {
            let dots = (0..pager.page_count()).map(|page| {
                let onclick = {
                    let pager = pager.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = *pager;
                        next.go_to(page as i64);
                        pager.set(next);
                    })
                };
                html! {
                    <div key={page} {onclick} style={format!(
                        "width: 8px; height: 8px; border-radius: 50%; cursor: pointer; transition: all 0.3s ease; background-color: {};",
                        if page == pager.current_page() { theme.colors.primary.s500 } else { theme.colors.surfaces.elevated },
                    )} />
                }
            });
            let round = "padding: 0.5rem; border-radius: 50%; width: 40px; height: 40px;";
            html! {
                <div style="position: relative;">
                    <div style={grid(pager.items_per_view())}>
                        { cards(pager.current_items(&props.testimonials), true) }
                    </div>
                    if pager.page_count() > 1 {
                        <div style={format!(
                            "display: flex; justify-content: center; align-items: center; gap: {}; margin-top: {};",
                            theme.space(4),
                            theme.space(8),
                        )}>
                            <Button variant={ButtonVariant::Secondary} size={Size::Sm} onclick={step(false)} style={round}>{"←"}</Button>
                            <div style={format!("display: flex; gap: {};", theme.space(2))}>{ for dots }</div>
                            <Button variant={ButtonVariant::Secondary} size={Size::Sm} onclick={step(true)} style={round}>{"→"}</Button>
                        </div>
                    }
                </div>
            }
        }
    };

    html! {
        <div>
            { body }
            if !props.stats.is_empty() {
                <div style={format!("margin-top: {}; text-align: center; {}", theme.space(16), grid(props.stats.len().min(4)))}>
                    { for props.stats.iter().map(|stat| html! {
                        <div>
                            <div style={format!(
                                "font-size: {}; font-weight: {}; color: {}; margin-bottom: {};",
                                theme.typography.font_size.xl3,
                                theme.typography.font_weight.bold,
                                theme.colors.text.accent,
                                theme.space(2),
                            )}>{stat.value.clone()}</div>
                            <div style={format!("color: {};", theme.colors.text.secondary)}>{stat.label.clone()}</div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
