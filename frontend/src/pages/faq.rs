use std::collections::BTreeSet;

use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::motion::default_stagger_delay;
use crate::pages::home::nav_items;
use crate::theme::use_theme;

const FAQ: [(&str, &str); 6] = [
    (
        "What is Kgency?",
        "Kgency is a matching platform that connects job seekers with companies. \
         A matching algorithm suggests the jobs that fit you best.",
    ),
    (
        "How do I sign up?",
        "Download the app and sign up with your phone number. \
         A one-time code verifies the account.",
    ),
    (
        "Can I have both a job seeker and a company account?",
        "One phone number can hold either a job seeker account or a company account, not both.",
    ),
    (
        "How does matching work?",
        "Keywords and preferences from your profile drive the match. \
         Each match shows a fit score from 0 to 100.",
    ),
    (
        "How are interviews scheduled?",
        "Pick one of the slots the company offers, or agree on a time through messages.",
    ),
    ("Does the app cost anything?", "Kgency is free to use."),
];

/// Opens a closed item and closes an open one. Any number may be open.
fn toggle(open: &BTreeSet<usize>, index: usize) -> BTreeSet<usize> {
    let mut next = open.clone();
    if !next.remove(&index) {
        next.insert(index);
    }
    next
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    ontoggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let theme = use_theme();

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))} style={format!(
            "border: 1px solid {}; border-radius: {}; overflow: hidden; margin-bottom: {};",
            theme.colors.border.primary,
            theme.radius.lg,
            theme.space(4),
        )}>
            <button class="faq-question" onclick={props.ontoggle.clone()} style={format!(
                "width: 100%; padding: {}; display: flex; justify-content: space-between; align-items: center; \
                 background: transparent; border: none; cursor: pointer; text-align: left; \
                 font-size: {}; font-weight: {}; color: {};",
                theme.space(6),
                theme.typography.font_size.lg,
                theme.typography.font_weight.semibold,
                theme.colors.text.primary,
            )}>
                <span>{props.question}</span>
                <span style={format!(
                    "color: {}; font-size: {}; transition: transform 0.3s ease; transform: rotate({}deg);",
                    theme.colors.primary.s500,
                    theme.typography.font_size.xl,
                    if props.open { 45 } else { 0 },
                )}>{"+"}</span>
            </button>
            if props.open {
                <div class="faq-answer" style={format!(
                    "padding: {}; border-top: 1px solid {}; color: {}; line-height: {}; animation: fadeIn 0.3s ease;",
                    theme.space(6),
                    theme.colors.border.primary,
                    theme.colors.text.secondary,
                    theme.typography.line_height.relaxed,
                )}>{props.answer}</div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let theme = use_theme();
    let open = use_state(BTreeSet::<usize>::new);

    html! {
        <div class="faq-page">
            <Navbar items={nav_items()} />
            <div style={format!("max-width: 800px; margin: 0 auto; padding: {} {};", theme.space(16), theme.space(6))}>
                <FadeIn>
                    <h1 style={format!(
                        "font-size: {}; font-weight: {}; text-align: center; margin-bottom: {};",
                        theme.typography.font_size.xl4,
                        theme.typography.font_weight.bold,
                        theme.space(12),
                    )}>{"Frequently Asked Questions"}</h1>
                </FadeIn>
                { for FAQ.iter().enumerate().map(|(index, &(question, answer))| {
                    let ontoggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(toggle(&open, index));
                        })
                    };
                    html! {
                        <FadeIn delay_ms={default_stagger_delay(index)}>
                            <FaqItem {question} {answer} open={open.contains(&index)} {ontoggle} />
                        </FadeIn>
                    }
                }) }
            </div>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_toggle_independently() {
        let open = toggle(&BTreeSet::new(), 1);
        let open = toggle(&open, 3);
        assert_eq!(open.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        let open = toggle(&open, 1);
        assert_eq!(open.iter().copied().collect::<Vec<_>>(), vec![3]);
    }
}
