use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::{Button, Size};
use crate::theme::{use_theme, Theme};
use crate::validation::{validate, ContactFormData, Field, FieldErrors, FieldSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormVariant {
    #[default]
    Default,
    Minimal,
    Bordered,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub onsubmit: Callback<ContactFormData>,
    #[prop_or_default]
    pub fields: FieldSet,
    #[prop_or_default]
    pub variant: FormVariant,
    #[prop_or(AttrValue::Static("Send Message"))]
    pub submit_text: AttrValue,
    #[prop_or_default]
    pub loading: bool,
}

#[derive(Properties, PartialEq)]
struct FieldInputProps {
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop_or("text")]
    input_type: &'static str,
    #[prop_or_default]
    multiline: bool,
    value: String,
    error: Option<&'static str>,
    disabled: bool,
    onchange: Callback<(Field, String)>,
}

fn field_border(theme: &Theme, has_error: bool, focused: bool) -> &'static str {
    match (has_error, focused) {
        (true, _) => theme.colors.error.s500,
        (false, true) => theme.colors.border.focus,
        (false, false) => theme.colors.border.primary,
    }
}

#[function_component(FieldInput)]
fn field_input(props: &FieldInputProps) -> Html {
    let theme = use_theme();
    let focused = use_state(|| false);

    let border = field_border(theme, props.error.is_some(), *focused);
    let style = format!(
        "width: 100%; padding: {} {}; background-color: {}; border: 1px solid {}; border-radius: {}; \
         font-size: {}; color: {}; font-family: inherit; outline: none; transition: border-color 0.2s ease; {}",
        theme.space(3),
        theme.space(4),
        theme.colors.surfaces.background,
        border,
        theme.radius.md,
        theme.typography.font_size.base,
        theme.colors.text.primary,
        if props.multiline {
            format!("line-height: {}; resize: vertical; min-height: 120px;", theme.typography.line_height.relaxed)
        } else {
            String::new()
        },
    );

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };
    let field = props.field;
    let multiline = props.multiline;
    let oninput = props.onchange.reform(move |e: InputEvent| {
        let value = if multiline {
            e.target_unchecked_into::<HtmlTextAreaElement>().value()
        } else {
            e.target_unchecked_into::<HtmlInputElement>().value()
        };
        (field, value)
    });

    html! {
        <div style={format!("margin-bottom: {};", theme.space(6))}>
            <label style={format!(
                "display: block; margin-bottom: {}; font-size: {}; font-weight: {}; color: {};",
                theme.space(2),
                theme.typography.font_size.sm,
                theme.typography.font_weight.medium,
                theme.colors.text.primary,
            )}>{props.label}</label>
            if props.multiline {
                <textarea
                    value={props.value.clone()}
                    placeholder={props.placeholder}
                    disabled={props.disabled}
                    {style}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
            } else {
                <input
                    type={props.input_type}
                    value={props.value.clone()}
                    placeholder={props.placeholder}
                    disabled={props.disabled}
                    {style}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
            }
            if let Some(error) = props.error {
                <div style={format!(
                    "font-size: {}; color: {}; margin-top: {};",
                    theme.typography.font_size.sm,
                    theme.colors.error.s600,
                    theme.space(1),
                )}>{error}</div>
            }
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let theme = use_theme();
    let data = use_state(ContactFormData::default);
    let errors = use_state(FieldErrors::new);

    let onchange = {
        let data = data.clone();
        let errors = errors.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*data).clone();
            next.set(field, value);
            data.set(next);
            if errors.contains_key(&field) {
                let mut remaining = (*errors).clone();
                remaining.remove(&field);
                errors.set(remaining);
            }
        })
    };

    let onsubmit = {
        let data = data.clone();
        let errors = errors.clone();
        let fields = props.fields;
        let loading = props.loading;
        let submit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = validate(&data, &fields);
            let valid = found.is_empty();
            debug!("Contact form validated with {} error(s)", found.len());
            errors.set(found);
            if valid && !loading {
                info!("Submitting contact form");
                submit.emit((*data).clone());
            }
        })
    };

    let form_style = match props.variant {
        FormVariant::Minimal => "background-color: transparent; padding: 0;".to_string(),
        FormVariant::Bordered => format!(
            "background-color: {}; border: 2px solid {}; border-radius: {}; padding: {};",
            theme.colors.surfaces.background,
            theme.colors.border.primary,
            theme.radius.xl,
            theme.space(8),
        ),
        FormVariant::Default => format!(
            "background-color: {}; border-radius: {}; padding: {}; box-shadow: {};",
            theme.colors.surfaces.elevated,
            theme.radius.lg,
            theme.space(8),
            theme.shadows.sm,
        ),
    };
    let row_style = format!(
        "display: grid; grid-template-columns: 1fr 1fr; gap: {};",
        theme.space(4)
    );

    let fields = props.fields;
    let input = |field: Field, label: &'static str, placeholder: &'static str, input_type: &'static str| {
        html! {
            <FieldInput
                {field}
                {label}
                {placeholder}
                {input_type}
                value={data.get(field).to_string()}
                error={errors.get(&field).copied()}
                disabled={props.loading}
                onchange={onchange.clone()}
            />
        }
    };

    html! {
        <form style={form_style} {onsubmit} novalidate=true>
            if fields.name {
                <div style={row_style.clone()}>
                    { input(Field::Name, "Name *", "Your name", "text") }
                    { input(Field::Email, "Email *", "your@email.com", "email") }
                </div>
            } else {
                { input(Field::Email, "Email *", "your@email.com", "email") }
            }
            if fields.phone || fields.company {
                <div style={row_style.clone()}>
                    if fields.phone {
                        { input(Field::Phone, "Phone", "+82 10-0000-0000", "tel") }
                    }
                    if fields.company {
                        { input(Field::Company, "Company", "Your company", "text") }
                    }
                </div>
            }
            if fields.subject {
                { input(Field::Subject, "Subject *", "How can we help you?", "text") }
            }
            if fields.message {
                <FieldInput
                    field={Field::Message}
                    label="Message *"
                    placeholder="Tell us about the roles you are hiring for..."
                    multiline=true
                    value={data.message.clone()}
                    error={errors.get(&Field::Message).copied()}
                    disabled={props.loading}
                    onchange={onchange.clone()}
                />
            }
            <Button button_type="submit" size={Size::Lg} disabled={props.loading} style="width: 100%;">
                { if props.loading { AttrValue::Static("Sending...") } else { props.submit_text.clone() } }
            </Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_border_wins_over_focus() {
        let theme = &Theme::DARK;
        assert_eq!(field_border(theme, true, true), theme.colors.error.s500);
        assert_eq!(field_border(theme, false, true), theme.colors.border.focus);
        assert_eq!(field_border(theme, false, false), theme.colors.border.primary);
    }
}
