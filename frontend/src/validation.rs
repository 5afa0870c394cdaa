use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s\-+()]+$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

/// Which inputs the form shows. Email is always shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSet {
    pub name: bool,
    pub phone: bool,
    pub company: bool,
    pub subject: bool,
    pub message: bool,
}

impl Default for FieldSet {
    fn default() -> Self {
        FieldSet {
            name: true,
            phone: false,
            company: false,
            subject: true,
            message: true,
        }
    }
}

impl FieldSet {
    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => true,
            Field::Phone => self.phone,
            Field::Company => self.company,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

fn required(errors: &mut FieldErrors, field: Field, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks every enabled field; an empty map means the form may be sent.
pub fn validate(data: &ContactFormData, fields: &FieldSet) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name {
        required(&mut errors, Field::Name, &data.name, "Name is required");
    }

    if data.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&data.email) {
        errors.insert(Field::Email, "Invalid email address");
    }

    if fields.phone && !data.phone.is_empty() && !PHONE_RE.is_match(&data.phone) {
        errors.insert(Field::Phone, "Invalid phone number");
    }

    if fields.subject {
        required(&mut errors, Field::Subject, &data.subject, "Subject is required");
    }
    if fields.message {
        required(&mut errors, Field::Message, &data.message, "Message is required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        ContactFormData {
            name: "Jiwoo Park".into(),
            email: "jiwoo@example.com".into(),
            phone: "+82 (10) 1234-5678".into(),
            company: String::new(),
            subject: "Hiring".into(),
            message: "We are looking for two backend engineers.".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        let all = FieldSet {
            phone: true,
            company: true,
            ..FieldSet::default()
        };
        assert!(validate(&filled(), &all).is_empty());
    }

    #[test]
    fn blank_required_fields() {
        let errors = validate(&ContactFormData::default(), &FieldSet::default());
        assert_eq!(errors.get(&Field::Name), Some(&"Name is required"));
        assert_eq!(errors.get(&Field::Email), Some(&"Email is required"));
        assert_eq!(errors.get(&Field::Subject), Some(&"Subject is required"));
        assert_eq!(errors.get(&Field::Message), Some(&"Message is required"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let data = ContactFormData {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(
            validate(&data, &FieldSet::default()).get(&Field::Name),
            Some(&"Name is required")
        );
    }

    #[test]
    fn email_shape() {
        for bad in ["plain", "a@b", "a b@c.d", "@c.d"] {
            let data = ContactFormData {
                email: bad.into(),
                ..filled()
            };
            assert_eq!(
                validate(&data, &FieldSet::default()).get(&Field::Email),
                Some(&"Invalid email address"),
                "{bad}"
            );
        }
    }

    #[test]
    fn phone_is_optional_but_checked() {
        let fields = FieldSet {
            phone: true,
            ..FieldSet::default()
        };
        let empty = ContactFormData {
            phone: String::new(),
            ..filled()
        };
        assert!(validate(&empty, &fields).is_empty());

        let letters = ContactFormData {
            phone: "call me".into(),
            ..filled()
        };
        assert_eq!(
            validate(&letters, &fields).get(&Field::Phone),
            Some(&"Invalid phone number")
        );
        // Not validated when the field is hidden
        assert!(validate(&letters, &FieldSet::default()).is_empty());
    }

    #[test]
    fn disabled_fields_are_skipped() {
        let minimal = FieldSet {
            name: false,
            phone: false,
            company: false,
            subject: false,
            message: true,
        };
        let data = ContactFormData {
            email: "hr@kgency.io".into(),
            message: "Hello".into(),
            ..ContactFormData::default()
        };
        assert!(validate(&data, &minimal).is_empty());
        assert!(minimal.contains(Field::Email));
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["email"], "jiwoo@example.com");
        assert_eq!(serde_json::to_value(Field::Subject).unwrap(), "subject");
    }
}
