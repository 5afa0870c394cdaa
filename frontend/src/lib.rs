pub mod app;
pub mod carousel;
pub mod config;
pub mod counter;
pub mod error;
pub mod hooks;
pub mod motion;
pub mod reveal;
pub mod scheduler;
pub mod styles;
pub mod theme;
pub mod validation;
pub mod visibility;

pub mod components {
    pub mod app_store_card;
    pub mod badge;
    pub mod button;
    pub mod card;
    pub mod carousel;
    pub mod contact_form;
    pub mod fade_in;
    pub mod feature_card;
    pub mod footer;
    pub mod hero;
    pub mod image_card;
    pub mod input;
    pub mod layout;
    pub mod navbar;
    pub mod policy;
    pub mod team_card;
    pub mod testimonials;
    pub mod theme_toggle;
}

pub mod pages {
    pub mod account_deletion;
    pub mod catalog;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod privacy;
}

#[cfg(test)]
mod testing;
