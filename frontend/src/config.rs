use log::Level;

/// Fraction of the element that has to be on screen before it counts as visible.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
/// Element must be 50px above the bottom edge of the viewport.
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_AUTO_PLAY_INTERVAL_MS: u32 = 3000;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;
pub const DEFAULT_STAGGER_BASE_MS: u32 = 100;
/// Inbox for privacy questions and account deletion requests.
pub const CONTACT_EMAIL: &str = "welkit.answer@gmail.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose controller transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
