use log::{info, warn};

use kgency_frontend::app::App;
use kgency_frontend::config;
use kgency_frontend::styles::ensure_global_keyframes;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    if let Err(e) = ensure_global_keyframes() {
        warn!("Animations will run without shared keyframes: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
