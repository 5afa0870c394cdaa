use std::cell::RefCell;

use log::info;
use stylist::GlobalStyle;

use crate::error::PlatformError;

/// Keyframes shared by the hero, the connection hub and the FAQ.
pub const GLOBAL_KEYFRAMES: &str = r#"
    @keyframes pulse {
        0%, 100% { opacity: 0.4; }
        50% { opacity: 0.8; }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0px); }
        50% { transform: translateY(-10px); }
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

thread_local! {
    static KEYFRAMES: RefCell<Option<GlobalStyle>> = RefCell::new(None);
}

/// Registers [`GLOBAL_KEYFRAMES`] once. Returns `true` only on the call that
/// actually mounted the stylesheet.
pub fn ensure_global_keyframes() -> Result<bool, PlatformError> {
    KEYFRAMES.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Ok(false);
        }
        let style =
            GlobalStyle::new(GLOBAL_KEYFRAMES).map_err(|e| PlatformError::Style(e.to_string()))?;
        info!("Registered global keyframes");
        *slot = Some(style);
        Ok(true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframes_parse() {
        assert!(GLOBAL_KEYFRAMES.parse::<stylist::ast::Sheet>().is_ok());
    }

    // Mounting needs a document
    #[cfg(target_arch = "wasm32")]
    #[test]
    fn registration_happens_once() {
        assert!(ensure_global_keyframes().unwrap());
        assert!(!ensure_global_keyframes().unwrap());
        KEYFRAMES.with(|slot| assert!(slot.borrow().is_some()));
    }
}
