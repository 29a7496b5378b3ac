//! Page-side glue for the canvas demos: the demo modal, slider labels, the restart
//! button, and the `Module` object the native demo engine's loader reads at startup.

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod error;
pub mod label;
pub mod native;
pub mod surface;

pub use config::PageConfig;
pub use controller::Controller;
pub use error::PageError;

// DOM bindings only exist on wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::bootstrap::RuntimeHooks;
    use crate::config::PageConfig;
    use crate::error::PageError;

    pub mod bootstrap;
    pub mod dom;
    pub mod handlers;
    pub mod native;

    pub use handlers::{wire, SharedController};
    pub use native::GlobalExport;

    impl From<PageError> for JsValue {
        fn from(e: PageError) -> Self {
            JsValue::from_str(&e.to_string())
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    /// Wire the page controls and publish `Module` for the native loader.
    #[wasm_bindgen]
    pub fn boot() -> Result<(), JsValue> {
        let config = PageConfig::default();
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;

        let native = GlobalExport::new(config.restart_export.clone());
        let controller = wire(&document, &config, native)?;
        let hooks = Rc::new(RuntimeHooks::new(config.bootstrap.clone()));
        bootstrap::install(hooks, controller)?;

        if let Some(src) = &config.bootstrap.native_script {
            bootstrap::load_script(&document, src)?;
        }
        Ok(())
    }

    /// Load the native engine's loader script after [`boot`].
    #[wasm_bindgen]
    pub fn load_native(src: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .ok_or(PageError::NoWindow)?
            .document()
            .ok_or(PageError::NoDocument)?;
        bootstrap::load_script(&document, src)?;
        Ok(())
    }
}
