//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use admin_forms::{Navigator, PanelConfig};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current path - read
    pub route: ReadSignal<String>,
    /// Current path - write
    set_route: WriteSignal<String>,
    config: StoredValue<PanelConfig>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<String>, WriteSignal<String>), config: PanelConfig) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> PanelConfig {
        self.config.get_value()
    }

    /// Push `route` onto the browser history and switch screens
    pub fn navigate(&self, route: &str) {
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route)));
        if let Some(Err(e)) = pushed {
            log::warn!("[NAV] pushState to {} failed: {:?}", route, e);
        }
        log::debug!("[NAV] -> {}", route);
        self.set_route.set(route.to_string());
    }

    /// Follow a back/forward move the browser already made
    pub fn sync_with_location(&self) {
        if let Some(path) = current_path() {
            self.set_route.set(path);
        }
    }
}

impl Navigator for AppContext {
    fn push(&self, route: &str) {
        self.navigate(route);
    }
}

pub fn current_path() -> Option<String> {
    web_sys::window().and_then(|w| w.location().pathname().ok())
}
