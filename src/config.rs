//! Panel Configuration Loader
//!
//! The host page may set `window.__ADMIN_PANEL_CONFIG__` to override the
//! listing routes. Anything missing or invalid falls back to the defaults.

use wasm_bindgen::JsValue;

use admin_forms::PanelConfig;

const CONFIG_GLOBAL: &str = "__ADMIN_PANEL_CONFIG__";

pub fn load_config() -> PanelConfig {
    let Some(window) = web_sys::window() else {
        return PanelConfig::default();
    };
    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => {
            log::debug!("[CONFIG] no {} on window, using defaults", CONFIG_GLOBAL);
            return PanelConfig::default();
        }
    };
    let config: PanelConfig = match serde_wasm_bindgen::from_value(value) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[CONFIG] unreadable {}: {}", CONFIG_GLOBAL, e);
            return PanelConfig::default();
        }
    };
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[CONFIG] {}, using defaults", e);
            PanelConfig::default()
        }
    }
}
