use wasm_bindgen::prelude::*;

use crate::config::StepperConfig;
use crate::enhance::enhance_document;

/// Runs on module load: enhance every number input with the default config.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = StepperConfig::default();
    init_logging(&config);

    match enhance_document(&config) {
        Ok(count) => log::info!("stepper-input: enhanced {} number inputs", count),
        Err(e) => log::error!("stepper-input: failed to enhance number inputs: {}", e),
    }
}

/// Enhance number inputs added since load, optionally with a JSON config.
///
/// Inputs that were already enhanced are skipped. Returns the number of
/// newly enhanced inputs.
#[wasm_bindgen(js_name = enhanceAll)]
pub fn enhance_all(config_json: Option<String>) -> Result<u32, JsValue> {
    let config = match config_json {
        Some(json) => StepperConfig::from_json(&json).map_err(to_js_error)?,
        None => StepperConfig::default(),
    };
    log::set_max_level(config.log_level.to_level_filter());

    let count = enhance_document(&config).map_err(to_js_error)?;
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn init_logging(config: &StepperConfig) {
    // Fails only when a logger is already installed, which is fine
    if console_log::init_with_level(config.log_level.to_level()).is_err() {
        log::set_max_level(config.log_level.to_level_filter());
    }
}
