//! stepper-input - increment/decrement affixes for number inputs
//!
//! Turns every `<input type="number">` of a page into a stepper with clickable
//! and touchable affixes that auto-repeat while held. The stepping and timing
//! logic lives in `stepper_core`; this crate is the browser host around it.

mod config;
mod error;

pub use config::{CONFIG_VERSION, LogLevel, StepperConfig};
pub use error::{ConfigError, EnhanceError};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod enhance;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
