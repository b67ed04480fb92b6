//! Centralized constants for stepper_core
//!
//! Timing defaults, key codes and the class names used for the affix markup
//! live here so the host and the tests agree on them.

use std::time::Duration;

// =============================================================================
// Press timing
// =============================================================================

/// How long a press must be held before auto-repeat kicks in
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_millis(300);

/// Period between auto-repeat steps once repeating
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(50);

// =============================================================================
// Numeric fallbacks
// =============================================================================

/// Step used when the step attribute is absent, zero or unparsable
pub const FALLBACK_STEP: f64 = 1.0;

/// Value used when the field is empty or unparsable
pub const FALLBACK_VALUE: f64 = 0.0;

// =============================================================================
// Legacy key codes
// =============================================================================

/// `keyCode`/`which` of the up arrow key
pub const KEY_CODE_ARROW_UP: u32 = 38;

/// `keyCode`/`which` of the down arrow key
pub const KEY_CODE_ARROW_DOWN: u32 = 40;

// =============================================================================
// Markup
// =============================================================================

/// Class added to the enhanced input itself
pub const INPUT_CLASS: &str = "stepper-input::input";

/// Class of the span wrapping the input and both affixes
pub const WRAPPER_CLASS: &str = "stepper-input::wrapper";

/// Class of the increment affix
pub const INCREMENT_CLASS: &str = "stepper-input::increment";

/// Class of the decrement affix
pub const DECREMENT_CLASS: &str = "stepper-input::decrement";

/// Selector matching the inputs that get enhanced by default
pub const NUMBER_INPUT_SELECTOR: &str = "input[type=\"number\"]";
