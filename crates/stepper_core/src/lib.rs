//! stepper_core - press-and-hold stepping for numeric fields
//!
//! Platform-agnostic core of the stepper affixes: computing and formatting a
//! stepped value, the notifications that follow it, and the delay-then-repeat
//! timing of a held affix. The host supplies the field, the notification sink
//! and the timers through the traits exported here.

mod constants;
mod direction;
mod enhancer;
mod field;
mod notification;
mod press;
mod timer;

pub mod number;
pub mod stepper;

#[cfg(test)]
mod test_support;

pub use constants::*;
pub use direction::Direction;
pub use enhancer::{AffixPair, PressAction, AFFIX_BINDINGS};
pub use field::{FieldSnapshot, NumericField};
pub use notification::{ArrowKey, EventFlags, KeyPhase, Notification, NotificationSink};
pub use press::{PressController, PressEvent, PressState, PressTiming};
pub use stepper::StepOutcome;
pub use timer::{Scheduler, TimerId, VirtualScheduler};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::enhancer::{AffixPair, PressAction};
    pub use crate::field::NumericField;
    pub use crate::notification::{Notification, NotificationSink};
    pub use crate::press::{PressController, PressEvent, PressTiming};
    pub use crate::timer::Scheduler;
}
