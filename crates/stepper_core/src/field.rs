//! The numeric field a stepper operates on

use crate::notification::NotificationSink;

/// A numeric input as seen by the stepper.
///
/// All attributes are read as strings, exactly as the host stores them; an
/// absent attribute reads as the empty string. Notifications are dispatched on
/// the field itself, hence the [`NotificationSink`] supertrait.
pub trait NumericField: NotificationSink {
    /// Current value, possibly empty
    fn value(&self) -> String;

    /// Replace the current value
    fn set_value(&self, value: &str);

    /// Raw `step` attribute
    fn step_attr(&self) -> String;

    /// Raw `min` attribute
    fn min_attr(&self) -> String;

    /// Raw `max` attribute
    fn max_attr(&self) -> String;

    /// Give input focus back to the field
    fn focus(&self);
}

/// The attribute strings a single step is computed from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub value: String,
    pub step: String,
    pub min: String,
    pub max: String,
}

impl FieldSnapshot {
    /// Read every attribute the stepper needs from `field`
    pub fn read<F: NumericField + ?Sized>(field: &F) -> Self {
        Self {
            value: field.value(),
            step: field.step_attr(),
            min: field.min_attr(),
            max: field.max_attr(),
        }
    }

    /// Snapshot with only a value and a step, no bounds
    pub fn new(value: impl Into<String>, step: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            step: step.into(),
            ..Self::default()
        }
    }

    /// Set the lower bound
    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.min = min.into();
        self
    }

    /// Set the upper bound
    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.max = max.into();
        self
    }
}
