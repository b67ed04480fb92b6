//! Value stepping: one increment or decrement of a numeric field.
//!
//! A step never fails. Malformed attributes fall back to defaults (value 0,
//! step 1, no bound) so the field always ends up holding a well-formed number
//! with the precision of its step.

use crate::constants::{FALLBACK_STEP, FALLBACK_VALUE};
use crate::direction::Direction;
use crate::field::{FieldSnapshot, NumericField};
use crate::notification::{KeyPhase, Notification};
use crate::number::{clamp, decimal_places, parse_float, to_fixed, trim_zero_fraction};

/// Result of computing one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Value the step started from, after fallbacks
    pub previous: f64,
    /// New numeric value, after clamping
    pub value: f64,
    /// Formatted value written back to the field
    pub text: String,
    /// Whether a bound changed the result
    pub clamped: bool,
}

/// Compute the value one step away from `snapshot.value`, without touching any field.
pub fn compute_step(snapshot: &FieldSnapshot, direction: Direction) -> StepOutcome {
    let step = parse_float(&snapshot.step)
        .filter(|step| step.is_finite() && *step != 0.0)
        .unwrap_or(FALLBACK_STEP);
    let places = decimal_places(step);

    let previous = parse_float(&snapshot.value)
        .filter(|value| value.is_finite())
        .unwrap_or(FALLBACK_VALUE);

    let min = parse_bound(&snapshot.min);
    let max = parse_bound(&snapshot.max);

    let unclamped = previous + direction.sign() * step;
    let value = clamp(unclamped, min, max);

    let fixed = to_fixed(value, places);
    let text = trim_zero_fraction(&fixed).to_string();

    StepOutcome {
        previous,
        value,
        text,
        clamped: value != unclamped,
    }
}

/// An empty or unparsable bound does not constrain the value
fn parse_bound(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    parse_float(raw)
}

/// Step `field` once in `direction`, then notify as if the arrow key was used.
///
/// The new value is written first; the field then receives, in order, the
/// keyboard notification for `phase`, an `input` notification and a `change`
/// notification.
pub fn step<F: NumericField + ?Sized>(
    field: &F,
    direction: Direction,
    phase: KeyPhase,
) -> StepOutcome {
    let outcome = compute_step(&FieldSnapshot::read(field), direction);

    log::trace!(
        "step {:?} ({}): {} -> {}{}",
        direction,
        phase.event_type(),
        outcome.previous,
        outcome.text,
        if outcome.clamped { " (clamped)" } else { "" }
    );

    field.set_value(&outcome.text);
    field.dispatch(Notification::Key {
        key: direction.key(),
        phase,
    });
    field.dispatch(Notification::Input);
    field.dispatch(Notification::Change);

    outcome
}
