//! Binding a field to its pair of affixes.
//!
//! Creating the markup is up to the host. This module owns the part every host
//! shares: one [`PressController`] per direction over the same field, and the
//! table saying which gesture events drive which controller operation.

use std::rc::Rc;

use crate::direction::Direction;
use crate::field::NumericField;
use crate::press::{PressController, PressEvent, PressTiming};
use crate::timer::Scheduler;

/// What a gesture event does to a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    Start,
    End,
    Cancel,
}

/// Gesture events listened to on each affix. Mouse and touch both drive the
/// same controller.
pub const AFFIX_BINDINGS: [(&str, PressAction); 5] = [
    ("mousedown", PressAction::Start),
    ("mouseup", PressAction::End),
    ("touchstart", PressAction::Start),
    ("touchend", PressAction::End),
    ("touchcancel", PressAction::Cancel),
];

/// The increment and decrement controllers of one enhanced field
pub struct AffixPair<F: ?Sized, S: Scheduler> {
    increment: PressController<F, S>,
    decrement: PressController<F, S>,
}

impl<F, S> AffixPair<F, S>
where
    F: NumericField + ?Sized + 'static,
    S: Scheduler + 'static,
{
    /// Create both controllers over `field`, sharing `scheduler`
    pub fn new(field: Rc<F>, scheduler: Rc<S>, timing: PressTiming) -> Self {
        Self {
            increment: PressController::new(
                field.clone(),
                scheduler.clone(),
                Direction::Increase,
                timing,
            ),
            decrement: PressController::new(field, scheduler, Direction::Decrease, timing),
        }
    }

    /// Controller of the increment affix
    pub fn increment(&self) -> &PressController<F, S> {
        &self.increment
    }

    /// Controller of the decrement affix
    pub fn decrement(&self) -> &PressController<F, S> {
        &self.decrement
    }

    /// Controller of the affix bound to `direction`
    pub fn affix(&self, direction: Direction) -> &PressController<F, S> {
        match direction {
            Direction::Increase => &self.increment,
            Direction::Decrease => &self.decrement,
        }
    }

    /// Route a gesture on the `direction` affix to its controller
    pub fn handle(&self, direction: Direction, action: PressAction, event: &dyn PressEvent) {
        let controller = self.affix(direction);
        match action {
            PressAction::Start => controller.press_start(event),
            PressAction::End => controller.press_end(event),
            PressAction::Cancel => {
                event.prevent_default();
                controller.press_cancel();
            }
        }
    }
}

impl<F: ?Sized, S: Scheduler> std::fmt::Debug for AffixPair<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffixPair")
            .field("increment", &self.increment)
            .field("decrement", &self.decrement)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::press::PressState;
    use crate::test_support::{FakeEvent, MemoryField};
    use crate::timer::VirtualScheduler;
    use std::time::Duration;

    type TestPair = AffixPair<MemoryField, VirtualScheduler>;

    fn pair(value: &str) -> (Rc<MemoryField>, Rc<VirtualScheduler>, TestPair) {
        let field = Rc::new(MemoryField::new(value, "1"));
        let scheduler = Rc::new(VirtualScheduler::new());
        let pair = AffixPair::new(field.clone(), scheduler.clone(), PressTiming::default());
        (field, scheduler, pair)
    }

    fn bound_action(event_type: &str) -> Option<PressAction> {
        AFFIX_BINDINGS
            .iter()
            .find(|(name, _)| *name == event_type)
            .map(|(_, action)| *action)
    }

    #[test]
    fn test_bindings_cover_both_modalities() {
        assert_eq!(bound_action("mousedown"), Some(PressAction::Start));
        assert_eq!(bound_action("touchstart"), Some(PressAction::Start));
        assert_eq!(bound_action("mouseup"), Some(PressAction::End));
        assert_eq!(bound_action("touchend"), Some(PressAction::End));
        assert_eq!(bound_action("touchcancel"), Some(PressAction::Cancel));
        assert_eq!(bound_action("click"), None);
        assert_eq!(AFFIX_BINDINGS.len(), 5);
    }

    #[test]
    fn test_affixes_step_in_their_direction() {
        let (field, _scheduler, pair) = pair("5");
        let event = FakeEvent::default();

        pair.handle(Direction::Increase, PressAction::Start, &event);
        pair.handle(Direction::Increase, PressAction::End, &event);
        assert_eq!(field.current(), "7");

        pair.handle(Direction::Decrease, PressAction::Start, &event);
        pair.handle(Direction::Decrease, PressAction::End, &event);
        assert_eq!(field.current(), "5");
        assert_eq!(event.prevented.get(), 4);
    }

    #[test]
    fn test_affix_lookup() {
        let (_field, _scheduler, pair) = pair("0");
        assert_eq!(pair.affix(Direction::Increase).direction(), Direction::Increase);
        assert_eq!(pair.affix(Direction::Decrease).direction(), Direction::Decrease);
        assert_eq!(pair.increment().direction(), Direction::Increase);
        assert_eq!(pair.decrement().direction(), Direction::Decrease);
    }

    #[test]
    fn test_mouse_and_touch_share_a_session() {
        let (field, scheduler, pair) = pair("0");
        let event = FakeEvent::default();

        // mousedown followed by touchstart for the same physical press
        for kind in ["mousedown", "touchstart"] {
            let action = bound_action(kind).expect("bound event");
            pair.handle(Direction::Increase, action, &event);
        }
        assert_eq!(scheduler.pending_timeouts(), 1);

        scheduler.advance(Duration::from_millis(100));
        pair.handle(Direction::Increase, PressAction::End, &event);
        assert_eq!(field.current(), "2");
    }

    #[test]
    fn test_directions_have_independent_sessions() {
        let (_field, scheduler, pair) = pair("0");
        let event = FakeEvent::default();

        pair.handle(Direction::Increase, PressAction::Start, &event);
        pair.handle(Direction::Decrease, PressAction::Start, &event);
        assert_eq!(scheduler.pending_timeouts(), 2);

        pair.handle(Direction::Decrease, PressAction::Cancel, &event);
        assert_eq!(pair.decrement().state(), PressState::Idle);
        assert_eq!(pair.increment().state(), PressState::Pending);
    }
}
