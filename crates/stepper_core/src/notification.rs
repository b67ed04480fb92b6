//! Synthetic notifications emitted on a field after each step.
//!
//! Host code watching the field (key handlers, `input`/`change` listeners)
//! should not be able to tell a stepped value from one typed with the arrow
//! keys, so every step is followed by a keyboard notification and the two
//! generic value notifications. The sink is injected, keeping the core free of
//! any particular UI toolkit.

use crate::constants::{KEY_CODE_ARROW_DOWN, KEY_CODE_ARROW_UP};

/// Arrow keys used to shape keyboard notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    ArrowUp,
    ArrowDown,
}

impl ArrowKey {
    /// Value of the `key` (and `code`) property
    pub fn name(self) -> &'static str {
        match self {
            ArrowKey::ArrowUp => "ArrowUp",
            ArrowKey::ArrowDown => "ArrowDown",
        }
    }

    /// Legacy `keyCode`/`which` value
    pub fn key_code(self) -> u32 {
        match self {
            ArrowKey::ArrowUp => KEY_CODE_ARROW_UP,
            ArrowKey::ArrowDown => KEY_CODE_ARROW_DOWN,
        }
    }
}

/// Phase of the keyboard event a step is reported as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    /// Press start and every auto-repeat tick
    KeyDown,
    KeyPress,
    /// Release of the press
    KeyUp,
}

impl KeyPhase {
    /// DOM event type for this phase
    pub fn event_type(self) -> &'static str {
        match self {
            KeyPhase::KeyDown => "keydown",
            KeyPhase::KeyPress => "keypress",
            KeyPhase::KeyUp => "keyup",
        }
    }
}

/// Propagation flags a notification is dispatched with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFlags {
    pub bubbles: bool,
    pub cancelable: bool,
    /// Whether the event crosses shadow-root boundaries
    pub composed: bool,
}

/// One notification emitted on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Keyboard-style event for `key` in the given phase
    Key { key: ArrowKey, phase: KeyPhase },
    /// Value changed, still in progress
    Input,
    /// Value committed
    Change,
}

impl Notification {
    /// DOM event type the notification is dispatched as
    pub fn event_type(&self) -> &'static str {
        match self {
            Notification::Key { phase, .. } => phase.event_type(),
            Notification::Input => "input",
            Notification::Change => "change",
        }
    }

    /// Propagation flags for this notification
    pub fn flags(&self) -> EventFlags {
        match self {
            Notification::Key { .. } | Notification::Input => EventFlags {
                bubbles: true,
                cancelable: true,
                composed: true,
            },
            Notification::Change => EventFlags {
                bubbles: true,
                cancelable: true,
                composed: false,
            },
        }
    }
}

/// Receiver of the notifications emitted after a step
pub trait NotificationSink {
    /// Deliver one notification. Delivery failures are the sink's to report.
    fn dispatch(&self, notification: Notification);
}
