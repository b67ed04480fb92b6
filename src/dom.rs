//! Browser implementations of the stepper_core collaborator traits.

use std::time::Duration;

use stepper_core::{Notification, NotificationSink, NumericField, PressEvent, Scheduler};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventInit, HtmlInputElement, KeyboardEvent, KeyboardEventInit, Window};

use crate::error::EnhanceError;

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        EnhanceError::Dom(format!("{:?}", value))
    }
}

/// An `<input type="number">` seen as a [`NumericField`].
pub struct DomField {
    input: HtmlInputElement,
}

impl DomField {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl NotificationSink for DomField {
    fn dispatch(&self, notification: Notification) {
        let event = match build_event(notification) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Failed to create {} event: {:?}", notification.event_type(), e);
                return;
            }
        };

        if let Err(e) = self.input.dispatch_event(&event) {
            log::warn!("Failed to dispatch {} event: {:?}", notification.event_type(), e);
        }
    }
}

impl NumericField for DomField {
    fn value(&self) -> String {
        self.input.value()
    }

    fn set_value(&self, value: &str) {
        self.input.set_value(value);
    }

    fn step_attr(&self) -> String {
        self.input.step()
    }

    fn min_attr(&self) -> String {
        self.input.min()
    }

    fn max_attr(&self) -> String {
        self.input.max()
    }

    fn focus(&self) {
        if let Err(e) = self.input.focus() {
            log::warn!("Failed to focus number input: {:?}", e);
        }
    }
}

/// Build the DOM event for a notification
fn build_event(notification: Notification) -> Result<Event, JsValue> {
    let flags = notification.flags();

    match notification {
        Notification::Key { key, phase } => {
            let init = KeyboardEventInit::new();
            init.set_bubbles(flags.bubbles);
            init.set_cancelable(flags.cancelable);
            init.set_composed(flags.composed);
            init.set_key(key.name());
            init.set_code(key.name());
            init.set_char_code(0);
            init.set_key_code(key.key_code());
            init.set_which(key.key_code());
            if let Some(window) = web_sys::window() {
                init.set_view(Some(&window));
            }

            let event =
                KeyboardEvent::new_with_keyboard_event_init_dict(phase.event_type(), &init)?;
            Ok(event.into())
        }
        Notification::Input | Notification::Change => {
            let init = EventInit::new();
            init.set_bubbles(flags.bubbles);
            init.set_cancelable(flags.cancelable);
            init.set_composed(flags.composed);

            Event::new_with_event_init_dict(notification.event_type(), &init)
        }
    }
}

/// A gesture event from an affix
pub struct DomPressEvent(pub Event);

impl PressEvent for DomPressEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// A timer armed on the window, owning the JS callback until cleared.
pub struct WindowTimer {
    /// `None` when the browser refused to arm the timer
    id: Option<i32>,
    repeating: bool,
    _callback: Closure<dyn FnMut()>,
}

/// [`Scheduler`] backed by `setTimeout`/`setInterval`
pub struct WindowScheduler {
    window: Window,
}

impl WindowScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn duration_to_millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

impl Scheduler for WindowScheduler {
    type Handle = WindowTimer;

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> WindowTimer {
        let closure = Closure::once(callback);
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                duration_to_millis(delay),
            )
            .map_err(|e| log::warn!("setTimeout failed: {:?}", e))
            .ok();

        WindowTimer {
            id,
            repeating: false,
            _callback: closure,
        }
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> WindowTimer {
        let closure = Closure::wrap(callback);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                duration_to_millis(period),
            )
            .map_err(|e| log::warn!("setInterval failed: {:?}", e))
            .ok();

        WindowTimer {
            id,
            repeating: true,
            _callback: closure,
        }
    }

    fn clear(&self, handle: WindowTimer) {
        let Some(id) = handle.id else {
            return;
        };

        if handle.repeating {
            self.window.clear_interval_with_handle(id);
        } else {
            self.window.clear_timeout_with_handle(id);
        }
        // Dropping the handle here releases the JS callback
    }
}
