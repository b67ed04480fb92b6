//! In-memory collaborators shared by the unit tests

use std::cell::{Cell, RefCell};

use crate::field::NumericField;
use crate::notification::{Notification, NotificationSink};
use crate::press::PressEvent;

/// A field backed by plain strings that records everything done to it
#[derive(Debug, Default)]
pub struct MemoryField {
    pub value: RefCell<String>,
    pub step: String,
    pub min: String,
    pub max: String,
    pub writes: RefCell<Vec<String>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub focus_count: Cell<usize>,
}

impl MemoryField {
    pub fn new(value: &str, step: &str) -> Self {
        Self {
            value: RefCell::new(value.to_string()),
            step: step.to_string(),
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, min: &str, max: &str) -> Self {
        self.min = min.to_string();
        self.max = max.to_string();
        self
    }

    pub fn current(&self) -> String {
        self.value.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl NotificationSink for MemoryField {
    fn dispatch(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

impl NumericField for MemoryField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
        self.writes.borrow_mut().push(value.to_string());
    }

    fn step_attr(&self) -> String {
        self.step.clone()
    }

    fn min_attr(&self) -> String {
        self.min.clone()
    }

    fn max_attr(&self) -> String {
        self.max.clone()
    }

    fn focus(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }
}

/// A gesture event that counts how often its default action was suppressed
#[derive(Debug, Default)]
pub struct FakeEvent {
    pub prevented: Cell<usize>,
}

impl PressEvent for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}
