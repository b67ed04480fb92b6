//! Press-and-hold handling for one affix.
//!
//! A press steps the field immediately, waits [`PressTiming::wait`] and then
//! keeps stepping every [`PressTiming::repeat`] until released:
//!
//! ```text
//!  Idle --press_start--> Pending --wait elapsed--> Repeating
//!   ^                       |                          |
//!   +------press_end--------+--------press_end---------+
//! ```
//!
//! Each controller owns its own timer handles, so holding an affix on one field
//! never interferes with another field or with the opposite affix.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use web_time::Instant;

use crate::constants::{DEFAULT_REPEAT_INTERVAL, DEFAULT_WAIT_TIMEOUT};
use crate::direction::Direction;
use crate::field::NumericField;
use crate::notification::KeyPhase;
use crate::stepper;
use crate::timer::Scheduler;

/// Delays governing auto-repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressTiming {
    /// Hold time before repeating starts
    pub wait: Duration,
    /// Period between repeated steps
    pub repeat: Duration,
}

impl Default for PressTiming {
    fn default() -> Self {
        Self {
            wait: DEFAULT_WAIT_TIMEOUT,
            repeat: DEFAULT_REPEAT_INTERVAL,
        }
    }
}

/// The device event that started or ended a press
pub trait PressEvent {
    /// Suppress the host's default handling (text selection, emulated clicks, ...)
    fn prevent_default(&self);
}

/// Where a press session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    /// No press in progress
    Idle,
    /// Pressed, waiting for the repeat delay
    Pending,
    /// Auto-repeating
    Repeating,
}

/// Timer handles of the press in progress
struct PressSession<H> {
    delay: Option<H>,
    repeat: Option<H>,
    started_at: Option<Instant>,
}

impl<H> Default for PressSession<H> {
    fn default() -> Self {
        Self {
            delay: None,
            repeat: None,
            started_at: None,
        }
    }
}

impl<H> PressSession<H> {
    fn is_armed(&self) -> bool {
        self.delay.is_some() || self.repeat.is_some()
    }

    fn state(&self) -> PressState {
        if self.repeat.is_some() {
            PressState::Repeating
        } else if self.delay.is_some() {
            PressState::Pending
        } else {
            PressState::Idle
        }
    }
}

struct ControllerInner<F: ?Sized, S: Scheduler> {
    field: Rc<F>,
    scheduler: Rc<S>,
    direction: Direction,
    timing: PressTiming,
    session: RefCell<PressSession<S::Handle>>,
}

impl<F, S> ControllerInner<F, S>
where
    F: NumericField + ?Sized + 'static,
    S: Scheduler + 'static,
{
    /// Delay elapsed: start the repeat timer unless one is already running
    fn begin_repeat(self: &Rc<Self>) {
        if self.session.borrow().repeat.is_some() {
            return;
        }

        log::debug!(
            "{:?} affix: repeating every {:?}",
            self.direction,
            self.timing.repeat
        );

        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = self.scheduler.set_interval(
            self.timing.repeat,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    stepper::step(&*inner.field, inner.direction, KeyPhase::KeyDown);
                }
            }),
        );
        self.session.borrow_mut().repeat = Some(handle);
    }

    /// Clear both timers. Returns how long the press was held, if one was in progress.
    fn disarm(&self) -> Option<Duration> {
        let (delay, repeat, started_at) = {
            let mut session = self.session.borrow_mut();
            (
                session.delay.take(),
                session.repeat.take(),
                session.started_at.take(),
            )
        };

        if let Some(handle) = delay {
            self.scheduler.clear(handle);
        }
        if let Some(handle) = repeat {
            self.scheduler.clear(handle);
        }

        started_at.map(|started| started.elapsed())
    }
}

impl<F: ?Sized, S: Scheduler> Drop for ControllerInner<F, S> {
    fn drop(&mut self) {
        let session = self.session.get_mut();
        if let Some(handle) = session.delay.take() {
            self.scheduler.clear(handle);
        }
        if let Some(handle) = session.repeat.take() {
            self.scheduler.clear(handle);
        }
    }
}

/// Press-and-hold controller bound to one field and one direction.
///
/// Cloning is cheap and yields a handle to the same session, so the same
/// controller can be wired to several input modalities (mouse and touch) that
/// then share one set of timers.
pub struct PressController<F: ?Sized, S: Scheduler> {
    inner: Rc<ControllerInner<F, S>>,
}

impl<F: ?Sized, S: Scheduler> Clone for PressController<F, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized, S: Scheduler> std::fmt::Debug for PressController<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressController")
            .field("direction", &self.inner.direction)
            .field("timing", &self.inner.timing)
            .field("state", &self.inner.session.borrow().state())
            .finish()
    }
}

impl<F, S> PressController<F, S>
where
    F: NumericField + ?Sized + 'static,
    S: Scheduler + 'static,
{
    pub fn new(field: Rc<F>, scheduler: Rc<S>, direction: Direction, timing: PressTiming) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                field,
                scheduler,
                direction,
                timing,
                session: RefCell::new(PressSession::default()),
            }),
        }
    }

    /// Direction this controller steps in
    pub fn direction(&self) -> Direction {
        self.inner.direction
    }

    /// Timing this controller was created with
    pub fn timing(&self) -> PressTiming {
        self.inner.timing
    }

    /// Current state of the press session
    pub fn state(&self) -> PressState {
        self.inner.session.borrow().state()
    }

    /// Start a press: step once now and arm the repeat delay.
    ///
    /// Ignored while a press is already armed, so a gesture reported by two
    /// devices (mouse-down followed by touch-start) runs a single timer chain.
    pub fn press_start(&self, event: &dyn PressEvent) {
        event.prevent_default();

        let inner = &self.inner;
        if inner.session.borrow().is_armed() {
            log::trace!("{:?} affix: press already armed, ignoring start", inner.direction);
            return;
        }

        log::debug!("{:?} affix: press start", inner.direction);
        stepper::step(&*inner.field, inner.direction, KeyPhase::KeyDown);

        let weak = Rc::downgrade(inner);
        let handle = inner.scheduler.set_timeout(
            inner.timing.wait,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.begin_repeat();
                }
            }),
        );

        let mut session = inner.session.borrow_mut();
        session.delay = Some(handle);
        session.started_at = Some(Instant::now());
    }

    /// End a press: stop both timers, take a final step and refocus the field.
    ///
    /// The final step is taken even when no press was in progress.
    pub fn press_end(&self, event: &dyn PressEvent) {
        event.prevent_default();

        let inner = &self.inner;
        if let Some(held) = inner.disarm() {
            log::debug!("{:?} affix: press end after {:?}", inner.direction, held);
        }

        stepper::step(&*inner.field, inner.direction, KeyPhase::KeyUp);
        inner.field.focus();
    }

    /// Abandon a press without a final step, e.g. when the host cancels a touch.
    pub fn press_cancel(&self) {
        if let Some(held) = self.inner.disarm() {
            log::debug!(
                "{:?} affix: press cancelled after {:?}",
                self.inner.direction,
                held
            );
        }
    }
}
