//! Timer scheduling used by press-and-hold auto-repeat.
//!
//! The press controller never blocks; it arms one-shot and repeating timers on
//! a [`Scheduler`] and reacts when the host calls back. A browser host backs
//! this with `setTimeout`/`setInterval`, while [`VirtualScheduler`] lets tests
//! and self-driven hosts move time forward by hand.

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

/// Source of one-shot and repeating timers.
///
/// Callbacks are invoked later from the host's event loop, never from inside
/// `set_timeout`/`set_interval` themselves.
pub trait Scheduler {
    /// Handle identifying an armed timer
    type Handle;

    /// Run `callback` once after `delay`
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `callback` every `period` until cleared
    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle;

    /// Disarm a timer. Clearing a fired or already cleared timer does nothing.
    fn clear(&self, handle: Self::Handle);
}

/// Identifier of a timer armed on a [`VirtualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Shortest period a repeating timer may have; a zero period would never let time advance
const MIN_PERIOD: Duration = Duration::from_millis(1);

enum Callback {
    Once(Box<dyn FnOnce()>),
    Repeating(Box<dyn FnMut()>),
}

struct Timer {
    id: TimerId,
    due: Duration,
    /// Arming order, breaks ties between timers due at the same instant
    seq: u64,
    period: Option<Duration>,
    /// Taken out while the callback runs
    callback: Option<Callback>,
}

#[derive(Default)]
struct VirtualState {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: Vec<Timer>,
}

impl VirtualState {
    fn arm(&mut self, due: Duration, period: Option<Duration>, callback: Callback) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            id,
            due,
            seq,
            period,
            callback: Some(callback),
        });
        id
    }

    /// Index of the earliest runnable timer due no later than `deadline`
    fn next_due(&self, deadline: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.callback.is_some() && timer.due <= deadline)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)
    }
}

/// Deterministic scheduler driven by [`advance`](Self::advance).
///
/// Time only moves when asked to. Timers fire in due order, timers due at the
/// same instant fire in the order they were armed, and callbacks may arm or
/// clear timers (including their own) while running.
#[derive(Default)]
pub struct VirtualScheduler {
    state: RefCell<VirtualState>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of armed timers, one-shot and repeating
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Number of armed one-shot timers
    pub fn pending_timeouts(&self) -> usize {
        self.count_armed(|timer| timer.period.is_none())
    }

    /// Number of armed repeating timers
    pub fn pending_intervals(&self) -> usize {
        self.count_armed(|timer| timer.period.is_some())
    }

    fn count_armed(&self, predicate: impl Fn(&Timer) -> bool) -> usize {
        self.state
            .borrow()
            .timers
            .iter()
            .filter(|timer| predicate(timer))
            .count()
    }

    /// Move time forward by `by`, firing every timer that comes due on the way.
    ///
    /// Returns the number of callbacks invoked.
    pub fn advance(&self, by: Duration) -> usize {
        let deadline = self.now() + by;
        let mut fired = 0;

        loop {
            // The borrow must be released before the callback runs so it can re-arm
            let (id, callback) = {
                let mut state = self.state.borrow_mut();
                let Some(index) = state.next_due(deadline) else {
                    break;
                };

                let due = state.timers[index].due;
                state.now = due;

                match state.timers[index].period {
                    Some(period) => {
                        let seq = state.next_seq;
                        state.next_seq += 1;
                        let timer = &mut state.timers[index];
                        timer.due = due + period;
                        timer.seq = seq;
                        (timer.id, timer.callback.take())
                    }
                    None => {
                        let timer = state.timers.remove(index);
                        (timer.id, timer.callback)
                    }
                }
            };

            fired += 1;
            match callback {
                Some(Callback::Once(callback)) => callback(),
                Some(Callback::Repeating(mut callback)) => {
                    callback();
                    // Put it back unless the timer was cleared while running
                    let mut state = self.state.borrow_mut();
                    if let Some(timer) = state.timers.iter_mut().find(|timer| timer.id == id) {
                        timer.callback = Some(Callback::Repeating(callback));
                    }
                }
                None => {}
            }
        }

        self.state.borrow_mut().now = deadline;
        fired
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("VirtualScheduler")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = TimerId;

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        state.arm(due, None, Callback::Once(callback))
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerId {
        let period = period.max(MIN_PERIOD);
        let mut state = self.state.borrow_mut();
        let due = state.now + period;
        state.arm(due, Some(period), Callback::Repeating(callback))
    }

    fn clear(&self, handle: TimerId) {
        self.state
            .borrow_mut()
            .timers
            .retain(|timer| timer.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_timeout_fires_once_when_due() {
        let scheduler = VirtualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        scheduler.set_timeout(ms(300), Box::new(move || counter.set(counter.get() + 1)));

        assert_eq!(scheduler.advance(ms(299)), 0);
        assert_eq!(hits.get(), 0);
        assert_eq!(scheduler.advance(ms(1)), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.advance(ms(1000)), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_interval_repeats_until_cleared() {
        let scheduler = VirtualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = scheduler.set_interval(ms(50), Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(ms(175));
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.now(), ms(175));

        scheduler.clear(id);
        scheduler.advance(ms(500));
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.pending_intervals(), 0);
    }

    #[test]
    fn test_clear_unknown_or_fired_is_noop() {
        let scheduler = VirtualScheduler::new();
        let id = scheduler.set_timeout(ms(10), Box::new(|| {}));
        scheduler.advance(ms(10));
        scheduler.clear(id);
        scheduler.clear(id);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_same_instant_fires_in_arming_order() {
        let scheduler = VirtualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["a", "b", "c"] {
            let order = order.clone();
            scheduler.set_timeout(ms(20), Box::new(move || order.borrow_mut().push(label)));
        }

        scheduler.advance(ms(20));
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_callback_can_arm_timers() {
        let scheduler = Rc::new(VirtualScheduler::new());
        let hits = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let counter = hits.clone();
        scheduler.set_timeout(
            ms(300),
            Box::new(move || {
                let counter = counter.clone();
                inner_scheduler
                    .set_interval(ms(50), Box::new(move || counter.set(counter.get() + 1)));
            }),
        );

        scheduler.advance(ms(300));
        assert_eq!(scheduler.pending_timeouts(), 0);
        assert_eq!(scheduler.pending_intervals(), 1);

        // Interval armed at t=300 fires at 350, 400, 450
        scheduler.advance(ms(150));
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_interval_can_clear_itself() {
        let scheduler = Rc::new(VirtualScheduler::new());
        let slot: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
        let hits = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_slot = slot.clone();
        let counter = hits.clone();
        let id = scheduler.set_interval(
            ms(10),
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 2 {
                    if let Some(id) = inner_slot.get() {
                        inner_scheduler.clear(id);
                    }
                }
            }),
        );
        slot.set(Some(id));

        scheduler.advance(ms(100));
        assert_eq!(hits.get(), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_zero_period_still_advances() {
        let scheduler = VirtualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        scheduler.set_interval(Duration::ZERO, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(ms(5));
        assert_eq!(hits.get(), 5);
    }
}
