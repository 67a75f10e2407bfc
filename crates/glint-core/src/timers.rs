//! Interval timers for the single-threaded runtime. Registration happens
//! from composition (via `use_interval`); firing happens from the host loop
//! (via `run_due`), interleaved with input events, never in parallel.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::effects::{Dispose, mount_effect};
use crate::error::RuntimeError;
use crate::time;

new_key_type! {
    pub struct IntervalKey;
}

struct Interval {
    period: Duration,
    next: Instant,
    callback: Rc<RefCell<dyn FnMut()>>,
}

thread_local! {
    static TIMERS: RefCell<SlotMap<IntervalKey, Interval>> = RefCell::new(SlotMap::with_key());
}

pub struct IntervalHandle {
    key: IntervalKey,
}

impl IntervalHandle {
    pub fn cancel(self) {
        TIMERS.with(|t| {
            if t.borrow_mut().remove(self.key).is_some() {
                log::trace!("interval cancelled");
            }
        });
    }
}

/// Registers `callback` to fire every `period`, starting one period from
/// now. The period must be nonzero.
pub fn set_interval(
    period: Duration,
    callback: impl FnMut() + 'static,
) -> Result<IntervalHandle, RuntimeError> {
    if period.is_zero() {
        return Err(RuntimeError::ZeroInterval);
    }
    let interval = Interval {
        period,
        next: time::now() + period,
        callback: Rc::new(RefCell::new(callback)),
    };
    let key = TIMERS.with(|t| t.borrow_mut().insert(interval));
    log::trace!("interval registered: {period:?}");
    Ok(IntervalHandle { key })
}

/// Earliest pending deadline, if any timer is registered.
pub fn next_deadline() -> Option<Instant> {
    TIMERS.with(|t| t.borrow().values().map(|i| i.next).min())
}

/// Fires every elapsed tick of every registered interval, advancing each
/// deadline by whole periods. Callbacks run outside the registry borrow, so
/// they may set state or register further timers. Returns ticks fired.
pub fn run_due() -> usize {
    let mut fired = 0;
    loop {
        let now = time::now();
        let due = TIMERS.with(|t| {
            let mut timers = t.borrow_mut();
            let key = timers
                .iter()
                .find(|(_, i)| i.next <= now)
                .map(|(k, _)| k);
            key.and_then(|k| {
                timers.get_mut(k).map(|i| {
                    i.next += i.period;
                    i.callback.clone()
                })
            })
        });
        match due {
            Some(callback) => {
                (&mut *callback.borrow_mut())();
                fired += 1;
            }
            None => break,
        }
    }
    fired
}

/// Packages an interval as a mount effect: registered once when the owning
/// composition mounts, cancelled exactly once when it unmounts.
pub fn use_interval(period: Duration, callback: impl FnMut() + 'static) {
    mount_effect(move || match set_interval(period, callback) {
        Ok(handle) => Dispose::new(move || handle.cancel()),
        Err(e) => {
            log::error!("use_interval: {e}");
            Dispose::none()
        }
    });
}
