use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant, SystemTime};

/// Time source for the runtime. `now` drives timer deadlines, `wall` drives
/// displayed timestamps; keeping both behind one trait lets tests advance
/// them in lockstep.
pub trait Clock {
    fn now(&self) -> Instant;
    fn wall(&self) -> SystemTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock tests can drive deterministically. Wall time starts at the Unix
/// epoch.
pub struct TestClock {
    start: Instant,
    offset: Cell<Duration>,
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, d: Duration) {
        self.offset.set(self.offset.get() + d);
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }

    fn wall(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + self.offset.get()
    }
}

thread_local! {
    static CLOCK: RefCell<Rc<dyn Clock>> = RefCell::new(Rc::new(SystemClock));
}

/// Installs a clock for this thread. Runners install `SystemClock`; tests
/// install a `TestClock` they keep a handle to.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = clock);
}

pub fn now() -> Instant {
    CLOCK.with(|c| c.borrow().now())
}

pub fn wall() -> SystemTime {
    CLOCK.with(|c| c.borrow().wall())
}
