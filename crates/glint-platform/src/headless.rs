//! Deterministic runner for tests: a `TestClock` instead of wall time, a
//! `RecordingPage` instead of a real title sink, and explicit frame steps
//! instead of an event loop.

use std::rc::Rc;

use web_time::Duration;

use glint_core::host::{self, RecordingPage};
use glint_core::time::{self, TestClock};
use glint_core::{runtime, timers};
use glint_ui::paint::{Scene, paint};
use glint_ui::view::View;

pub struct Headless {
    clock: Rc<TestClock>,
    page: Rc<RecordingPage>,
}

impl Headless {
    pub fn new() -> Self {
        runtime::reset();
        let clock = Rc::new(TestClock::new());
        let page = Rc::new(RecordingPage::default());
        time::set_clock(clock.clone());
        host::install_page(page.clone());
        Self { clock, page }
    }

    /// Composes and paints one frame, clearing the dirty flag first.
    pub fn step(&self, build: impl FnOnce() -> View) -> Scene {
        runtime::take_frame_request();
        let view = runtime::compose_frame(build);
        paint(&view)
    }

    /// Advances the clock and fires every elapsed interval tick; returns the
    /// number of ticks fired.
    pub fn advance(&self, d: Duration) -> usize {
        self.clock.advance(d);
        timers::run_due()
    }

    pub fn frame_requested(&self) -> bool {
        runtime::frame_requested()
    }

    pub fn titles(&self) -> Vec<String> {
        self.page.titles()
    }

    pub fn last_title(&self) -> Option<String> {
        self.page.last_title()
    }

    pub fn title_writes(&self) -> usize {
        self.page.title_writes()
    }

    /// Tears the composition down; remaining effect cleanups run here.
    pub fn shutdown(&self) {
        runtime::shutdown();
    }
}

impl Default for Headless {
    fn default() -> Self {
        Self::new()
    }
}
