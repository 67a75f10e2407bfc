//! Boundary to the host page environment. Writing the page title is the
//! demo's only external I/O; runners install the real sink, tests install a
//! recording one.

use std::cell::RefCell;
use std::rc::Rc;

pub trait HostPage {
    fn set_title(&self, title: &str);
}

/// Default page: title writes go nowhere.
pub struct NullPage;

impl HostPage for NullPage {
    fn set_title(&self, _title: &str) {}
}

/// Records every title write, in order.
#[derive(Default)]
pub struct RecordingPage {
    titles: RefCell<Vec<String>>,
}

impl RecordingPage {
    pub fn titles(&self) -> Vec<String> {
        self.titles.borrow().clone()
    }

    pub fn last_title(&self) -> Option<String> {
        self.titles.borrow().last().cloned()
    }

    pub fn title_writes(&self) -> usize {
        self.titles.borrow().len()
    }
}

impl HostPage for RecordingPage {
    fn set_title(&self, title: &str) {
        self.titles.borrow_mut().push(title.to_owned());
    }
}

thread_local! {
    static PAGE: RefCell<Rc<dyn HostPage>> = RefCell::new(Rc::new(NullPage));
}

pub fn install_page(page: Rc<dyn HostPage>) {
    PAGE.with(|p| *p.borrow_mut() = page);
}

pub fn set_title(title: &str) {
    PAGE.with(|p| p.borrow().set_title(title));
}
