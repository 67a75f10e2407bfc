use std::cell::RefCell;
use std::rc::Rc;

use crate::runtime;

/// Observable state cell. Cloning shares the underlying value.
pub struct Signal<T: 'static>(Rc<RefCell<T>>);

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().clone()
    }

    /// Reads the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Stores `v` and requests a recomposition frame. The new value is
    /// visible to reads immediately.
    pub fn set(&self, v: T) {
        *self.0.borrow_mut() = v;
        runtime::request_frame();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut());
        runtime::request_frame();
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
