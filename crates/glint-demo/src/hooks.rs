use glint_core::prelude::*;

/// A counter bundling a value with its operations. The initial value is
/// captured when the owning composition first creates the hook and is not
/// affected by later increments or decrements.
#[derive(Clone)]
pub struct Counter {
    value: Signal<i32>,
    initial: i32,
}

impl Counter {
    pub fn get(&self) -> i32 {
        self.value.get()
    }

    pub fn increment(&self) {
        self.value.update(|v| *v += 1);
    }

    pub fn decrement(&self) {
        self.value.update(|v| *v -= 1);
    }

    /// Restores the construction-time initial value.
    pub fn reset(&self) {
        self.value.set(self.initial);
    }
}

pub fn use_counter(initial: i32) -> Counter {
    let counter = remember(move || Counter {
        value: signal(initial),
        initial,
    });
    (*counter).clone()
}
