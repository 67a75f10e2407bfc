use std::cell::RefCell;
use std::rc::Rc;

use crate::runtime::{self, remember};
use crate::scope;

/// Run-at-most-once cleanup guard.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// An effect with nothing to clean up.
    pub fn none() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        if let Some(f) = self.0.borrow_mut().take() {
            f()
        }
    }
}

struct EffectSlot<K> {
    last: Option<K>,
    cleanup: Option<Dispose>,
    hooked: bool,
}

/// Registers an effect that runs after the commit of any frame in which
/// `key` differs from the previously observed key — hence always on mount.
/// The cleanup returned by `action` runs before the next `action` run and
/// at scope teardown.
pub fn keyed_effect<K: PartialEq + 'static>(key: K, action: impl FnOnce() -> Dispose + 'static) {
    let slot = remember(|| {
        RefCell::new(EffectSlot::<K> {
            last: None,
            cleanup: None,
            hooked: false,
        })
    });

    // Install a single teardown disposer for this callsite.
    if !slot.borrow().hooked {
        slot.borrow_mut().hooked = true;
        if let Some(scope) = scope::current_scope() {
            let slot = slot.clone();
            scope.add_disposer(move || {
                let prior = slot.borrow_mut().cleanup.take();
                if let Some(d) = prior {
                    d.run();
                }
            });
        }
    }

    runtime::enqueue_effect(move || {
        let (due, prior) = {
            let mut s = slot.borrow_mut();
            if s.last.as_ref() != Some(&key) {
                s.last = Some(key);
                (true, s.cleanup.take())
            } else {
                (false, None)
            }
        };
        if let Some(d) = prior {
            d.run();
        }
        if due {
            let d = action();
            slot.borrow_mut().cleanup = Some(d);
        }
    });
}

/// Runs once after the mount commit; cleanup at unmount.
pub fn mount_effect(action: impl FnOnce() -> Dispose + 'static) {
    keyed_effect((), action)
}

/// Runs after every commit, unconditionally.
pub fn render_effect(action: impl FnOnce() + 'static) {
    runtime::enqueue_effect(action);
}
