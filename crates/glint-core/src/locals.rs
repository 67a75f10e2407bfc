//! Composition locals: values made available to an entire subtree without
//! parameter threading. A provider pushes a frame for the duration of the
//! subtree's composition; lookups walk the stack innermost-first.
//!
//! Unlike ambient defaults, absence of a provider is a programming error:
//! `local` panics and `try_local` returns `RuntimeError::MissingLocal`.

use std::any::{Any, TypeId, type_name};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::RuntimeError;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = const { RefCell::new(Vec::new()) };
}

/// Makes `value` visible to every `local::<T>()` lookup inside `f`.
pub fn provide_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    // Frame guard: pops on unwind too.
    struct Frame;
    impl Drop for Frame {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }

    LOCALS_STACK.with(|st| {
        let mut frame: HashMap<TypeId, Box<dyn Any>> = HashMap::new();
        frame.insert(TypeId::of::<T>(), Box::new(value));
        st.borrow_mut().push(frame);
    });
    let _frame = Frame;
    f()
}

pub fn try_local<T: Clone + 'static>() -> Result<T, RuntimeError> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>()) {
                if let Some(t) = v.downcast_ref::<T>() {
                    return Ok(t.clone());
                }
            }
        }
        Err(RuntimeError::MissingLocal(type_name::<T>()))
    })
}

/// Panicking lookup for callsites where a missing provider is a bug.
pub fn local<T: Clone + 'static>() -> T {
    match try_local::<T>() {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}
