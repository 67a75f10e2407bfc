use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static FRAME_REQUESTED: Cell<bool> = const { Cell::new(true) };
}

#[derive(Default)]
struct SlotArena {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
}

struct Mounted {
    arena: Rc<RefCell<SlotArena>>,
    scope: Scope,
    seen: bool,
}

#[derive(Default)]
pub struct Composer {
    root_arena: Rc<RefCell<SlotArena>>,
    stack: Vec<Rc<RefCell<SlotArena>>>,
    keyed_slots: HashMap<String, Box<dyn Any>>,
    mounted: HashMap<String, Mounted>,
    pending: Vec<Box<dyn FnOnce()>>,
    root_scope: Option<Scope>,
}

/// Marks the composition dirty; the host loop composes a new frame when it
/// sees the flag.
pub fn request_frame() {
    FRAME_REQUESTED.with(|f| f.set(true));
}

pub fn frame_requested() -> bool {
    FRAME_REQUESTED.with(|f| f.get())
}

/// Clears and returns the dirty flag.
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.with(|f| f.replace(false))
}

fn current_arena() -> Rc<RefCell<SlotArena>> {
    COMPOSER.with(|c| {
        let c = c.borrow();
        c.stack.last().cloned().unwrap_or_else(|| c.root_arena.clone())
    })
}

/// Slot-based remember: the Nth call within an arena returns the Nth stored
/// value, initializing it on first composition only.
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let arena = current_arena();
    let mut a = arena.borrow_mut();
    let cursor = a.cursor;
    a.cursor += 1;

    if cursor >= a.slots.len() {
        let rc: Rc<T> = Rc::new(init());
        a.slots.push(Box::new(rc.clone()));
        return rc;
    }

    if let Some(rc) = a.slots[cursor].downcast_ref::<Rc<T>>() {
        rc.clone()
    } else {
        log::warn!(
            "remember: slot {cursor} changed type; replacing. \
             Prefer remember_with_key or key_scope for conditional composition."
        );
        let rc: Rc<T> = Rc::new(init());
        a.slots[cursor] = Box::new(rc.clone());
        rc
    }
}

/// Key-based remember, stable across conditional branches.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let key = key.into();

        if let Some(existing) = c.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            }
            log::warn!("remember_with_key: key '{key}' reused with a different type; replacing.");
        }

        let rc: Rc<T> = Rc::new(init());
        c.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub(crate) fn enqueue_effect(f: impl FnOnce() + 'static) {
    COMPOSER.with(|c| c.borrow_mut().pending.push(Box::new(f)));
}

/// Composes one frame: runs `build` under the persistent root scope, sweeps
/// keyed scopes that were not re-composed (unmount), then flushes the effect
/// queue (the commit phase).
pub fn compose_frame<R>(build: impl FnOnce() -> R) -> R {
    let scope = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.root_arena.borrow_mut().cursor = 0;
        c.stack.clear();
        for m in c.mounted.values_mut() {
            m.seen = false;
        }
        c.root_scope.get_or_insert_with(Scope::new).clone()
    });

    let out = scope.run(build);
    sweep_unmounted();
    flush_effects();
    out
}

/// Mounts `f`'s content under a stable child scope with its own slot arena.
/// When a key composed last frame is absent this frame, that scope is
/// disposed during the sweep — this is component unmount.
pub fn key_scope<R>(key: impl Into<String>, f: impl FnOnce() -> R) -> R {
    let key = key.into();
    let (arena, scope) = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let m = c.mounted.entry(key).or_insert_with(|| Mounted {
            arena: Rc::new(RefCell::new(SlotArena::default())),
            scope: Scope::new(),
            seen: false,
        });
        m.seen = true;
        m.arena.borrow_mut().cursor = 0;
        (m.arena.clone(), m.scope.clone())
    });

    COMPOSER.with(|c| c.borrow_mut().stack.push(arena));
    let out = scope.run(f);
    COMPOSER.with(|c| {
        c.borrow_mut().stack.pop();
    });
    out
}

fn sweep_unmounted() {
    let dead: Vec<(String, Mounted)> = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let keys: Vec<String> = c
            .mounted
            .iter()
            .filter(|(_, m)| !m.seen)
            .map(|(k, _)| k.clone())
            .collect();
        keys.into_iter()
            .filter_map(|k| c.mounted.remove(&k).map(|m| (k, m)))
            .collect()
    });
    for (key, m) in dead {
        log::trace!("unmounting scope '{key}'");
        m.scope.dispose();
    }
}

fn flush_effects() {
    loop {
        let batch: Vec<Box<dyn FnOnce()>> =
            COMPOSER.with(|c| std::mem::take(&mut c.borrow_mut().pending));
        if batch.is_empty() {
            break;
        }
        for f in batch {
            f();
        }
    }
}

/// Disposes every live scope (running remaining cleanups exactly once) and
/// clears all slot storage. Cleanups run before the host tears anything
/// else down.
pub fn shutdown() {
    let (mounted, root) = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        (std::mem::take(&mut c.mounted), c.root_scope.take())
    });
    for (_, m) in mounted {
        m.scope.dispose();
    }
    if let Some(scope) = root {
        scope.dispose();
    }
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.root_arena.borrow_mut().slots.clear();
        c.root_arena.borrow_mut().cursor = 0;
        c.keyed_slots.clear();
        c.pending.clear();
        c.stack.clear();
    });
}

/// Shutdown plus a fresh dirty flag; used by runners that re-drive the
/// runtime within one thread.
pub fn reset() {
    shutdown();
    request_frame();
}
