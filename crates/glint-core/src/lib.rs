//! # State cells, remembered slots, and effects
//!
//! Glint is a small composition runtime in the Compose/hooks mold. A UI is a
//! function that is re-run (recomposed) whenever state changes; the runtime
//! provides the pieces that make that workable:
//!
//! - `Signal<T>` — a state cell. Writing it requests a new frame.
//! - `remember*` — per-callsite storage that survives recomposition.
//! - `render_effect` / `keyed_effect` / `mount_effect` — side effects that
//!   run *after* a frame commits, with cleanup before the next run and at
//!   teardown.
//! - `provide_local` / `local` — values made available to a whole subtree
//!   without parameter threading. Lookups outside a provider fail fast.
//! - `use_interval` — a repeating timer bound to the lifetime of the
//!   composition that registered it.
//!
//! ## State cells
//!
//! ```rust
//! use glint_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! New values are visible to reads immediately; the re-render they request
//! happens on the next frame, driven by the host loop.
//!
//! ## Remembered state
//!
//! `remember` is positional: the Nth call within a composition slot arena
//! always refers to the Nth stored value. Components hold their state in
//! remembered signals rather than globals:
//!
//! ```rust
//! use glint_core::*;
//!
//! fn counter_value() -> i32 {
//!     let count = remember(|| signal(0));
//!     count.get()
//! }
//! ```
//!
//! ## Effects
//!
//! Composition only *registers* effects; the runtime runs them after the
//! frame commits, in registration order. `keyed_effect` re-runs when its key
//! changes and runs its previous cleanup first; `mount_effect` is the
//! unit-keyed special case (once per mount, cleanup at unmount);
//! `render_effect` runs after every commit unconditionally.
//!
//! For repeating work, build on `mount_effect` so everything cancels when
//! the owning composition goes away — `use_interval` does exactly that.

pub mod effects;
pub mod error;
pub mod host;
pub mod locals;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod time;
pub mod timers;

pub use effects::*;
pub use error::*;
pub use locals::*;
pub use runtime::*;
pub use signal::*;
pub use timers::*;
