pub use crate::effects::{Dispose, keyed_effect, mount_effect, render_effect};
pub use crate::error::RuntimeError;
pub use crate::locals::{local, provide_local, try_local};
pub use crate::runtime::{
    compose_frame, key_scope, remember, remember_state, remember_with_key, request_frame,
};
pub use crate::signal::{Signal, signal};
pub use crate::timers::use_interval;
