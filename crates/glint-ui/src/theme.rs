//! Theme store and palettes.
//!
//! The theme flag lives in one `ThemeState` handle created at the
//! application root and injected through a composition local. Descendants
//! get the handle with `use_theme_state()`; calling it outside the provider
//! is a programming error and fails fast.

use glint_core::error::RuntimeError;
use glint_core::locals::{local, provide_local, try_local};
use glint_core::signal::{Signal, signal};

use crate::color::Color;

/// Semantic color set for painting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub accent: Color,
    pub faint: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            surface: Color::from_hex("#1E1E1E"),
            on_surface: Color::from_hex("#DDDDDD"),
            accent: Color::from_hex("#34AF82"),
            faint: Color::from_hex("#555555"),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::from_hex("#FAFAFA"),
            surface: Color::from_hex("#F0F0F0"),
            on_surface: Color::from_hex("#222222"),
            accent: Color::from_hex("#0061A4"),
            faint: Color::from_hex("#999999"),
        }
    }
}

/// Shared dark/light flag plus its toggle operation. Cloning shares the
/// underlying flag.
#[derive(Clone)]
pub struct ThemeState {
    dark: Signal<bool>,
}

impl ThemeState {
    pub fn new(dark: bool) -> Self {
        Self { dark: signal(dark) }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// Flips the flag and requests a frame; every descendant reads the
    /// updated value on the next composition.
    pub fn toggle(&self) {
        self.dark.update(|d| *d = !*d);
    }

    pub fn palette(&self) -> Palette {
        if self.is_dark() {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}

pub fn with_theme_state<R>(state: ThemeState, f: impl FnOnce() -> R) -> R {
    provide_local(state, f)
}

/// Panics when called outside `with_theme_state`.
pub fn use_theme_state() -> ThemeState {
    local::<ThemeState>()
}

pub fn try_theme_state() -> Result<ThemeState, RuntimeError> {
    try_local::<ThemeState>()
}
