use glint_core::prelude::*;
use glint_ui::theme::{ThemeState, with_theme_state};
use glint_ui::view::{Themed, View};

use crate::panels::{ClockPanel, CounterPanel, ThemePanel};

/// Application root: one theme provider wrapping the three demo panels.
/// The clock panel sits in its own keyed scope so its teardown (timer
/// cancellation included) is tied to leaving the composition.
#[allow(non_snake_case)]
pub fn App() -> View {
    let theme = remember(|| ThemeState::new(true));
    let theme = (*theme).clone();

    with_theme_state(theme.clone(), || {
        Themed(
            theme.palette(),
            vec![
                key_scope("clock", ClockPanel),
                CounterPanel(),
                ThemePanel(),
            ],
        )
    })
}
