//! The effect panel: a ticking clock, a click counter, a title write after
//! every commit, and a change-gated log line.

use web_time::{Duration, SystemTime};

use glint_core::prelude::*;
use glint_core::{host, time};
use glint_ui::view::{Button, Panel, Text, View};

fn format_wall(t: SystemTime) -> String {
    let secs = t
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

#[allow(non_snake_case)]
pub fn ClockPanel() -> View {
    let clicks = remember(|| signal(0i32));
    let now_text = remember(|| signal(format_wall(time::wall())));

    // Registered once per mount; the returned handle is cancelled exactly
    // once, when this panel leaves the composition.
    use_interval(Duration::from_millis(1000), {
        let now_text = (*now_text).clone();
        move || now_text.set(format_wall(time::wall()))
    });

    let count = clicks.get();

    // Unconditional: one title write per commit, including commits caused
    // by the timer tick.
    render_effect(move || host::set_title(&format!("You clicked {count} times")));

    // Gated on the click count: fires on mount and on each distinct change.
    keyed_effect(count, move || {
        log::info!("click count changed to {count}");
        Dispose::none()
    });

    Panel(
        "Clock & effects",
        vec![
            Text(now_text.with(|t| format!("It is {t}"))).strong(),
            Text(format!("You clicked {count} times")),
            Button("Click me", 'c', {
                let clicks = (*clicks).clone();
                move || clicks.update(|c| *c += 1)
            }),
        ],
    )
}
