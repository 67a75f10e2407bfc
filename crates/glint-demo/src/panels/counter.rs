use glint_ui::view::{Button, Panel, Text, View};

use crate::hooks::use_counter;

#[allow(non_snake_case)]
pub fn CounterPanel() -> View {
    let counter = use_counter(0);

    Panel(
        "Counter hook",
        vec![
            Text(format!("Value: {}", counter.get())).strong(),
            Button("Increment", '+', {
                let counter = counter.clone();
                move || counter.increment()
            }),
            Button("Decrement", '-', {
                let counter = counter.clone();
                move || counter.decrement()
            }),
            Button("Reset", 'r', {
                let counter = counter.clone();
                move || counter.reset()
            }),
        ],
    )
}
