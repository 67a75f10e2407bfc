use glint_ui::theme::use_theme_state;
use glint_ui::view::{Button, Panel, Text, View};

#[allow(non_snake_case)]
pub fn ThemePanel() -> View {
    let theme = use_theme_state();
    let mode = if theme.is_dark() { "dark" } else { "light" };

    Panel(
        "Theme",
        vec![
            Text(format!("Current mode: {mode}")),
            Button("Toggle theme", 't', move || theme.toggle()),
            Text("Press q to quit").faint(),
        ],
    )
}
