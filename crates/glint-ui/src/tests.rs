#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::color::Color;
    use crate::paint::paint;
    use crate::theme::{Palette, ThemeState, try_theme_state, use_theme_state, with_theme_state};
    use crate::view::{Button, Column, Panel, Text, Themed};

    #[test]
    fn color_from_hex() {
        assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
        assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
        assert_eq!(Color::from_hex("bogus"), Color(0, 0, 0, 255));
    }

    #[test]
    fn color_from_hex_tolerates_non_hex_bytes() {
        // Six bytes but not six hex digits; must not slice mid-character.
        assert_eq!(Color::from_hex("#ééé"), Color(0, 0, 0, 255));
        assert_eq!(Color::from_hex("#12345é"), Color(0, 0, 0, 255));
    }

    #[test]
    fn paint_flattens_panels_and_collects_bindings() {
        let clicked = Rc::new(Cell::new(false));
        let view = Themed(
            Palette::light(),
            vec![Panel(
                "Demo",
                vec![
                    Text("hello"),
                    Button("Press", 'p', {
                        let clicked = clicked.clone();
                        move || clicked.set(true)
                    }),
                ],
            )],
        );

        let scene = paint(&view);
        let text = scene.text();
        assert!(text.contains("── Demo ──"));
        assert!(text.contains("hello"));
        assert!(text.contains("[p] Press"));
        assert_eq!(scene.background, Palette::light().background);

        assert!(scene.activate('p'));
        assert!(clicked.get());
        assert!(!scene.activate('z'));
    }

    #[test]
    fn paint_defaults_to_dark_palette() {
        let scene = paint(&Column().with_children(vec![Text("x")]));
        assert_eq!(scene.background, Palette::dark().background);
    }

    #[test]
    fn theme_toggle_twice_is_identity() {
        let theme = ThemeState::new(true);
        assert!(theme.is_dark());
        assert_eq!(theme.palette(), Palette::dark());

        theme.toggle();
        assert!(!theme.is_dark());
        assert_eq!(theme.palette(), Palette::light());

        theme.toggle();
        assert!(theme.is_dark());
    }

    #[test]
    fn theme_lookup_fails_fast_outside_provider() {
        assert!(try_theme_state().is_err());

        let state = ThemeState::new(false);
        let seen = with_theme_state(state, || use_theme_state().is_dark());
        assert!(!seen);

        assert!(try_theme_state().is_err());
    }

    #[test]
    #[should_panic(expected = "no value of type")]
    fn use_theme_state_panics_outside_provider() {
        let _ = use_theme_state();
    }
}
