//! Flattens a `View` tree into a styled line scene plus hotkey bindings.

use smallvec::SmallVec;

use crate::color::Color;
use crate::theme::Palette;
use crate::view::{Callback, Emphasis, View, ViewKind};

#[derive(Clone, Debug)]
pub struct Line {
    pub text: String,
    pub fg: Color,
    pub bold: bool,
}

#[derive(Clone)]
pub struct Binding {
    pub hotkey: char,
    pub on_click: Callback,
}

pub struct Scene {
    pub background: Color,
    pub lines: Vec<Line>,
    pub bindings: SmallVec<[Binding; 8]>,
}

impl Scene {
    /// Invokes the button bound to `hotkey`, if any. Returns whether a
    /// binding matched.
    pub fn activate(&self, hotkey: char) -> bool {
        match self.bindings.iter().find(|b| b.hotkey == hotkey) {
            Some(binding) => {
                (binding.on_click)();
                true
            }
            None => false,
        }
    }

    /// All painted text joined with newlines; handy for assertions.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

/// Paints `root` into a scene. A `Themed` node switches the palette for its
/// subtree; outside any `Themed` node the dark palette applies.
pub fn paint(root: &View) -> Scene {
    let palette = Palette::dark();
    let mut scene = Scene {
        background: palette.background,
        lines: Vec::new(),
        bindings: SmallVec::new(),
    };
    walk(root, &palette, 0, &mut scene);
    scene
}

fn walk(view: &View, palette: &Palette, indent: usize, scene: &mut Scene) {
    let pad = "  ".repeat(indent);
    match &view.kind {
        ViewKind::Column => {
            for child in &view.children {
                walk(child, palette, indent, scene);
            }
        }
        ViewKind::Themed { palette: themed } => {
            scene.background = themed.background;
            for child in &view.children {
                walk(child, themed, indent, scene);
            }
        }
        ViewKind::Panel { title } => {
            scene.lines.push(Line {
                text: format!("{pad}── {title} ──"),
                fg: palette.accent,
                bold: true,
            });
            for child in &view.children {
                walk(child, palette, indent + 1, scene);
            }
            scene.lines.push(Line {
                text: String::new(),
                fg: palette.on_surface,
                bold: false,
            });
        }
        ViewKind::Text { text, emphasis } => {
            let (fg, bold) = match emphasis {
                Emphasis::Body => (palette.on_surface, false),
                Emphasis::Strong => (palette.on_surface, true),
                Emphasis::Faint => (palette.faint, false),
            };
            scene.lines.push(Line {
                text: format!("{pad}{text}"),
                fg,
                bold,
            });
        }
        ViewKind::Button {
            label,
            hotkey,
            on_click,
        } => {
            scene.lines.push(Line {
                text: format!("{pad}[{hotkey}] {label}"),
                fg: palette.accent,
                bold: false,
            });
            if scene.bindings.iter().any(|b| b.hotkey == *hotkey) {
                log::warn!("paint: duplicate hotkey '{hotkey}' for button '{label}'");
            }
            scene.bindings.push(Binding {
                hotkey: *hotkey,
                on_click: on_click.clone(),
            });
        }
    }
}
