use std::rc::Rc;

use crate::theme::Palette;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emphasis {
    #[default]
    Body,
    Strong,
    Faint,
}

#[derive(Clone)]
pub enum ViewKind {
    Column,
    /// Subtree painted with an explicit palette, resolved at composition
    /// time while the theme provider is in scope.
    Themed {
        palette: Palette,
    },
    Panel {
        title: String,
    },
    Text {
        text: String,
        emphasis: Emphasis,
    },
    Button {
        label: String,
        hotkey: char,
        on_click: Callback,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Themed { palette } => {
                f.debug_struct("Themed").field("palette", palette).finish()
            }
            ViewKind::Panel { title } => f.debug_struct("Panel").field("title", title).finish(),
            ViewKind::Text { text, emphasis } => f
                .debug_struct("Text")
                .field("text", text)
                .field("emphasis", emphasis)
                .finish(),
            ViewKind::Button { label, hotkey, .. } => f
                .debug_struct("Button")
                .field("label", label)
                .field("hotkey", hotkey)
                .field("on_click", &"<callback>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            children: vec![],
        }
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn strong(mut self) -> Self {
        if let ViewKind::Text { emphasis, .. } = &mut self.kind {
            *emphasis = Emphasis::Strong;
        }
        self
    }

    pub fn faint(mut self) -> Self {
        if let ViewKind::Text { emphasis, .. } = &mut self.kind {
            *emphasis = Emphasis::Faint;
        }
        self
    }
}

pub fn Column() -> View {
    View::new(ViewKind::Column)
}

pub fn Themed(palette: Palette, children: Vec<View>) -> View {
    View::new(ViewKind::Themed { palette }).with_children(children)
}

pub fn Panel(title: impl Into<String>, children: Vec<View>) -> View {
    View::new(ViewKind::Panel {
        title: title.into(),
    })
    .with_children(children)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        emphasis: Emphasis::Body,
    })
}

pub fn Button(label: impl Into<String>, hotkey: char, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::Button {
        label: label.into(),
        hotkey,
        on_click: Rc::new(on_click),
    })
}
