pub mod clock;
pub mod counter;
pub mod theme;

pub use clock::ClockPanel;
pub use counter::CounterPanel;
pub use theme::ThemePanel;
