//! Runners: an interactive terminal loop and a deterministic headless
//! harness for tests.

pub mod headless;
pub mod terminal;

pub use headless::Headless;
pub use terminal::run_terminal_app;
