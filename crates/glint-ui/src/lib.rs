#![allow(non_snake_case)]
//! Widgets, theming, and line painting for the terminal demo.

pub mod color;
pub mod paint;
pub mod tests;
pub mod theme;
pub mod view;

pub use color::*;
pub use paint::*;
pub use theme::*;
pub use view::*;
