#![allow(non_snake_case)]
//! The demo application: three panels — a clock with effects, a
//! custom-hook counter, and a theme toggle — composed under one theme
//! provider.

pub mod app;
pub mod hooks;
pub mod panels;

pub use app::App;
