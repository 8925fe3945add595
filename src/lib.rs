//! Glass card component kit for Dioxus: the `Card` family, style tokens,
//! and the small routed demo app that exercises them.

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod styles;
pub mod utils;
