// State management module.
// Screens, list providers, selection routing, and the window stack.

#![allow(dead_code)]

pub mod forecast;
pub mod provider;
pub mod router;
pub mod screen;
pub mod window_stack;

pub use provider::{MenuIndex, Row};
pub use screen::Screen;
pub use window_stack::{BreadcrumbNode, LayerSettings, MenuLayer, Window, WindowStack};
