//! Terminal UI: components, theme, width observation and the runtime loop.

pub mod components;
pub mod main_component;
pub mod observer;
pub mod runtime;
pub mod theme;
pub mod utils;
