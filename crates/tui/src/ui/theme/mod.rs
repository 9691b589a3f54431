//! Theme styling for the TUI.
//!
//! Picks a palette from terminal capabilities and exposes semantic roles plus
//! helper builders so components never hard-code colors.

use std::env;

use tracing::debug;

pub mod palettes;
pub mod roles;
pub mod theme_helpers;

pub use palettes::{Ansi256Theme, DraculaTheme};
pub use roles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on environment variables and terminal capabilities.
pub fn load() -> Box<dyn Theme> {
    match detect_color_capability() {
        ColorCapability::Truecolor => Box::new(DraculaTheme::new()),
        ColorCapability::Ansi256 => {
            debug!("ANSI-only terminal detected; using indexed palette.");
            Box::new(Ansi256Theme::new())
        }
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
