//! Built-in palettes: Dracula for truecolor terminals and an indexed
//! approximation for 256-color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36);
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A);
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2);
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4);
pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD);
pub const GREEN: Color = Color::Rgb(0x50, 0xFA, 0x7B);
pub const ORANGE: Color = Color::Rgb(0xFF, 0xB8, 0x6C);
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6);
pub const RED: Color = Color::Rgb(0xFF, 0x55, 0x55);
pub const POPUP_BG: Color = Color::Rgb(0x1D, 0x1F, 0x27);

/// Dracula theme tuned for dark truecolor terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: BG,
                border: CURRENT_LINE,

                text: FOREGROUND,
                text_secondary: COMMENT,
                text_muted: COMMENT,

                // Pink = interactive, cyan = focus
                accent_primary: PINK,
                accent_secondary: CYAN,

                success: GREEN,
                warning: ORANGE,
                error: RED,

                selection_bg: CURRENT_LINE,
                selection_fg: FOREGROUND,
                focus: CYAN,
                popup_bg: POPUP_BG,
            },
        }
    }
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Indexed-color approximation of Dracula.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(236),
                surface: Color::Indexed(236),
                border: Color::Indexed(239),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(247),

                accent_primary: Color::Indexed(212),
                accent_secondary: Color::Indexed(117),

                success: Color::Indexed(84),
                warning: Color::Indexed(215),
                error: Color::Indexed(203),

                selection_bg: Color::Indexed(239),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(117),
                popup_bg: Color::Indexed(232),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
