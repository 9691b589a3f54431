use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Base style painted under the whole screen.
pub fn app_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Style for panel-like containers.
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style of a navigation entry.
///
/// Selected entries (the active route) are bold and underlined; focused
/// entries use the selection background.
pub fn nav_entry_style<T: Theme + ?Sized>(theme: &T, focused: bool, selected: bool) -> Style {
    let mut style = Style::default().fg(theme.roles().accent_secondary);
    if selected {
        style = style.fg(theme.roles().accent_primary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if focused {
        style = style.bg(theme.roles().selection_bg);
    }
    style
}

/// Style of the "More" trigger; highlighted while its menu is open.
pub fn trigger_style<T: Theme + ?Sized>(theme: &T, focused: bool, open: bool) -> Style {
    let style = theme.text_secondary_style().add_modifier(Modifier::BOLD);
    if focused || open {
        style.bg(theme.roles().selection_bg).fg(theme.roles().focus)
    } else {
        style
    }
}

/// Block for floating menus drawn above other content.
pub fn popup_block<'a, T: Theme + ?Sized>(theme: &T) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(true))
        .style(Style::default().bg(theme.roles().popup_bg).fg(theme.roles().text))
}

/// Builds `key description` hint pairs for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
