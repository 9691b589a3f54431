use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use iqnav_types::{Effect, NavAction, NavItem};
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Borders, Clear, Paragraph},
};

use super::NavFocus;
use crate::app::{App, NAV_BAR_TARGET};
use crate::cmd::QUIZ_TIMER_ELEMENT;
use crate::session::QuizSession;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{contains, display_width, find_target_index_by_mouse_position};

/// Label of the overflow trigger.
pub const TRIGGER_LABEL: &str = "More ▾";

/// Horizontal padding added on each side of an entry label.
const ENTRY_PADDING: u16 = 1;

/// Text shown for an entry; custom elements render live content.
fn entry_text(item: &NavItem, session: &QuizSession) -> String {
    match &item.action {
        NavAction::Element(name) if name == QUIZ_TIMER_ELEMENT => {
            format!("{} {}", item.label, session.format_remaining())
        }
        _ => item.label.clone(),
    }
}

/// Natural single-line width of an entry, padding included.
fn measure_text(text: &str) -> u32 {
    match display_width(text) {
        0 => 0,
        width => u32::from(width) + u32::from(ENTRY_PADDING * 2),
    }
}

fn to_cells(width: u32) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Horizontal navigation bar that collapses trailing entries into a menu.
///
/// Rendering happens in two steps: [`Component::render`] draws the bar and
/// records the partition, [`OverflowNavBarComponent::render_menu`] draws the
/// popup and must run after the content below the bar so it stays on top.
#[derive(Debug, Default)]
pub struct OverflowNavBarComponent;

impl OverflowNavBarComponent {
    fn emit(effects: &mut Vec<Effect>, action: Option<NavAction>) {
        if let Some(action) = action {
            effects.push(action.to_effect());
        }
    }

    /// Draws the overflow menu under the trigger when it is open.
    pub fn render_menu(&self, frame: &mut Frame, app: &mut App) {
        let theme = &*app.ctx.theme;
        let session = &app.session;
        let state = &mut app.nav_bar;
        state.menu_item_areas.clear();
        state.menu_area = None;
        if !state.is_menu_open() {
            return;
        }

        let labels: Vec<String> = state.overflow_items().map(|item| entry_text(item, session)).collect();
        let bounds = frame.area();
        let anchor = state.trigger_area.unwrap_or(state.last_area);
        let content_width = labels.iter().map(|label| display_width(label)).max().unwrap_or_default();
        let width = content_width.saturating_add(4).max(anchor.width).min(bounds.width);
        let top = state.last_area.bottom();
        let available = bounds.bottom().saturating_sub(top);
        let height = u16::try_from(labels.len() + 2).unwrap_or(u16::MAX).min(available);
        if height < 3 || width < 3 {
            return;
        }
        let x = anchor.right().saturating_sub(width).max(bounds.x);
        let popup = Rect::new(x, top, width, height);

        frame.render_widget(Clear, popup);
        frame.render_widget(th::popup_block(theme), popup);

        let rows = usize::from(height - 2);
        let offset = state.menu.cursor.saturating_sub(rows - 1);
        for (row, (position, label)) in labels.iter().enumerate().skip(offset).take(rows).enumerate() {
            let area = Rect::new(popup.x + 1, popup.y + 1 + row as u16, popup.width - 2, 1);
            let style = if position == state.menu.cursor {
                theme.selection_style()
            } else {
                theme.text_primary_style()
            };
            frame.render_widget(Paragraph::new(format!(" {label}")).style(style), area);
            state.menu_item_areas.push((position, area));
        }
        state.menu_area = Some(popup);
    }
}

impl Component for OverflowNavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.nav_bar;
        let mut effects = vec![];

        if state.is_menu_open() {
            match key.code {
                KeyCode::Up => state.move_menu_cursor(false),
                KeyCode::Down => state.move_menu_cursor(true),
                KeyCode::Enter => Self::emit(&mut effects, state.select_menu_cursor()),
                KeyCode::Esc | KeyCode::Char('m') => state.close_menu(),
                _ => {}
            }
            return effects;
        }

        match key.code {
            KeyCode::Left => state.cycle_focus(false),
            KeyCode::Right => state.cycle_focus(true),
            KeyCode::Enter => match state.focus {
                Some(NavFocus::Item(position)) => Self::emit(&mut effects, state.activate_inline(position)),
                Some(NavFocus::Trigger) => state.open_menu(),
                None => {}
            },
            KeyCode::Down if state.focus == Some(NavFocus::Trigger) => state.open_menu(),
            KeyCode::Char('m') if state.has_overflow() => {
                state.focus = Some(NavFocus::Trigger);
                state.open_menu();
            }
            _ => {}
        }
        effects
    }

    /// Clicks select inline entries, toggle the menu from the trigger, pick
    /// menu rows, and close the menu when landing anywhere else.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = vec![];
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return effects;
        }
        let (column, row) = (mouse.column, mouse.row);
        let state = &mut app.nav_bar;

        if state.is_menu_open() {
            if let Some(position) = state
                .menu_item_areas
                .iter()
                .find(|(_, area)| contains(*area, column, row))
                .map(|(position, _)| *position)
            {
                Self::emit(&mut effects, state.select_overflow(position));
                return effects;
            }
            if state.menu_area.is_some_and(|area| contains(area, column, row)) {
                return effects;
            }
        }
        if state.trigger_area.is_some_and(|area| contains(area, column, row)) {
            state.focus = Some(NavFocus::Trigger);
            state.toggle_menu();
            return effects;
        }
        state.close_menu();

        if let Some(position) = find_target_index_by_mouse_position(&state.per_item_areas, column, row) {
            state.focus = Some(NavFocus::Item(position));
            Self::emit(&mut effects, state.activate_inline(position));
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.nav_bar.focus.is_some() || app.nav_bar.is_menu_open();
        let block = th::block(theme, None, focused).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Observer callbacks fire here; relayout picks up the new width.
        app.layout.report(NAV_BAR_TARGET, u32::from(inner.width));
        let session = &app.session;
        let state = &mut app.nav_bar;
        state.relayout(&|item: &NavItem| measure_text(&entry_text(item, session)));

        state.last_area = area;
        state.per_item_areas.clear();
        state.trigger_area = None;
        if inner.height == 0 {
            return;
        }

        let spacing = to_cells(state.spacing());
        let mut x = inner.x;
        let entries: Vec<(String, u16)> = state
            .visible_items()
            .enumerate()
            .map(|(position, item)| (entry_text(item, session), to_cells(state.width_of(position))))
            .collect();
        for (position, (text, width)) in entries.into_iter().enumerate() {
            let width = width.min(inner.right().saturating_sub(x));
            let entry_area = Rect::new(x, inner.y, width, 1);
            let style = th::nav_entry_style(
                theme,
                state.focus == Some(NavFocus::Item(position)),
                state.selected == Some(position),
            );
            frame.render_widget(Paragraph::new(text).centered().style(style), entry_area);
            state.per_item_areas.push(entry_area);
            x = x.saturating_add(width).saturating_add(spacing);
        }

        if state.has_overflow() {
            let width = to_cells(state.reserved_width()).min(inner.width);
            let trigger_area = Rect::new(inner.right() - width, inner.y, width, 1);
            let style = th::trigger_style(theme, state.focus == Some(NavFocus::Trigger), state.is_menu_open());
            frame.render_widget(Paragraph::new(TRIGGER_LABEL).centered().style(style), trigger_area);
            state.trigger_area = Some(trigger_area);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        if app.nav_bar.is_menu_open() {
            th::build_hint_spans(theme, &[(" ↑/↓", " Move"), (" Enter", " Open"), (" Esc", " Close")])
        } else if app.nav_bar.has_overflow() {
            th::build_hint_spans(theme, &[(" ←/→", " Focus"), (" Enter", " Open"), (" m", " More")])
        } else {
            th::build_hint_spans(theme, &[(" ←/→", " Focus"), (" Enter", " Open")])
        }
    }
}
