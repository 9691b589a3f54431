use crossterm::event::{KeyCode, KeyEvent};
use iqnav_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::pages::page_component::route_summary;
use crate::ui::theme::theme_helpers as th;

/// Quiz view: countdown, focus-loss count and integrity flag.
#[derive(Debug, Default)]
pub struct QuizComponent;

impl Component for QuizComponent {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> bool {
        matches!(msg, Msg::Tick) && app.session.is_started()
    }

    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('r') => vec![Effect::Invoke("restart-quiz".to_string())],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let session = &app.session;
        let block = th::block(theme, Some(app.route.title()), true);

        let clock_style = if session.is_expired() {
            theme.status_error()
        } else {
            theme.accent_emphasis_style()
        };
        let mut lines = vec![
            Line::from(Span::styled(route_summary(app.route), theme.text_primary_style())),
            Line::default(),
            Line::from(vec![
                Span::styled("Time remaining  ", theme.text_secondary_style()),
                Span::styled(session.format_remaining(), clock_style),
            ]),
            Line::from(vec![
                Span::styled("Focus losses    ", theme.text_secondary_style()),
                Span::styled(
                    format!("{} / {}", session.focus_losses(), app.ctx.config.focus_loss_limit),
                    theme.text_primary_style(),
                ),
            ]),
        ];
        if session.is_expired() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Time is up.", theme.status_error())));
        }
        if session.is_flagged() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "This attempt has been flagged for leaving the test window.",
                theme.status_warning(),
            )));
        } else if session.is_running() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Session in progress", theme.status_success())));
        }
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" r", " Restart quiz")])
    }
}
