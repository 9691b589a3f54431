use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use iqnav_types::{Effect, Msg, Route};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::components::{Component, OverflowNavBarComponent, PageComponent, QuizComponent};
use super::theme::theme_helpers as th;
use crate::app::App;

/// Height of the navigation bar including its border.
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Root view: navigation bar on top, the current route's page below and a
/// hint bar on the last row.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: OverflowNavBarComponent,
    page_view: PageComponent,
    quiz_view: QuizComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn content_view(&mut self, route: Route) -> &mut dyn Component {
        match route {
            Route::Quiz => &mut self.quiz_view,
            _ => &mut self.page_view,
        }
    }

    /// Routes an application message to `App` and the active page.
    ///
    /// Returns `true` when a redraw is needed.
    pub fn handle_message(&mut self, app: &mut App, msg: &Msg) -> bool {
        let app_changed = app.update(msg);
        let route = app.route;
        let view_changed = self.content_view(route).handle_message(app, msg);
        app_changed || view_changed
    }

    /// Navigation keys go to the bar, `q` quits, everything else goes to the page.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        app.status = None;
        match key.code {
            KeyCode::Char('q') if !app.nav_bar.is_menu_open() => vec![Effect::Quit],
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => {
                self.nav_bar_view.handle_key_events(app, key)
            }
            _ => {
                let route = app.route;
                self.content_view(route).handle_key_events(app, key)
            }
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.nav_bar_view.handle_mouse_events(app, mouse)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let [nav_area, content_area, hint_area] =
            Layout::vertical([Constraint::Length(NAV_BAR_HEIGHT), Constraint::Min(0), Constraint::Length(1)]).areas(area);

        frame.render_widget(Block::default().style(th::app_style(&*app.ctx.theme)), area);
        self.nav_bar_view.render(frame, nav_area, app);
        let route = app.route;
        self.content_view(route).render(frame, content_area, app);
        self.render_hints(frame, hint_area, app);
        // Drawn last so the popup covers the page.
        self.nav_bar_view.render_menu(frame, app);
    }

    fn render_hints(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let line = if let Some(status) = app.status.as_deref() {
            Line::from(Span::styled(status.to_string(), theme.status_warning()))
        } else {
            let mut spans = self.nav_bar_view.get_hint_spans(app);
            let route = app.route;
            spans.extend(self.content_view(route).get_hint_spans(app));
            spans.extend(th::build_hint_spans(theme, &[(" q", " Quit")]));
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(line).style(th::panel_style(theme)), area);
    }
}
