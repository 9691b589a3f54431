use iqnav_types::Route;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// One-line description of what a route is for.
pub fn route_summary(route: Route) -> &'static str {
    match route {
        Route::Home => "Take the adaptive IQ test, answer a short survey and compare your score.",
        Route::Quiz => "Answer each question before the clock runs out.",
        Route::Survey => "Tell us about your background so results can be compared fairly.",
        Route::Leaderboard => "Top scores across all test takers.",
        Route::Dashboard => "Your attempts, scores and points balance.",
        Route::AdminQuestions => "Create, edit and retire test questions.",
        Route::AdminSurveys => "Maintain survey questionnaires and their answer options.",
        Route::AdminUsers => "Look up users and adjust their points.",
        Route::AdminPricing => "Configure pricing rules for paid reports.",
    }
}

/// Static page for every route except the quiz.
#[derive(Debug, Default)]
pub struct PageComponent;

impl Component for PageComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let route = app.route;
        let block = th::block(theme, Some(route.title()), false);

        let mut lines = vec![Line::from(Span::styled(route_summary(route), theme.text_primary_style()))];
        if route.is_admin() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Back-office", theme.text_muted_style())));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), rect);
    }
}
