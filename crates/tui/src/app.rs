//! Application state for the iqnav TUI.
//!
//! `App` owns the navigation bar state, the host-side layout observer that
//! feeds it widths, the current route and the quiz session. Components read
//! and mutate it; the runtime applies returned effects via `cmd::run_effects`.

use iqnav_types::{Msg, Route};
use iqnav_util::NavConfig;
use tracing::debug;

use crate::actions::ActionRegistry;
use crate::session::QuizSession;
use crate::ui::components::nav_bar::OverflowNavState;
use crate::ui::observer::{LayoutObserver, UnavailableObserver};
use crate::ui::theme::Theme;

/// Observation target id of the navigation bar's inner row.
pub const NAV_BAR_TARGET: &str = "nav.bar";

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub config: NavConfig,
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub nav_bar: OverflowNavState,
    /// Host side of width observation; the render pass reports into it.
    pub layout: LayoutObserver,
    pub route: Route,
    pub session: QuizSession,
    pub actions: ActionRegistry,
    /// Transient status line shown in the hint bar.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: NavConfig, theme: Box<dyn Theme>) -> Self {
        let layout = LayoutObserver::new();
        let mut nav_bar = OverflowNavState::new(
            config.nav_items(),
            u32::from(config.reserved_width),
            u32::from(config.spacing),
        );
        if config.observe_layout {
            nav_bar.mount(&layout, NAV_BAR_TARGET);
        } else {
            nav_bar.mount(&UnavailableObserver, NAV_BAR_TARGET);
        }
        nav_bar.set_route(Route::Home);

        let session = QuizSession::from_minutes(config.quiz_minutes, config.focus_loss_limit);
        Self {
            ctx: SharedCtx { theme, config },
            nav_bar,
            layout,
            route: Route::Home,
            session,
            actions: ActionRegistry::with_defaults(),
            status: None,
            should_quit: false,
        }
    }

    /// Switches the main view and highlights the matching nav entry.
    pub fn switch_to(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "Switching route");
        self.route = route;
        self.nav_bar.set_route(route);
        if route == Route::Quiz {
            self.session.start();
        }
    }

    /// Applies an application message. Returns `true` when a redraw is needed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        match msg {
            Msg::Tick => self.session.tick(),
            // Widths reach the nav bar through the observer on the next render.
            Msg::Resize(..) => true,
            Msg::FocusLost => {
                if self.session.record_focus_loss() {
                    self.status = Some("Quiz session flagged: focus left the terminal too often".to_string());
                    return true;
                }
                self.session.is_running()
            }
            Msg::FocusGained => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    pub(crate) fn test_app_with(config: NavConfig) -> App {
        App::new(config, Box::new(DraculaTheme::new()))
    }

    pub(crate) fn test_app() -> App {
        test_app_with(NavConfig::default())
    }

    #[test]
    fn starts_on_home_with_observer_attached() {
        let app = test_app();
        assert_eq!(app.route, Route::Home);
        assert!(app.nav_bar.is_observing());
        assert_eq!(app.layout.subscriber_count(NAV_BAR_TARGET), 1);
        assert_eq!(app.nav_bar.selected, Some(0));
    }

    #[test]
    fn disabled_observation_fails_open() {
        let app = test_app_with(NavConfig {
            observe_layout: false,
            ..NavConfig::default()
        });
        assert!(app.nav_bar.is_observation_unavailable());
        assert_eq!(app.nav_bar.visible_count(), app.nav_bar.entry_count());
        assert!(!app.nav_bar.has_overflow());
    }

    #[test]
    fn focus_loss_during_quiz_sets_status_when_flagged() {
        let mut app = test_app_with(NavConfig {
            focus_loss_limit: 1,
            ..NavConfig::default()
        });
        assert!(!app.update(&Msg::FocusLost), "no session running yet");

        app.switch_to(Route::Quiz);
        assert!(app.update(&Msg::FocusLost));
        assert!(app.session.is_flagged());
        assert!(app.status.is_some());
    }
}
