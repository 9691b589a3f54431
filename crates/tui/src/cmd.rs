//! Effect execution.
//!
//! Components return `Effect`s; the runtime hands them to [`run_effects`],
//! which applies them to `App` in order. Effects produced by callbacks are
//! queued behind the current batch. A failing callback stops the batch and
//! the error is returned to the caller.

use std::collections::VecDeque;

use iqnav_types::{Effect, Route};
use tracing::{debug, error, warn};

use crate::actions::ActionError;
use crate::app::App;

/// Custom element rendering the quiz clock.
pub const QUIZ_TIMER_ELEMENT: &str = "quiz-timer";

pub fn run_effects(app: &mut App, effects: Vec<Effect>) -> Result<(), ActionError> {
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        debug!(?effect, "Applying effect");
        match effect {
            Effect::SwitchTo(route) => app.switch_to(route),
            Effect::Invoke(name) => {
                let Some(handler) = app.actions.get(&name) else {
                    error!(action = %name, "Unknown navigation action");
                    return Err(ActionError::Unknown(name));
                };
                match handler(app) {
                    Ok(follow_up) => queue.extend(follow_up),
                    Err(action_error) => {
                        error!(action = %name, error = %action_error, "Navigation action failed");
                        return Err(action_error);
                    }
                }
            }
            Effect::ActivateElement(name) if name == QUIZ_TIMER_ELEMENT => app.switch_to(Route::Quiz),
            Effect::ActivateElement(name) => warn!(element = %name, "No handler for custom element"),
            Effect::Quit => app.should_quit = true,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionRegistry;
    use crate::app::tests::test_app;

    #[test]
    fn switch_to_updates_route_and_selection() {
        let mut app = test_app();
        run_effects(&mut app, vec![Effect::SwitchTo(Route::Leaderboard)]).expect("effects");
        assert_eq!(app.route, Route::Leaderboard);
        assert_eq!(
            app.nav_bar.selected.and_then(|position| app.nav_bar.entry(position)).map(|item| item.label.as_str()),
            Some("Leaderboard")
        );
    }

    #[test]
    fn sign_out_quits() {
        let mut app = test_app();
        run_effects(&mut app, vec![Effect::Invoke("sign-out".into())]).expect("effects");
        assert!(app.should_quit);
    }

    #[test]
    fn restart_quiz_queues_navigation() {
        let mut app = test_app();
        run_effects(&mut app, vec![Effect::Invoke("restart-quiz".into())]).expect("effects");
        assert_eq!(app.route, Route::Quiz);
        assert!(app.session.is_running());
    }

    #[test]
    fn timer_element_opens_quiz() {
        let mut app = test_app();
        run_effects(&mut app, vec![Effect::ActivateElement(QUIZ_TIMER_ELEMENT.into())]).expect("effects");
        assert_eq!(app.route, Route::Quiz);
    }

    #[test]
    fn unknown_action_is_returned_not_swallowed() {
        let mut app = test_app();
        let result = run_effects(
            &mut app,
            vec![Effect::Invoke("missing".into()), Effect::SwitchTo(Route::Dashboard)],
        );
        assert!(matches!(result, Err(ActionError::Unknown(name)) if name == "missing"));
        assert_eq!(app.route, Route::Home, "remaining effects are not applied");
    }

    #[test]
    fn failing_action_propagates() {
        fn broken(_app: &mut App) -> Result<Vec<Effect>, ActionError> {
            Err(ActionError::Unknown("backend".into()))
        }
        let mut app = test_app();
        let mut actions = ActionRegistry::with_defaults();
        actions.register("broken", broken);
        app.actions = actions;

        let result = run_effects(&mut app, vec![Effect::Invoke("broken".into())]);
        assert!(matches!(result, Err(ActionError::Unknown(name)) if name == "backend"));
    }
}
