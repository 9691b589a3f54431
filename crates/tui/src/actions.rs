//! Named callbacks reachable from `NavAction::Invoke` entries.

use std::collections::HashMap;

use iqnav_types::{Effect, Route};
use thiserror::Error;

use crate::app::App;

/// Callback signature; returned effects are queued after the callback runs.
pub type ActionHandler = fn(&mut App) -> Result<Vec<Effect>, ActionError>;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("no action registered under '{0}'")]
    Unknown(String),
}

/// Registry of callbacks keyed by name.
#[derive(Clone)]
pub struct ActionRegistry {
    handlers: HashMap<String, ActionHandler>,
}

impl ActionRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with the built-in product callbacks.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("sign-out", sign_out);
        registry.register("restart-quiz", restart_quiz);
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, handler: ActionHandler) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn get(&self, name: &str) -> Option<ActionHandler> {
        self.handlers.get(name).copied()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("ActionRegistry").field("handlers", &names).finish()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn sign_out(_app: &mut App) -> Result<Vec<Effect>, ActionError> {
    Ok(vec![Effect::Quit])
}

fn restart_quiz(app: &mut App) -> Result<Vec<Effect>, ActionError> {
    app.session.restart();
    Ok(vec![Effect::SwitchTo(Route::Quiz)])
}
