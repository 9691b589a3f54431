//! Shared types for the iqnav terminal client.
//!
//! Routes, navigation items and the effect/message vocabulary exchanged
//! between UI components and the runtime live here so that configuration
//! loading and the TUI agree on one representation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level screens of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Quiz,
    Survey,
    Leaderboard,
    Dashboard,
    AdminQuestions,
    AdminSurveys,
    AdminUsers,
    AdminPricing,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::Quiz,
        Route::Survey,
        Route::Leaderboard,
        Route::Dashboard,
        Route::AdminQuestions,
        Route::AdminSurveys,
        Route::AdminUsers,
        Route::AdminPricing,
    ];

    /// Kebab-case identifier used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Quiz => "quiz",
            Self::Survey => "survey",
            Self::Leaderboard => "leaderboard",
            Self::Dashboard => "dashboard",
            Self::AdminQuestions => "admin-questions",
            Self::AdminSurveys => "admin-surveys",
            Self::AdminUsers => "admin-users",
            Self::AdminPricing => "admin-pricing",
        }
    }

    /// Human-friendly title shown in navigation and page headers.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Quiz => "Questions",
            Self::Survey => "Survey",
            Self::Leaderboard => "Leaderboard",
            Self::Dashboard => "Dashboard",
            Self::AdminQuestions => "Manage Questions",
            Self::AdminSurveys => "Manage Surveys",
            Self::AdminUsers => "Users & Points",
            Self::AdminPricing => "Pricing Rules",
        }
    }

    /// Whether the route belongs to the administrative back-office.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminQuestions | Self::AdminSurveys | Self::AdminUsers | Self::AdminPricing
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == needle)
            .ok_or(ParseRouteError(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route '{0}'")]
pub struct ParseRouteError(pub String);

/// What happens when a navigation entry is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "target")]
pub enum NavAction {
    /// Switch to a route.
    Navigate(Route),
    /// Run a named callback registered with the host.
    Invoke(String),
    /// Render a host-provided custom element keyed by name.
    Element(String),
}

impl NavAction {
    /// Maps the action to the effect the runtime executes.
    pub fn to_effect(&self) -> Effect {
        match self {
            Self::Navigate(route) => Effect::SwitchTo(*route),
            Self::Invoke(name) => Effect::Invoke(name.clone()),
            Self::Element(name) => Effect::ActivateElement(name.clone()),
        }
    }
}

/// A single entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Text shown inline and in the overflow menu.
    pub label: String,
    pub action: NavAction,
}

impl NavItem {
    pub fn new(label: impl Into<String>, action: NavAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// Shorthand for a route link labelled with the route title.
    pub fn route(route: Route) -> Self {
        Self::new(route.title(), NavAction::Navigate(route))
    }

    /// Entries with a blank label cannot be rendered and are skipped.
    pub fn is_renderable(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Switch the main view to a route
    SwitchTo(Route),
    /// Run a named callback
    Invoke(String),
    /// Activate a custom element
    ActivateElement(String),
    /// Leave the application
    Quit,
}

/// Application-wide messages routed to components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Periodic tick driving timers
    Tick,
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// The terminal window lost input focus
    FocusLost,
    /// The terminal window regained input focus
    FocusGained,
}
