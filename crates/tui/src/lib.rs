//! # iqnav TUI
//!
//! Terminal front end for the IQ test and survey product. The top of the
//! screen is an adaptive navigation bar: entries are laid out inline while
//! they fit the bar's width, and the rest move into a "More" menu. Widths are
//! observed per render, so the split follows terminal resizes without
//! polling.
//!
//! ## Architecture
//!
//! - `ui::components::nav_bar` holds the packing algorithm, the overflow
//!   navigation state machine and its component.
//! - `ui::observer` delivers laid-out widths from the render pass to
//!   subscribers.
//! - `app` owns state, `cmd` applies `Effect`s, and `ui::runtime` drives the
//!   terminal and event loop.

mod actions;
mod app;
mod cmd;
mod session;
mod ui;

use anyhow::Result;
use iqnav_util::NavConfig;

pub use ui::components::nav_bar::visible_count;

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or restored, or when
/// a navigation action fails.
pub async fn run(config: NavConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
