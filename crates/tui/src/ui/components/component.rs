//! Component system for the iqnav TUI.
//!
//! Components are self-contained UI elements: they handle their own input,
//! render into a provided `Rect`, and report side effects back to the runtime
//! as `Effect`s instead of changing global state directly.

use crossterm::event::{KeyEvent, MouseEvent};
use iqnav_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI component with its own behavior and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events()` and `handle_mouse_events()`
/// 2. **Messages**: `handle_message()` receives application-wide messages such as ticks
/// 3. **Rendering**: `render()` draws the component into the provided frame area
pub(crate) trait Component {
    /// Handle an application-level message.
    ///
    /// Returns `true` when the component needs a redraw.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> bool {
        false
    }

    /// Handle key events routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Layout bookkeeping (hit-test areas) may be written back into state;
    /// everything else should change in event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
