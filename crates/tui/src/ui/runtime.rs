//! Runtime: event loop and input routing for the TUI.
//!
//! - Owns the terminal lifecycle (raw mode, alternate screen, mouse capture,
//!   focus reporting).
//! - A dedicated thread blocks on terminal input and forwards events over a
//!   channel so resize and focus events are delivered reliably.
//! - Ticking is fast while a quiz clock is running and slow otherwise.
//! - Effects returned by components are executed through `cmd::run_effects`.

use std::io::Stdout;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use iqnav_types::{Effect, Msg};
use iqnav_util::NavConfig;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::main_component::MainView;
use crate::ui::theme;

type TerminalBackend = Terminal<CrosstermBackend<Stdout>>;

const INPUT_POLL: Duration = Duration::from_millis(16);
const RUNNING_TICK: Duration = Duration::from_millis(250);
const IDLE_TICK: Duration = Duration::from_secs(5);

/// Spawns the input thread. It stops once the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    thread::spawn(move || {
        let mut last_mouse_move = Instant::now();
        loop {
            if sender.is_closed() {
                break;
            }
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!(%error, "Failed to poll terminal input");
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(error) => {
                    warn!(%error, "Failed to read terminal input");
                    break;
                }
            };
            // Throttle mouse moves to one per poll interval.
            if event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved) {
                if last_mouse_move.elapsed() < INPUT_POLL {
                    continue;
                }
                last_mouse_move = Instant::now();
            }
            if sender.blocking_send(event).is_err() {
                break;
            }
        }
    });
    receiver
}

fn setup_terminal() -> Result<TerminalBackend> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut TerminalBackend) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture, DisableFocusChange)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut TerminalBackend, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        main_view.render(frame, area, app);
    })?;
    Ok(())
}

/// Routes one terminal event. Returns the effects to run and whether a redraw is needed.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> (Vec<Effect>, bool) {
    match input_event {
        Event::Key(key) if key.kind == KeyEventKind::Press => (main_view.handle_key_events(app, key), true),
        Event::Key(_) => (Vec::new(), false),
        Event::Mouse(mouse) => {
            let effects = main_view.handle_mouse_events(app, mouse);
            let redraw = !effects.is_empty() || mouse.kind != MouseEventKind::Moved;
            (effects, redraw)
        }
        Event::Resize(width, height) => (Vec::new(), main_view.handle_message(app, &Msg::Resize(width, height))),
        Event::FocusLost => (Vec::new(), main_view.handle_message(app, &Msg::FocusLost)),
        Event::FocusGained => (Vec::new(), main_view.handle_message(app, &Msg::FocusGained)),
        Event::Paste(_) => (Vec::new(), false),
    }
}

fn tick_interval(app: &App) -> Duration {
    if app.session.is_running() { RUNNING_TICK } else { IDLE_TICK }
}

fn new_ticker(period: Duration) -> time::Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn event_loop(terminal: &mut TerminalBackend, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut current_interval = tick_interval(app);
    let mut ticker = new_ticker(current_interval);

    render(terminal, app, main_view)?;

    loop {
        let target_interval = tick_interval(app);
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = new_ticker(current_interval);
        }

        let (effects, mut needs_render) = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("Input channel closed");
                    break;
                };
                if let Event::Key(key) = event
                    && key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                handle_input_event(app, main_view, event)
            }
            _ = ticker.tick() => (Vec::new(), main_view.handle_message(app, &Msg::Tick)),
            _ = signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        };

        if !effects.is_empty() {
            cmd::run_effects(app, effects).context("navigation action failed")?;
            needs_render = true;
        }
        if app.should_quit {
            break;
        }
        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

/// Sets up the terminal, runs the event loop, and restores the terminal on exit.
pub async fn run_app(config: NavConfig) -> Result<()> {
    let mut app = App::new(config, theme::load());
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view).await;

    app.nav_bar.unmount();
    let outcome = finish(result, cleanup_terminal(&mut terminal));
    info!("TUI exited");
    outcome
}

/// Combines the event-loop result with terminal cleanup.
///
/// A loop error wins over a cleanup error; the cleanup error is still logged.
fn finish(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(loop_error), Err(cleanup_error)) => {
            error!(error = %cleanup_error, "Failed to restore terminal");
            Err(loop_error)
        }
        (Err(loop_error), Ok(())) => Err(loop_error),
        (Ok(()), cleanup) => cleanup,
    }
}
