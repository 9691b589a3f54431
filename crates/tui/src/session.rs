//! Quiz session clock and focus-loss flagging.
//!
//! The session starts the first time the quiz view is opened. Time is
//! measured against a monotonic clock; every `Msg::Tick` refreshes the
//! elapsed time. Losing terminal focus while the clock runs counts against
//! the taker, and the session is flagged once the configured limit is hit.

use std::time::{Duration, Instant};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct QuizSession {
    limit: Duration,
    started_at: Option<Instant>,
    elapsed: Duration,
    focus_losses: u32,
    focus_loss_limit: u32,
    flagged: bool,
}

impl QuizSession {
    pub fn new(limit: Duration, focus_loss_limit: u32) -> Self {
        Self {
            limit,
            started_at: None,
            elapsed: Duration::ZERO,
            focus_losses: 0,
            focus_loss_limit,
            flagged: false,
        }
    }

    pub fn from_minutes(minutes: u32, focus_loss_limit: u32) -> Self {
        Self::new(Duration::from_secs(u64::from(minutes) * 60), focus_loss_limit)
    }

    /// Starts the clock unless it is already running.
    pub fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            info!(limit_secs = self.limit.as_secs(), "Quiz session started");
            self.started_at = Some(now);
        }
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Discards progress and starts a fresh clock.
    pub fn restart_at(&mut self, now: Instant) {
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.focus_losses = 0;
        self.flagged = false;
        self.start_at(now);
    }

    pub fn restart(&mut self) {
        self.restart_at(Instant::now());
    }

    /// Refreshes elapsed time. Returns `true` when the displayed second changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let before = self.elapsed.as_secs();
        self.elapsed = now.saturating_duration_since(started_at).min(self.limit);
        self.elapsed.as_secs() != before
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.is_expired()
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_expired(&self) -> bool {
        self.started_at.is_some() && self.elapsed >= self.limit
    }

    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed)
    }

    /// Remaining time as `mm:ss`.
    pub fn format_remaining(&self) -> String {
        let secs = self.remaining().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Counts a focus loss while the clock runs.
    ///
    /// Returns `true` when this loss flags the session.
    pub fn record_focus_loss(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.focus_losses += 1;
        if !self.flagged && self.focus_losses >= self.focus_loss_limit {
            warn!(losses = self.focus_losses, "Quiz session flagged for repeated focus loss");
            self.flagged = true;
            return true;
        }
        false
    }

    pub fn focus_losses(&self) -> u32 {
        self.focus_losses
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_counts_down_and_saturates() {
        let mut session = QuizSession::new(Duration::from_secs(90), 3);
        let start = Instant::now();
        assert_eq!(session.format_remaining(), "01:30");

        session.start_at(start);
        assert!(session.tick_at(start + Duration::from_secs(31)));
        assert_eq!(session.format_remaining(), "00:59");
        assert!(!session.tick_at(start + Duration::from_millis(31_500)));

        session.tick_at(start + Duration::from_secs(600));
        assert!(session.is_expired());
        assert_eq!(session.remaining(), Duration::ZERO);
        assert_eq!(session.format_remaining(), "00:00");
    }

    #[test]
    fn ticks_before_start_do_nothing() {
        let mut session = QuizSession::from_minutes(1, 3);
        assert!(!session.tick());
        assert!(!session.is_started());
        assert!(!session.is_expired());
    }

    #[test]
    fn starting_twice_keeps_first_start() {
        let mut session = QuizSession::new(Duration::from_secs(60), 3);
        let start = Instant::now();
        session.start_at(start);
        session.start_at(start + Duration::from_secs(30));
        session.tick_at(start + Duration::from_secs(40));
        assert_eq!(session.remaining(), Duration::from_secs(20));
    }

    #[test]
    fn focus_losses_flag_once_at_limit() {
        let mut session = QuizSession::new(Duration::from_secs(60), 2);
        assert!(!session.record_focus_loss(), "not running yet");
        assert_eq!(session.focus_losses(), 0);

        session.start();
        assert!(!session.record_focus_loss());
        assert!(session.record_focus_loss());
        assert!(!session.record_focus_loss());
        assert!(session.is_flagged());
        assert_eq!(session.focus_losses(), 3);
    }

    #[test]
    fn expired_sessions_ignore_focus_loss() {
        let mut session = QuizSession::new(Duration::from_secs(1), 1);
        let start = Instant::now();
        session.start_at(start);
        session.tick_at(start + Duration::from_secs(2));
        assert!(!session.record_focus_loss());
        assert!(!session.is_flagged());
    }

    #[test]
    fn restart_clears_progress() {
        let mut session = QuizSession::new(Duration::from_secs(60), 1);
        let start = Instant::now();
        session.start_at(start);
        session.record_focus_loss();
        session.tick_at(start + Duration::from_secs(50));

        session.restart_at(start + Duration::from_secs(50));
        assert!(!session.is_flagged());
        assert_eq!(session.focus_losses(), 0);
        assert_eq!(session.remaining(), Duration::from_secs(60));
        assert!(session.is_running());
    }
}
