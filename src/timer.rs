//! Focus timer state machine.
//!
//! The timer is a plain countdown with three states. Remaining seconds are
//! persisted through `Preferences::timer_seconds`; the run state lives only
//! in memory for the duration of a session.
//!
//! Transitions: idle/paused -> running on `start` (no-op while running),
//! running -> paused on `pause` (no-op otherwise), `reset` pauses and
//! restores the configured session length. Reaching zero pauses, restores
//! the session length, and reports completion.

/// Default focus session length
pub const DEFAULT_TIMER_MINUTES: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Outcome of one 1-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Timer is not running; nothing changed
    Inactive,
    /// One second elapsed, seconds remain
    Counting(u32),
    /// The countdown reached zero; timer paused and session length restored
    Finished,
}

#[derive(Debug, Clone)]
pub struct FocusTimer {
    state: TimerState,
    seconds: u32,
    session_seconds: u32,
}

impl FocusTimer {
    /// Resume a timer from persisted remaining seconds.
    pub fn new(seconds: u32, session_seconds: u32) -> Self {
        Self {
            state: TimerState::Idle,
            seconds,
            session_seconds,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Start or resume the countdown; no-op while already running.
    pub fn start(&mut self) {
        if self.state != TimerState::Running {
            self.state = TimerState::Running;
        }
    }

    /// Pause the countdown; no-op unless running.
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Pause and restore the full session length.
    pub fn reset(&mut self) {
        self.pause();
        self.state = TimerState::Idle;
        self.seconds = self.session_seconds;
    }

    /// Advance one second of wall-clock time.
    pub fn tick(&mut self) -> Tick {
        if self.state != TimerState::Running {
            return Tick::Inactive;
        }
        if self.seconds <= 1 {
            self.state = TimerState::Paused;
            self.seconds = self.session_seconds;
            return Tick::Finished;
        }
        self.seconds -= 1;
        Tick::Counting(self.seconds)
    }

    /// Render the remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_reset_transitions() {
        let mut timer = FocusTimer::new(10, 1500);
        assert_eq!(timer.state(), TimerState::Idle);

        timer.pause(); // no-op from idle
        assert_eq!(timer.state(), TimerState::Idle);

        timer.start();
        assert!(timer.is_running());
        timer.start(); // no-op while running
        assert!(timer.is_running());

        timer.pause();
        assert_eq!(timer.state(), TimerState::Paused);

        timer.start();
        assert!(timer.is_running());

        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.seconds(), 1500);
    }

    #[test]
    fn tick_counts_down_and_finishes() {
        let mut timer = FocusTimer::new(2, 1500);
        assert_eq!(timer.tick(), Tick::Inactive);

        timer.start();
        assert_eq!(timer.tick(), Tick::Counting(1));
        assert_eq!(timer.tick(), Tick::Finished);
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.seconds(), 1500);
    }

    #[test]
    fn display_is_zero_padded() {
        let timer = FocusTimer::new(65, 1500);
        assert_eq!(timer.display(), "01:05");
        assert_eq!(FocusTimer::new(0, 1500).display(), "00:00");
    }
}
