use core::fmt;
use serde::{Deserialize, Serialize};

/// Countdown length used when none is configured.
pub const DEFAULT_COUNTDOWN_SECS: u32 = 90;

/// Interval at which [`Countdown::tick`] is expected to be called.
pub const TICK_MILLIS: u32 = 1000;

/// Text shown by the countdown once time has run out.
pub const EXPIRED_TEXT: &str = "Time's up!";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerDisplay {
    Clock { minutes: u32, seconds: u32 },
    Expired,
}

impl TimerDisplay {
    pub const fn from_secs(secs: u32) -> Self {
        Self::Clock {
            minutes: secs / 60,
            seconds: secs % 60,
        }
    }

    pub const fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }
}

impl fmt::Display for TimerDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clock { minutes, seconds } => write!(f, "{}:{:02}", minutes, seconds),
            Self::Expired => f.write_str(EXPIRED_TEXT),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Ticked,
    Expired,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Ticked => true,
            Expired => true,
        }
    }
}

/// Countdown driven by an external once-per-second tick.
///
/// The display always trails the counter by one: a tick shows the current value and only then
/// decrements it, so the tick that finds the counter at zero is the one that expires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    running: bool,
    expired: bool,
    display: TimerDisplay,
}

impl Countdown {
    pub const fn new(initial: u32) -> Self {
        Self {
            initial,
            remaining: initial,
            running: false,
            expired: false,
            display: TimerDisplay::from_secs(initial),
        }
    }

    pub const fn initial(&self) -> u32 {
        self.initial
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    pub const fn display(&self) -> TimerDisplay {
        self.display
    }

    /// Returns `true` when the countdown went from paused to running.
    ///
    /// A countdown with no time left never starts, even before the expiring tick has run.
    pub fn start(&mut self) -> bool {
        if self.running || self.expired || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Returns `true` when a running countdown was paused.
    pub fn pause(&mut self) -> bool {
        core::mem::replace(&mut self.running, false)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.initial);
    }

    /// Stops the countdown for good until the next reset.
    ///
    /// Returns `false` when it had already expired.
    pub fn expire(&mut self) -> bool {
        if self.expired {
            return false;
        }
        self.running = false;
        self.expired = true;
        self.remaining = 0;
        self.display = TimerDisplay::Expired;
        log::debug!("countdown expired");
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::NoChange;
        }

        if self.remaining == 0 {
            self.expire();
            return TickOutcome::Expired;
        }

        self.display = TimerDisplay::from_secs(self.remaining);
        self.remaining -= 1;
        TickOutcome::Ticked
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECS)
    }
}
