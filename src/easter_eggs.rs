//! Secret key sequence, logo click counter and keyboard shortcuts.

/// `KeyboardEvent.code` values of the classic cheat code.
pub const SECRET_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Matches a fixed key sequence. A wrong key anywhere drops all progress,
/// including progress that could have restarted the sequence.
#[derive(Debug)]
pub struct SequenceMatcher {
    sequence: &'static [&'static str],
    index: usize,
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::new(&SECRET_SEQUENCE)
    }
}

impl SequenceMatcher {
    pub fn new(sequence: &'static [&'static str]) -> Self {
        Self { sequence, index: 0 }
    }

    pub fn progress(&self) -> usize {
        self.index
    }

    /// Feeds one key code; returns `true` when it completes the sequence.
    pub fn feed(&mut self, code: &str) -> bool {
        if self.sequence.get(self.index) != Some(&code) {
            self.index = 0;
            return false;
        }

        self.index += 1;
        if self.index == self.sequence.len() {
            self.index = 0;
            return true;
        }
        false
    }
}

/// Counts logo clicks; `threshold` clicks without an idle gap longer than
/// `idle_ms` between them fire the effect.
///
/// Times are milliseconds from any monotonic origin. Every click moves the
/// idle deadline, so only the most recent deadline can reset the count.
#[derive(Debug)]
pub struct ClickBurst {
    threshold: u32,
    idle_ms: f64,
    count: u32,
    deadline: Option<f64>,
}

impl ClickBurst {
    pub fn new(threshold: u32, idle_ms: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            idle_ms: f64::from(idle_ms),
            count: 0,
            deadline: None,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Applies the idle reset if the deadline has passed by `now`.
    pub fn expire(&mut self, now: f64) {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.count = 0;
            self.deadline = None;
        }
    }

    /// Registers a click at `now`; returns `true` when it fires the effect.
    pub fn click(&mut self, now: f64) -> bool {
        self.expire(now);

        self.count += 1;
        self.deadline = Some(now + self.idle_ms);

        if self.count >= self.threshold {
            self.count = 0;
            return true;
        }
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    ScrollHome,
}

impl Shortcut {
    pub fn from_key(ctrl: bool, key: &str) -> Option<Self> {
        if !ctrl {
            return None;
        }

        match key {
            "d" => Some(Self::ToggleTheme),
            "h" => Some(Self::ScrollHome),
            _ => None,
        }
    }
}
