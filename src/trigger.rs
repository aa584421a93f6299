//! Debounce for the celebratory effect fired by two-hand gestures.
//!
//! This is the only piece of cross-frame state in the crate. It lives outside
//! the pure analysis layer; wrap it in a `Mutex` if several threads can fire.

use std::time::{Duration, Instant};

/// Fires at most once per cooldown window
#[derive(Debug, Clone)]
pub struct EffectTrigger {
    cooldown: Duration,
    last_fired: Option<Instant>,
}

impl EffectTrigger {
    /// Create a trigger with the given cooldown
    #[must_use]
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_fired: None,
        }
    }

    /// Attempt to fire at `now`; returns whether the effect should run
    pub fn fire_at(&mut self, now: Instant) -> bool {
        let ready = match self.last_fired {
            Some(last) => now.saturating_duration_since(last) >= self.cooldown,
            None => true,
        };

        if ready {
            self.last_fired = Some(now);
        }
        ready
    }

    /// Attempt to fire at the current time
    pub fn fire(&mut self) -> bool {
        self.fire_at(Instant::now())
    }

    /// Time of the last successful trigger
    #[must_use]
    pub fn last_fired(&self) -> Option<Instant> {
        self.last_fired
    }

    /// Forget the last trigger
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}
