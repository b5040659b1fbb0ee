// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default time between automatic advances, in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4_000;

/// Clock for automatic slide advances.
///
/// The crate owns no timers: the host passes its current time to
/// [`Autoplay::elapsed_steps`] (usually through [`crate::Carousel::tick`])
/// and receives how many intervals have completed since the last advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autoplay {
    interval_ms: u64,
    paused: bool,
    last_advance_ms: Option<u64>,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

impl Autoplay {
    /// Creates a running clock; a zero interval is raised to one millisecond.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            paused: false,
            last_advance_ms: None,
        }
    }

    /// Returns the interval between advances.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns `true` while paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pauses or resumes the clock.
    ///
    /// Resuming restarts the interval from the next observed time.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        self.last_advance_ms = None;
    }

    /// Returns how many intervals have completed by `now_ms`.
    ///
    /// The first call after creation or resume only starts the clock. Time
    /// running backwards is treated as no time passing.
    pub fn elapsed_steps(&mut self, now_ms: u64) -> u64 {
        if self.paused {
            return 0;
        }
        let Some(last) = self.last_advance_ms else {
            self.last_advance_ms = Some(now_ms);
            return 0;
        };
        let steps = now_ms.saturating_sub(last) / self.interval_ms;
        self.last_advance_ms = Some(last + steps * self.interval_ms);
        steps
    }
}
