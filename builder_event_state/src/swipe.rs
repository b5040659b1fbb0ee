// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe recognition with a distance threshold.
//!
//! A swipe is the horizontal distance between where a press started and where
//! it ended. Only distances strictly greater than the threshold count; shorter
//! drags are treated as taps or jitter.
//!
//! ```
//! use builder_event_state::swipe::{SwipeDirection, SwipeGesture};
//!
//! let mut swipe = SwipeGesture::default();
//! swipe.start(200.0);
//! assert_eq!(swipe.finish(120.0), Some(SwipeDirection::Left));
//!
//! swipe.start(200.0);
//! assert_eq!(swipe.finish(230.0), None);
//! ```

/// Default minimum travel, in pixels, for a swipe to register.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Which way the pointer travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Ended left of where it started.
    Left,
    /// Ended right of where it started.
    Right,
}

/// Tracks one horizontal swipe at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    threshold: f64,
    start_x: Option<f64>,
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeGesture {
    /// Creates an idle recognizer; negative thresholds are treated as their magnitude.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    /// Returns the minimum travel for a swipe.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts tracking at horizontal position `x`, replacing any open swipe.
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finishes the swipe at `x` and classifies it.
    ///
    /// Returns `None` when no swipe was being tracked or the travel did not
    /// exceed the threshold. Tracking stops either way.
    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let dx = x - self.start_x.take()?;
        if dx.abs() <= self.threshold {
            None
        } else if dx > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    }

    /// Abandons the current swipe without classifying it.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Returns `true` between [`start`](Self::start) and
    /// [`finish`](Self::finish)/[`cancel`](Self::cancel).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_without_start_is_none() {
        let mut swipe = SwipeGesture::default();
        assert_eq!(swipe.finish(500.0), None);
    }

    #[test]
    fn classifies_by_sign_past_threshold() {
        let mut swipe = SwipeGesture::default();
        swipe.start(100.0);
        assert_eq!(swipe.finish(151.0), Some(SwipeDirection::Right));
        swipe.start(100.0);
        assert_eq!(swipe.finish(49.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut swipe = SwipeGesture::default();
        swipe.start(100.0);
        assert_eq!(swipe.finish(150.0), None);
        swipe.start(100.0);
        assert_eq!(swipe.finish(50.0), None);
    }

    #[test]
    fn finish_and_cancel_stop_tracking() {
        let mut swipe = SwipeGesture::new(10.0);
        swipe.start(0.0);
        assert!(swipe.is_tracking());
        swipe.finish(3.0);
        assert!(!swipe.is_tracking());

        swipe.start(0.0);
        swipe.cancel();
        assert!(!swipe.is_tracking());
        assert_eq!(swipe.finish(100.0), None);
    }

    #[test]
    fn negative_threshold_uses_magnitude() {
        let swipe = SwipeGesture::new(-20.0);
        assert_eq!(swipe.threshold(), 20.0);
    }
}
