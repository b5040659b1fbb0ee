// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use builder_event_state::swipe::{SwipeDirection, SwipeGesture};
use log::trace;

use crate::autoplay::Autoplay;
use crate::slot::{CardSlot, circular_distance};

/// Active-card state for a circular slider.
///
/// Navigation wraps in both directions. An empty carousel ignores every
/// navigation call and reports index `0`.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    active: usize,
    swipe: SwipeGesture,
    autoplay: Option<Autoplay>,
}

impl Carousel {
    /// Creates a carousel of `len` cards showing `initial` (wrapped into range).
    #[must_use]
    pub fn new(len: usize, initial: usize) -> Self {
        Self {
            len,
            active: if len == 0 { 0 } else { initial % len },
            swipe: SwipeGesture::default(),
            autoplay: None,
        }
    }

    /// Enables automatic advancing.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: Autoplay) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Replaces the swipe recognizer, e.g. to change its threshold.
    #[must_use]
    pub fn with_swipe(mut self, swipe: SwipeGesture) -> Self {
        self.swipe = swipe;
        self
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active card.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Moves to the following card, wrapping to the first.
    pub fn next_card(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    /// Moves to the preceding card, wrapping to the last.
    pub fn prev_card(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Makes `index` the active card. Out-of-range indices are ignored.
    ///
    /// Returns whether the active card changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Signed offset of `index` from the active card.
    #[must_use]
    pub fn distance(&self, index: usize) -> isize {
        circular_distance(index, self.active, self.len)
    }

    /// Placement of card `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> CardSlot {
        CardSlot::for_distance(self.distance(index))
    }

    /// Placements of every card, in index order.
    pub fn slots(&self) -> impl Iterator<Item = CardSlot> + '_ {
        (0..self.len).map(|index| self.slot(index))
    }

    /// Starts a swipe at horizontal position `x`.
    pub fn begin_swipe(&mut self, x: f64) {
        self.swipe.start(x);
    }

    /// Ends a swipe at `x`, navigating if it passed the threshold.
    ///
    /// Swiping right shows the previous card; swiping left shows the next.
    pub fn end_swipe(&mut self, x: f64) -> Option<SwipeDirection> {
        let direction = self.swipe.finish(x)?;
        match direction {
            SwipeDirection::Right => self.prev_card(),
            SwipeDirection::Left => self.next_card(),
        }
        trace!("swipe {direction:?} -> card {}", self.active);
        Some(direction)
    }

    /// Abandons an in-progress swipe.
    pub fn cancel_swipe(&mut self) {
        self.swipe.cancel();
    }

    /// Returns the autoplay clock, if enabled.
    #[must_use]
    pub fn autoplay(&self) -> Option<&Autoplay> {
        self.autoplay.as_ref()
    }

    /// Pauses or resumes autoplay (e.g. while hovered). No-op without autoplay.
    pub fn set_paused(&mut self, paused: bool) {
        if let Some(autoplay) = &mut self.autoplay {
            autoplay.set_paused(paused);
        }
    }

    /// Advances once per autoplay interval completed by `now_ms`.
    ///
    /// Returns whether the active card changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(autoplay) = &mut self.autoplay else {
            return false;
        };
        let steps = autoplay.elapsed_steps(now_ms);
        if steps == 0 || self.len == 0 {
            return false;
        }
        let before = self.active;
        let advance = usize::try_from(steps % self.len as u64).unwrap_or(0);
        self.active = (self.active + advance) % self.len;
        trace!("autoplay advanced {steps} step(s) -> card {}", self.active);
        self.active != before
    }
}
