// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture: pointer capture plus movement deltas while the canvas is held.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`PanGesture::press`]. It captures that pointer
//!    unless another one already holds the gesture.
//! 2) On pointer move, call [`PanGesture::move_to`] to get the movement since
//!    the previous position. Moves from other pointers, or while idle, yield
//!    `None`.
//! 3) On pointer up or leave, call [`PanGesture::release`]; use
//!    [`PanGesture::cancel`] when capture is lost for any other reason.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use builder_event_state::pan::PanGesture;
//!
//! let mut pan = PanGesture::default();
//!
//! assert!(pan.press(7_u64, Point::new(10.0, 20.0)));
//! assert!(pan.is_panning());
//!
//! assert_eq!(pan.move_to(&7, Point::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
//! // A second pointer does not steal the gesture.
//! assert_eq!(pan.move_to(&8, Point::new(90.0, 90.0)), None);
//!
//! assert!(pan.release(&7));
//! assert_eq!(pan.move_to(&7, Point::new(30.0, 30.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Tracks an in-progress canvas pan for a single captured pointer.
///
/// `P` is the host's pointer identifier.
#[derive(Debug, Clone, Copy)]
pub struct PanGesture<P> {
    captured: Option<P>,
    start_pos: Point,
    last_pos: Point,
}

impl<P> Default for PanGesture<P> {
    fn default() -> Self {
        Self {
            captured: None,
            start_pos: Point::ZERO,
            last_pos: Point::ZERO,
        }
    }
}

impl<P: PartialEq> PanGesture<P> {
    /// Creates an idle gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins panning with `pointer` at `pos`.
    ///
    /// Returns `false`, leaving the current gesture untouched, if a pointer is
    /// already captured.
    pub fn press(&mut self, pointer: P, pos: Point) -> bool {
        if self.captured.is_some() {
            return false;
        }
        self.captured = Some(pointer);
        self.start_pos = pos;
        self.last_pos = pos;
        true
    }

    /// Records a move of `pointer` to `pos`, returning the delta since the
    /// last recorded position.
    pub fn move_to(&mut self, pointer: &P, pos: Point) -> Option<Vec2> {
        if !self.is_captured_by(pointer) {
            return None;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        Some(delta)
    }

    /// Ends the gesture if `pointer` holds it. Returns whether it did.
    pub fn release(&mut self, pointer: &P) -> bool {
        if !self.is_captured_by(pointer) {
            return false;
        }
        self.captured = None;
        true
    }

    /// Ends the gesture whichever pointer holds it. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        self.captured.take().is_some()
    }

    /// Returns `true` while a pointer holds the gesture.
    pub fn is_panning(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns the captured pointer, if any.
    pub fn captured_pointer(&self) -> Option<&P> {
        self.captured.as_ref()
    }

    /// Offset of `current_pos` from where the gesture started.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.captured.as_ref().map(|_| current_pos - self.start_pos)
    }

    fn is_captured_by(&self, pointer: &P) -> bool {
        self.captured.as_ref() == Some(pointer)
    }
}
