// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use ui_events::ScrollDelta;
use ui_events::keyboard::Modifiers;
use ui_events::pointer::PointerButton;

/// Input delivered to a [`crate::CanvasController`].
///
/// Positions are in the canvas's own screen space: pixels relative to the
/// top-left corner of its bounding box.
#[derive(Clone, Debug)]
pub enum CanvasEvent {
    /// A pointer button went down over the canvas.
    PointerDown {
        /// Host identifier of the pointer.
        pointer_id: u64,
        /// Button that was pressed.
        button: PointerButton,
        /// Where it was pressed.
        position: Point,
    },
    /// A pointer moved over (or while captured by) the canvas.
    PointerMove {
        /// Host identifier of the pointer.
        pointer_id: u64,
        /// New position.
        position: Point,
    },
    /// A pointer button was released.
    PointerUp {
        /// Host identifier of the pointer.
        pointer_id: u64,
    },
    /// A pointer left the canvas.
    PointerLeave {
        /// Host identifier of the pointer.
        pointer_id: u64,
    },
    /// Wheel or trackpad scroll.
    Wheel(WheelInput),
    /// The "+" zoom control was clicked.
    ZoomIn,
    /// The "-" zoom control was clicked.
    ZoomOut,
    /// The "Reset View" control was clicked.
    ResetView,
}

/// A wheel event over the canvas.
#[derive(Clone, Debug)]
pub struct WheelInput {
    /// Scroll amount, positive when scrolling right or down.
    pub delta: WheelDelta,
    /// Pointer position when the wheel turned.
    pub position: Point,
    /// Keyboard modifiers held during the scroll.
    pub modifiers: Modifiers,
}

impl WheelInput {
    /// Creates a wheel input.
    #[must_use]
    pub fn new(delta: WheelDelta, position: Point, modifiers: Modifiers) -> Self {
        Self {
            delta,
            position,
            modifiers,
        }
    }
}

/// Scroll amount in the unit the host reported it in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Logical pixels.
    Pixels(Vec2),
    /// Lines of text.
    Lines(Vec2),
    /// Whole pages.
    Pages(Vec2),
}

impl WheelDelta {
    /// Converts a `ui-events` scroll delta, scaling physical pixels to
    /// logical ones with `scale_factor`.
    #[must_use]
    pub fn from_scroll_delta(delta: &ScrollDelta, scale_factor: f64) -> Self {
        match delta {
            ScrollDelta::PixelDelta(pos) => {
                let logical = pos.to_logical(scale_factor);
                Self::Pixels(Vec2::new(logical.x, logical.y))
            }
            ScrollDelta::LineDelta(x, y) => Self::Lines(Vec2::new(f64::from(*x), f64::from(*y))),
            ScrollDelta::PageDelta(x, y) => Self::Pages(Vec2::new(f64::from(*x), f64::from(*y))),
        }
    }

    /// Resolves the delta to logical pixels.
    ///
    /// Line deltas use `line_size`; page deltas use `page_size`.
    #[must_use]
    pub fn to_pixels(self, line_size: Vec2, page_size: Size) -> Vec2 {
        match self {
            Self::Pixels(v) => v,
            Self::Lines(v) => Vec2::new(v.x * line_size.x, v.y * line_size.y),
            Self::Pages(v) => Vec2::new(v.x * page_size.width, v.y * page_size.height),
        }
    }
}

/// Returns whether `button` starts a canvas pan.
///
/// Both the primary and the middle (auxiliary) button grab the canvas.
#[must_use]
pub fn is_pan_button(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary | PointerButton::Auxiliary)
}
