// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// Signed shortest offset from `active` to `index` on a ring of `len` cards.
///
/// Results lie in `[-len / 2, len / 2]`. For even lengths the card directly
/// opposite keeps the sign of the raw difference, so it may be reported on
/// either side. An empty ring reports `0`.
///
/// ```
/// use builder_carousel::circular_distance;
///
/// assert_eq!(circular_distance(4, 0, 5), -1);
/// assert_eq!(circular_distance(0, 4, 5), 1);
/// assert_eq!(circular_distance(2, 2, 5), 0);
/// ```
#[must_use]
pub fn circular_distance(index: usize, active: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let mut diff = (index as isize - active as isize) % len;
    if 2 * diff > len {
        diff -= len;
    }
    if 2 * diff < -len {
        diff += len;
    }
    diff
}

/// Where and how a card is drawn relative to the active card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSlot {
    /// Horizontal offset as a percentage of the card width.
    pub offset_percent: f64,
    /// Uniform scale of the card.
    pub scale: f64,
    /// Stacking order; the active card is on top.
    pub z_index: i32,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Grayscale filter amount in percent.
    pub grayscale_percent: f64,
    /// Brightness filter amount in percent (100 is unchanged).
    pub brightness_percent: f64,
}

impl CardSlot {
    /// The active card.
    pub const CENTER: Self = Self {
        offset_percent: 0.0,
        scale: 1.0,
        z_index: 10,
        opacity: 1.0,
        grayscale_percent: 0.0,
        brightness_percent: 100.0,
    };

    /// Cards beyond the two nearest neighbours on each side.
    pub const HIDDEN: Self = Self {
        offset_percent: 0.0,
        scale: 0.0,
        z_index: 0,
        opacity: 0.0,
        grayscale_percent: 0.0,
        brightness_percent: 100.0,
    };

    /// Slot for a card `distance` positions from the active one.
    ///
    /// Negative distances sit to the left.
    #[must_use]
    pub fn for_distance(distance: isize) -> Self {
        let side = if distance < 0 { -1.0 } else { 1.0 };
        match distance.unsigned_abs() {
            0 => Self::CENTER,
            1 => Self {
                offset_percent: 75.0 * side,
                scale: 0.85,
                z_index: 5,
                opacity: 0.8,
                grayscale_percent: 20.0,
                brightness_percent: 100.0,
            },
            2 => Self {
                offset_percent: 140.0 * side,
                scale: 0.7,
                z_index: 1,
                opacity: 0.5,
                grayscale_percent: 100.0,
                brightness_percent: 60.0,
            },
            _ => Self::HIDDEN,
        }
    }

    /// Returns `false` for cards that should not be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// CSS `transform` value placing this card.
    #[must_use]
    pub fn transform_css(&self) -> String {
        if self.is_visible() {
            format!(
                "translateX({}%) scale({})",
                self.offset_percent, self.scale
            )
        } else {
            format!("scale({})", self.scale)
        }
    }
}
