// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder Carousel: position math for circular sliders.
//!
//! The testimonial and solutions sliders show one active card with its
//! neighbours fanned out on either side. This crate tracks which card is
//! active and where every other card goes:
//!
//! - [`circular_distance`]: signed shortest offset between two cards on a ring.
//! - [`CardSlot`]: offset, scale, stacking and fade for a given distance.
//! - [`Carousel`]: wrap-around navigation, threshold swipes, and a
//!   host-driven [`Autoplay`] clock.
//!
//! ```rust
//! use builder_carousel::{Autoplay, Carousel};
//!
//! let mut slider = Carousel::new(5, 2).with_autoplay(Autoplay::default());
//!
//! // Drag the cards left by 80px: the next card becomes active.
//! slider.begin_swipe(400.0);
//! slider.end_swipe(320.0);
//! assert_eq!(slider.active(), 3);
//!
//! // Card 2 now sits immediately to the left.
//! assert_eq!(slider.distance(2), -1);
//! assert_eq!(slider.slot(2).transform_css(), "translateX(-75%) scale(0.85)");
//!
//! // Four seconds later autoplay moves on.
//! slider.tick(0);
//! slider.tick(4_000);
//! assert_eq!(slider.active(), 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod carousel;
mod slot;

pub use autoplay::{Autoplay, DEFAULT_AUTOPLAY_INTERVAL_MS};
pub use builder_event_state::swipe::{SwipeDirection, SwipeGesture};
pub use carousel::Carousel;
pub use slot::{CardSlot, circular_distance};
