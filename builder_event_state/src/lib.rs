// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder Event State: gesture state machines for the builder UI.
//!
//! This crate provides small, focused state machines for interactions that
//! need state carried across several input events:
//!
//! - [`pan`]: Hold-and-drag panning of the canvas, with single-pointer capture
//! - [`swipe`]: Horizontal swipe recognition with a distance threshold, used
//!   by sliders and carousels
//!
//! Neither module knows about a particular UI framework. Hosts translate
//! their own events into calls (`press`/`move_to`/`release`, or
//! `start`/`finish`) and interpret the results.
//!
//! ### Canvas panning
//!
//! ```rust
//! # #[cfg(feature = "pan")]
//! # fn example() {
//! use kurbo::Point;
//! use builder_event_state::pan::PanGesture;
//!
//! let mut pan = PanGesture::default();
//! pan.press(1_u32, Point::new(10.0, 10.0));
//! let delta = pan.move_to(&1, Point::new(15.0, 12.0)).unwrap();
//! // delta is (5.0, 2.0)
//! pan.release(&1);
//! # }
//! ```
//!
//! ### Slider swipes
//!
//! ```rust
//! # #[cfg(feature = "swipe")]
//! # fn example() {
//! use builder_event_state::swipe::{SwipeDirection, SwipeGesture};
//!
//! let mut swipe = SwipeGesture::default();
//! swipe.start(300.0);
//! assert_eq!(swipe.finish(380.0), Some(SwipeDirection::Right));
//! # }
//! ```
//!
//! ## Features
//!
//! - `pan`: Enable pan gesture tracking (requires `kurbo` dependency)
//! - `swipe`: Enable swipe recognition
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "pan")]
pub mod pan;

#[cfg(feature = "swipe")]
pub mod swipe;
