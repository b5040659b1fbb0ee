// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder View: the pan/zoom viewport behind the builder canvas.
//!
//! This crate provides a small, headless model of the canvas viewport: a
//! translation plus a uniform scale mapping content space (the page being
//! edited) into screen space (pixels relative to the viewport's own box).
//! It focuses on:
//! - Panning by screen-space deltas, with no bounds on translation.
//! - Zooming about a screen point so the content under the cursor stays put.
//! - Quantized +/- zoom steps that always make visible progress.
//! - Scale limits, reset, and coordinate conversion.
//!
//! It does **not** read input events or render anything. Callers are
//! expected to:
//! - Feed pointer, wheel and button input through a controller such as
//!   `builder_canvas`, or call the operations directly.
//! - Apply [`ViewportState::to_affine`] (or an equivalent CSS transform) to
//!   the content container.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use builder_view::{ViewportTransform, ZoomDirection};
//!
//! let mut view = ViewportTransform::new();
//!
//! // Ctrl+wheel over (100, 100): zoom in by 10% of the current scale.
//! let cursor = Point::new(100.0, 100.0);
//! view.zoom_about_point(cursor, 0.1);
//! assert!((view.scale() - 1.1).abs() < 1e-9);
//!
//! // The content point that was under the cursor still is.
//! let under_cursor = view.screen_to_content(cursor);
//! assert!((under_cursor.x - 100.0).abs() < 1e-9);
//!
//! // The "+" button snaps to the next 5% step.
//! view.zoom_step(ZoomDirection::In);
//! assert_eq!(view.zoom_percent(), 115);
//!
//! view.reset();
//! assert_eq!(view.zoom_percent(), 100);
//! ```
//!
//! ## Design notes
//!
//! - The forward transform is `screen = content * scale + translate`.
//! - Pan deltas move the content in the direction of the delta.
//! - Zoom deltas are relative: `scale_delta = 0.1` means "10% larger than
//!   now" at every zoom level.
//! - Scale limits default to `[0.5, 3.0]` and are enforced after every
//!   operation; translation is never clamped.
//! - Non-finite inputs are not rejected and will propagate into the state.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod step;
mod viewport;

pub use config::{ConfigError, ViewportConfig};
pub use step::{ZoomDirection, step_scale};
pub use viewport::{ViewportDebugInfo, ViewportState, ViewportTransform};
