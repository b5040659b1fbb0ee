// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder Canvas: input handling for the builder's pan/zoom canvas.
//!
//! [`CanvasController`] owns the canvas viewport ([`builder_view::ViewportTransform`])
//! and a pan gesture ([`builder_event_state::pan::PanGesture`]). Hosts forward
//! their pointer, wheel and button input as [`CanvasEvent`]s and read back the
//! viewport state, a CSS transform string, the zoom readout, and the cursor.
//!
//! ```rust
//! use builder_canvas::{CanvasController, CanvasEvent, WheelDelta, WheelInput};
//! use kurbo::{Point, Vec2};
//! use ui_events::keyboard::Modifiers;
//! use ui_events::pointer::PointerButton;
//!
//! let mut canvas = CanvasController::new();
//!
//! // Grab the canvas and drag it 30px to the right.
//! canvas.handle(&CanvasEvent::PointerDown {
//!     pointer_id: 1,
//!     button: PointerButton::Primary,
//!     position: Point::new(200.0, 200.0),
//! });
//! canvas.handle(&CanvasEvent::PointerMove {
//!     pointer_id: 1,
//!     position: Point::new(230.0, 200.0),
//! });
//! canvas.handle(&CanvasEvent::PointerUp { pointer_id: 1 });
//! assert_eq!(canvas.state().translate_x, 30.0);
//!
//! // Ctrl + wheel zooms about the pointer.
//! let changed = canvas.handle(&CanvasEvent::Wheel(WheelInput::new(
//!     WheelDelta::Pixels(Vec2::new(0.0, -100.0)),
//!     Point::new(400.0, 300.0),
//!     Modifiers::CONTROL,
//! )));
//! assert!(changed);
//! assert_eq!(canvas.zoom_label(), "110%");
//! ```
//!
//! Hosts that receive `ui-events` scroll events can convert their
//! [`ui_events::ScrollDelta`] with [`WheelDelta::from_scroll_delta`].
//!
//! Gesture starts/ends are logged at `trace` level and zoom steps/resets at
//! `debug` level through the `log` facade; install any logger to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod event;

pub use controller::{CanvasController, CanvasCursor, CanvasOptions, StepAnchor};
pub use event::{CanvasEvent, WheelDelta, WheelInput, is_pan_button};
