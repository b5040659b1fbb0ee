// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use builder_event_state::pan::PanGesture;
use builder_view::{ConfigError, ViewportConfig, ViewportState, ViewportTransform, ZoomDirection};
use kurbo::{Point, Size, Vec2};
use log::{debug, trace};

use crate::event::{CanvasEvent, WheelInput, is_pan_button};

/// Where the discrete zoom controls anchor their scale change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepAnchor {
    /// Change the scale only; the translation is left as is.
    ///
    /// Content appears to grow from the content origin.
    #[default]
    Origin,
    /// Keep the content at the center of the view fixed.
    ViewCenter,
}

/// Cursor the canvas should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasCursor {
    /// Idle: the canvas can be grabbed.
    Grab,
    /// A pan gesture is in progress.
    Grabbing,
}

impl CanvasCursor {
    /// CSS `cursor` keyword for this cursor.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Settings for a [`CanvasController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasOptions {
    /// Scale limits, zoom step and wheel sensitivity.
    pub viewport: ViewportConfig,
    /// Anchor for the +/- controls.
    pub step_anchor: StepAnchor,
    /// Pixel size of one wheel "line".
    pub line_size: Vec2,
    /// Size of the canvas box; used for page deltas and the view center.
    pub view_size: Size,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            step_anchor: StepAnchor::Origin,
            line_size: Vec2::new(16.0, 16.0),
            view_size: Size::new(800.0, 600.0),
        }
    }
}

/// Turns canvas input into pan/zoom operations.
///
/// The controller owns the canvas [`ViewportTransform`] and the pan gesture.
/// Events are handled synchronously, one at a time, in delivery order:
///
/// - Primary or middle button down grabs the canvas; moves then pan it so the
///   content follows the pointer. Up or leave ends the grab.
/// - The wheel pans opposite to the scroll direction. With Shift held and no
///   horizontal component, vertical scroll pans horizontally.
/// - The wheel with Ctrl held zooms about the pointer.
/// - The +/- controls step the zoom by 5% increments; "Reset View" restores
///   the identity view.
#[derive(Clone, Debug)]
pub struct CanvasController {
    viewport: ViewportTransform,
    pan: PanGesture<u64>,
    step_anchor: StepAnchor,
    line_size: Vec2,
    view_size: Size,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    /// Creates a controller with [`CanvasOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        let options = CanvasOptions::default();
        Self {
            viewport: ViewportTransform::new(),
            pan: PanGesture::new(),
            step_anchor: options.step_anchor,
            line_size: options.line_size,
            view_size: options.view_size,
        }
    }

    /// Creates a controller with custom options.
    pub fn with_options(options: CanvasOptions) -> Result<Self, ConfigError> {
        let viewport = ViewportTransform::with_config(options.viewport)?;
        Ok(Self {
            viewport,
            pan: PanGesture::new(),
            step_anchor: options.step_anchor,
            line_size: options.line_size,
            view_size: options.view_size,
        })
    }

    /// Processes one event.
    ///
    /// Returns `true` if the viewport state or the cursor changed, meaning the
    /// host should re-render.
    pub fn handle(&mut self, event: &CanvasEvent) -> bool {
        let before = (self.viewport.state(), self.cursor());
        match event {
            CanvasEvent::PointerDown {
                pointer_id,
                button,
                position,
            } => {
                if is_pan_button(*button) && self.pan.press(*pointer_id, *position) {
                    trace!("pan started by pointer {pointer_id} at {position:?}");
                }
            }
            CanvasEvent::PointerMove {
                pointer_id,
                position,
            } => {
                if let Some(delta) = self.pan.move_to(pointer_id, *position) {
                    self.viewport.pan_by(delta);
                }
            }
            CanvasEvent::PointerUp { pointer_id } | CanvasEvent::PointerLeave { pointer_id } => {
                if self.pan.release(pointer_id) {
                    trace!("pan ended by pointer {pointer_id}");
                }
            }
            CanvasEvent::Wheel(wheel) => self.wheel(wheel),
            CanvasEvent::ZoomIn => self.zoom_step(ZoomDirection::In),
            CanvasEvent::ZoomOut => self.zoom_step(ZoomDirection::Out),
            CanvasEvent::ResetView => self.reset_view(),
        }
        (self.viewport.state(), self.cursor()) != before
    }

    /// Steps the zoom one increment in `direction`.
    pub fn zoom_step(&mut self, direction: ZoomDirection) {
        match self.step_anchor {
            StepAnchor::Origin => self.viewport.zoom_step(direction),
            StepAnchor::ViewCenter => {
                let center = self.view_center();
                self.viewport.zoom_step_about(direction, center);
            }
        }
        debug!("zoom step {direction:?} -> {}%", self.viewport.zoom_percent());
    }

    /// Restores the identity view.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        debug!("view reset");
    }

    /// Ends any pan gesture, e.g. when pointer capture is lost.
    ///
    /// Returns whether a gesture was active.
    pub fn cancel_pan(&mut self) -> bool {
        let cancelled = self.pan.cancel();
        if cancelled {
            trace!("pan cancelled");
        }
        cancelled
    }

    fn wheel(&mut self, wheel: &WheelInput) {
        let delta = wheel.delta.to_pixels(self.line_size, self.view_size);
        if wheel.modifiers.ctrl() {
            let scale_delta = -delta.y * self.viewport.config().wheel_zoom_sensitivity;
            self.viewport.zoom_about_point(wheel.position, scale_delta);
            return;
        }
        let delta = if wheel.modifiers.shift() && delta.x == 0.0 {
            Vec2::new(delta.y, 0.0)
        } else {
            delta
        };
        self.viewport.pan_by(-delta);
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// Returns the current viewport state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.viewport.state()
    }

    /// Returns `true` while the canvas is grabbed.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Returns the cursor for the current gesture state.
    #[must_use]
    pub fn cursor(&self) -> CanvasCursor {
        if self.pan.is_panning() {
            CanvasCursor::Grabbing
        } else {
            CanvasCursor::Grab
        }
    }

    /// Returns the size of the canvas box.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Updates the size of the canvas box, e.g. after a layout change.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Returns the center of the canvas box in screen space.
    #[must_use]
    pub fn view_center(&self) -> Point {
        self.view_size.to_rect().center()
    }

    /// CSS `transform` value for the content container.
    ///
    /// ```
    /// use builder_canvas::{CanvasController, CanvasEvent};
    ///
    /// let mut canvas = CanvasController::new();
    /// assert_eq!(canvas.css_transform(), "translate(0px, 0px) scale(1)");
    /// canvas.handle(&CanvasEvent::ZoomIn);
    /// assert_eq!(canvas.css_transform(), "translate(0px, 0px) scale(1.05)");
    /// ```
    #[must_use]
    pub fn css_transform(&self) -> String {
        let state = self.viewport.state();
        format!(
            "translate({}px, {}px) scale({})",
            state.translate_x, state.translate_y, state.scale
        )
    }

    /// Text for the zoom readout, e.g. `"115%"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.viewport.zoom_percent())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use ui_events::keyboard::Modifiers;
    use ui_events::pointer::PointerButton;

    use super::{CanvasController, CanvasCursor, CanvasOptions, StepAnchor};
    use crate::event::{CanvasEvent, WheelDelta, WheelInput};
    use builder_view::{ViewportConfig, ViewportState};

    fn down(pointer_id: u64, button: PointerButton, x: f64, y: f64) -> CanvasEvent {
        CanvasEvent::PointerDown {
            pointer_id,
            button,
            position: Point::new(x, y),
        }
    }

    fn move_to(pointer_id: u64, x: f64, y: f64) -> CanvasEvent {
        CanvasEvent::PointerMove {
            pointer_id,
            position: Point::new(x, y),
        }
    }

    fn wheel(dx: f64, dy: f64, modifiers: Modifiers) -> CanvasEvent {
        CanvasEvent::Wheel(WheelInput::new(
            WheelDelta::Pixels(Vec2::new(dx, dy)),
            Point::new(100.0, 100.0),
            modifiers,
        ))
    }

    #[test]
    fn drag_pans_with_pointer() {
        let mut canvas = CanvasController::new();
        assert!(canvas.handle(&down(1, PointerButton::Primary, 10.0, 10.0)));
        assert_eq!(canvas.cursor(), CanvasCursor::Grabbing);

        assert!(canvas.handle(&move_to(1, 25.0, 5.0)));
        assert_eq!(canvas.state().translation(), Vec2::new(15.0, -5.0));

        assert!(canvas.handle(&CanvasEvent::PointerUp { pointer_id: 1 }));
        assert_eq!(canvas.cursor(), CanvasCursor::Grab);

        assert!(!canvas.handle(&move_to(1, 90.0, 90.0)));
        assert_eq!(canvas.state().translation(), Vec2::new(15.0, -5.0));
    }

    #[test]
    fn middle_button_pans_and_secondary_does_not() {
        let mut canvas = CanvasController::new();
        assert!(!canvas.handle(&down(1, PointerButton::Secondary, 0.0, 0.0)));
        assert!(!canvas.is_panning());

        canvas.handle(&down(1, PointerButton::Auxiliary, 0.0, 0.0));
        assert!(canvas.is_panning());
    }

    #[test]
    fn leave_cancels_drag() {
        let mut canvas = CanvasController::new();
        canvas.handle(&down(4, PointerButton::Primary, 0.0, 0.0));
        canvas.handle(&CanvasEvent::PointerLeave { pointer_id: 4 });
        assert!(!canvas.is_panning());
        assert!(!canvas.handle(&move_to(4, 50.0, 50.0)));
    }

    #[test]
    fn cancel_pan_drops_capture() {
        let mut canvas = CanvasController::new();
        assert!(!canvas.cancel_pan());
        canvas.handle(&down(4, PointerButton::Primary, 0.0, 0.0));
        assert!(canvas.cancel_pan());
        assert!(!canvas.is_panning());
    }

    #[test]
    fn wheel_pans_opposite_to_scroll() {
        let mut canvas = CanvasController::new();
        canvas.handle(&wheel(0.0, 40.0, Modifiers::empty()));
        assert_eq!(canvas.state().translation(), Vec2::new(0.0, -40.0));
        canvas.handle(&wheel(-12.0, 0.0, Modifiers::empty()));
        assert_eq!(canvas.state().translation(), Vec2::new(12.0, -40.0));
    }

    #[test]
    fn shift_wheel_pans_horizontally() {
        let mut canvas = CanvasController::new();
        canvas.handle(&wheel(0.0, 30.0, Modifiers::SHIFT));
        assert_eq!(canvas.state().translation(), Vec2::new(-30.0, 0.0));

        // A horizontal component wins over the remap.
        canvas.handle(&wheel(5.0, 30.0, Modifiers::SHIFT));
        assert_eq!(canvas.state().translation(), Vec2::new(-35.0, -30.0));
    }

    #[test]
    fn line_wheel_uses_line_size() {
        let mut canvas = CanvasController::new();
        canvas.handle(&CanvasEvent::Wheel(WheelInput::new(
            WheelDelta::Lines(Vec2::new(0.0, 2.0)),
            Point::ZERO,
            Modifiers::empty(),
        )));
        assert_eq!(canvas.state().translation(), Vec2::new(0.0, -32.0));
    }

    #[test]
    fn ctrl_wheel_zooms_about_pointer() {
        let mut canvas = CanvasController::new();
        // Scrolling up (negative delta) zooms in.
        canvas.handle(&wheel(0.0, -100.0, Modifiers::CONTROL));

        let state = canvas.state();
        assert!((state.scale - 1.1).abs() < 1e-9);
        let under_pointer = canvas
            .viewport()
            .screen_to_content(Point::new(100.0, 100.0));
        assert!((under_pointer.x - 100.0).abs() < 1e-9);
        assert!((under_pointer.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ctrl_wheel_respects_limits() {
        let mut canvas = CanvasController::new();
        for _ in 0..50 {
            canvas.handle(&wheel(0.0, 500.0, Modifiers::CONTROL));
        }
        assert_eq!(canvas.state().scale, 0.5);
        assert!(!canvas.handle(&wheel(0.0, 500.0, Modifiers::CONTROL)));
    }

    #[test]
    fn zoom_buttons_step_and_reset() {
        let mut canvas = CanvasController::new();
        canvas.handle(&wheel(0.0, 40.0, Modifiers::empty()));

        assert!(canvas.handle(&CanvasEvent::ZoomIn));
        assert_eq!(canvas.zoom_label(), "105%");
        assert_eq!(canvas.state().translation(), Vec2::new(0.0, -40.0));

        canvas.handle(&CanvasEvent::ZoomOut);
        canvas.handle(&CanvasEvent::ZoomOut);
        assert_eq!(canvas.zoom_label(), "95%");

        assert!(canvas.handle(&CanvasEvent::ResetView));
        assert_eq!(canvas.state(), ViewportState::IDENTITY);
        assert!(!canvas.handle(&CanvasEvent::ResetView));
    }

    #[test]
    fn view_center_anchor_keeps_center_fixed() {
        let options = CanvasOptions {
            step_anchor: StepAnchor::ViewCenter,
            view_size: Size::new(1000.0, 500.0),
            ..CanvasOptions::default()
        };
        let mut canvas = CanvasController::with_options(options).unwrap();
        let center = canvas.view_center();
        assert_eq!(center, Point::new(500.0, 250.0));
        let before = canvas.viewport().screen_to_content(center);

        canvas.handle(&CanvasEvent::ZoomIn);

        let after = canvas.viewport().screen_to_content(center);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn css_transform_reflects_state() {
        let mut canvas = CanvasController::new();
        canvas.handle(&down(1, PointerButton::Primary, 0.0, 0.0));
        canvas.handle(&move_to(1, 10.0, -5.0));
        assert_eq!(canvas.css_transform(), "translate(10px, -5px) scale(1)");
    }

    #[test]
    fn with_options_rejects_bad_config() {
        let options = CanvasOptions {
            viewport: ViewportConfig::default().with_zoom_step(0.0, 0.0),
            ..CanvasOptions::default()
        };
        assert!(CanvasController::with_options(options).is_err());
    }
}
