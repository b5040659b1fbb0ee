// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::config::{ConfigError, ViewportConfig};
use crate::step::{ZoomDirection, step_scale};

/// Snapshot of the mapping from content space to screen space.
///
/// A content point `c` is drawn at `c * scale + (translate_x, translate_y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Horizontal offset of the content origin, in screen pixels.
    pub translate_x: f64,
    /// Vertical offset of the content origin, in screen pixels.
    pub translate_y: f64,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl ViewportState {
    /// The state a viewport starts in and returns to on reset.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns the content → screen transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }

    /// Converts a screen-space point into content space.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translate_x) / self.scale,
            (pt.y - self.translate_y) / self.scale,
        )
    }

    /// Converts a content-space point into screen space.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translate_x,
            pt.y * self.scale + self.translate_y,
        )
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pan/zoom state for the builder canvas.
///
/// `ViewportTransform` owns a [`ViewportState`] and keeps its scale inside the
/// configured limits. Every operation is synchronous and total: panning is
/// unbounded, zooming is clamped, and nothing here can fail once a valid
/// [`ViewportConfig`] is installed.
///
/// Pan deltas move the content: `pan_by(Vec2::new(10.0, 0.0))` shifts what is
/// drawn 10 pixels to the right. Drag handlers pass pointer movement as-is;
/// wheel handlers pass the negated wheel delta.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    state: ViewportState,
    config: ViewportConfig,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportTransform {
    /// Creates a viewport at the identity state with the default configuration.
    ///
    /// - Initial scale is `1.0`.
    /// - Initial translation is zero.
    /// - Scale is clamped to `[0.5, 3.0]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewportState::IDENTITY,
            config: ViewportConfig::default(),
        }
    }

    /// Creates a viewport with a custom configuration.
    ///
    /// The scale starts at `1.0`, clamped into the configured limits.
    pub fn with_config(config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut vp = Self {
            state: ViewportState::IDENTITY,
            config: config.normalized(),
        };
        vp.reset();
        Ok(vp)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Returns the installed configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Returns the current translation in screen pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.state.translation()
    }

    /// Replaces the scale limits, keeping the current scale inside them.
    ///
    /// The pair is normalized so that `min_scale <= max_scale`. Translation is
    /// left alone; a re-clamped scale is applied about the content origin.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) -> Result<(), ConfigError> {
        let config = self.config.with_scale_limits(min_scale, max_scale);
        config.validate()?;
        self.config = config;
        self.set_scale(self.state.scale);
        Ok(())
    }

    /// Sets the scale directly, clamped into the configured limits.
    pub fn set_scale(&mut self, scale: f64) {
        self.state.scale = self.clamp_scale(scale);
    }

    /// Pans the content by a delta in screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.state.translate_x += delta.x;
        self.state.translate_y += delta.y;
    }

    /// Pans the content by `(delta_x, delta_y)` screen pixels.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.pan_by(Vec2::new(delta_x, delta_y));
    }

    /// Zooms by a delta proportional to the current scale, keeping `anchor`
    /// fixed.
    ///
    /// The new scale is `scale + scale_delta * scale`, clamped. The content
    /// point under `anchor` (in screen space) is drawn at `anchor` again
    /// afterwards. At a limit the translation is recomputed with a ratio of
    /// one, which leaves it unchanged.
    pub fn zoom_about_point(&mut self, anchor: Point, scale_delta: f64) {
        let scale = self.state.scale;
        let new_scale = self.clamp_scale(scale + scale_delta * scale);
        self.rescale_about(anchor, new_scale);
    }

    /// Moves the scale one quantized step without touching the translation.
    ///
    /// See [`step_scale`] for the rounding rules. The result is clamped into
    /// the configured limits, so stepping past a limit is a no-op.
    pub fn zoom_step(&mut self, direction: ZoomDirection) {
        self.state.scale = self.stepped_scale(direction);
    }

    /// Moves the scale one quantized step, keeping `anchor` fixed.
    pub fn zoom_step_about(&mut self, direction: ZoomDirection, anchor: Point) {
        let new_scale = self.stepped_scale(direction);
        self.rescale_about(anchor, new_scale);
    }

    /// Returns to the identity state.
    ///
    /// If `1.0` lies outside the configured limits the scale is clamped.
    pub fn reset(&mut self) {
        self.state = ViewportState {
            scale: self.clamp_scale(1.0),
            ..ViewportState::IDENTITY
        };
    }

    /// Returns the current scale as a rounded percentage, as shown in the zoom readout.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scale is clamped to a small positive range before rounding"
    )]
    pub fn zoom_percent(&self) -> u32 {
        (self.state.scale * 100.0).round() as u32
    }

    /// Returns the content → screen transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.state.to_affine()
    }

    /// Converts a screen-space point into content space.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        self.state.screen_to_content(pt)
    }

    /// Converts a content-space point into screen space.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        self.state.content_to_screen(pt)
    }

    /// Converts a screen-space rectangle into content space.
    ///
    /// Passing the viewport's own bounds yields the visible content area.
    #[must_use]
    pub fn screen_to_content_rect(&self, rect: Rect) -> Rect {
        let p0 = self.screen_to_content(Point::new(rect.x0, rect.y0));
        let p1 = self.screen_to_content(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            state: self.state,
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
            zoom_step: self.config.zoom_step,
            zoom_percent: self.zoom_percent(),
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    fn stepped_scale(&self, direction: ZoomDirection) -> f64 {
        let next = step_scale(
            self.state.scale,
            direction,
            self.config.zoom_step,
            self.config.step_epsilon,
        );
        self.clamp_scale(next)
    }

    fn rescale_about(&mut self, anchor: Point, new_scale: f64) {
        let ratio = new_scale / self.state.scale;
        self.state.translate_x = anchor.x - (anchor.x - self.state.translate_x) * ratio;
        self.state.translate_y = anchor.y - (anchor.y - self.state.translate_y) * ratio;
        self.state.scale = new_scale;
    }
}

/// Debug snapshot of a [`ViewportTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current state.
    pub state: ViewportState,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Quantization step for discrete zoom.
    pub zoom_step: f64,
    /// Scale as a rounded percentage.
    pub zoom_percent: u32,
}
