// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantized zoom steps for discrete +/- controls.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor` and `ceil`

/// Direction of a discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Increase the scale.
    In,
    /// Decrease the scale.
    Out,
}

/// Returns the next scale on the `step` grid in `direction`, before clamping.
///
/// Zooming in rounds up to the next multiple of `step`; zooming out rounds
/// down to the previous one. When floating-point drift leaves the quantized
/// value within `epsilon` of `scale`, the result moves one more `step`, so
/// every call changes the scale by a visible amount.
///
/// ```
/// use builder_view::{ZoomDirection, step_scale};
///
/// // Off-grid values snap to the grid.
/// let up = step_scale(1.02, ZoomDirection::In, 0.05, 0.001);
/// assert!((up - 1.05).abs() < 1e-12);
///
/// // On-grid values advance a full step.
/// let down = step_scale(1.0, ZoomDirection::Out, 0.05, 0.001);
/// assert!((down - 0.95).abs() < 1e-12);
/// ```
#[must_use]
pub fn step_scale(scale: f64, direction: ZoomDirection, step: f64, epsilon: f64) -> f64 {
    let per_unit = 1.0 / step;
    match direction {
        ZoomDirection::In => {
            let next = ((scale * per_unit).floor() + 1.0) / per_unit;
            if next <= scale + epsilon {
                next + step
            } else {
                next
            }
        }
        ZoomDirection::Out => {
            let next = ((scale * per_unit).ceil() - 1.0) / per_unit;
            if next >= scale - epsilon {
                next - step
            } else {
                next
            }
        }
    }
}
