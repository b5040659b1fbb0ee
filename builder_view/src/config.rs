// Copyright 2025 the Atelier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Scale limits and step sizes for a [`crate::ViewportTransform`].
///
/// The defaults match the builder canvas: scale is kept within `[0.5, 3.0]`,
/// the zoom buttons move in 5% increments, and a wheel notch of 100 units
/// under Ctrl zooms by 10%.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Smallest allowed scale. Must be finite and strictly positive.
    pub min_scale: f64,
    /// Largest allowed scale. Must be finite and strictly positive.
    pub max_scale: f64,
    /// Quantization step used by [`crate::ViewportTransform::zoom_step`].
    pub zoom_step: f64,
    /// Slack below which a quantized step counts as "no change" and is
    /// advanced by one more step.
    pub step_epsilon: f64,
    /// Scale delta per wheel unit when zooming with the wheel.
    pub wheel_zoom_sensitivity: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            zoom_step: 0.05,
            step_epsilon: 0.001,
            wheel_zoom_sensitivity: 0.001,
        }
    }
}

impl ViewportConfig {
    /// Returns a copy with the given scale limits.
    ///
    /// The pair is normalized so that `min_scale <= max_scale`.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with the given zoom step and epsilon guard.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64, epsilon: f64) -> Self {
        self.zoom_step = step;
        self.step_epsilon = epsilon;
        self
    }

    /// Returns a copy with the given wheel zoom sensitivity.
    #[must_use]
    pub fn with_wheel_zoom_sensitivity(mut self, sensitivity: f64) -> Self {
        self.wheel_zoom_sensitivity = sensitivity;
        self
    }

    /// Checks that every field is usable.
    ///
    /// Scale limits that are out of order are accepted here; they are
    /// normalized when the configuration is installed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("zoom_step", self.zoom_step),
            ("step_epsilon", self.step_epsilon),
            ("wheel_zoom_sensitivity", self.wheel_zoom_sensitivity),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field });
            }
        }
        for value in [self.min_scale, self.max_scale] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveScale { value });
            }
        }
        if self.zoom_step <= 0.0 {
            return Err(ConfigError::NonPositiveStep {
                value: self.zoom_step,
            });
        }
        if self.step_epsilon < 0.0 || self.step_epsilon >= self.zoom_step {
            return Err(ConfigError::InvalidEpsilon {
                epsilon: self.step_epsilon,
                step: self.zoom_step,
            });
        }
        Ok(())
    }

    /// Returns the configuration with ordered scale limits.
    pub(crate) fn normalized(self) -> Self {
        let (min_scale, max_scale) = (self.min_scale, self.max_scale);
        self.with_scale_limits(min_scale, max_scale)
    }
}

/// Error returned when a [`ViewportConfig`] cannot be used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A field was NaN or infinite.
    NonFiniteValue {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A scale limit was zero or negative.
    NonPositiveScale {
        /// The rejected limit.
        value: f64,
    },
    /// The zoom step was zero or negative.
    NonPositiveStep {
        /// The rejected step.
        value: f64,
    },
    /// The epsilon guard was negative or not smaller than the step.
    InvalidEpsilon {
        /// The rejected epsilon.
        epsilon: f64,
        /// The step it was checked against.
        step: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue { field } => write!(f, "{field} must be finite"),
            Self::NonPositiveScale { value } => {
                write!(f, "scale limit {value} must be greater than zero")
            }
            Self::NonPositiveStep { value } => {
                write!(f, "zoom step {value} must be greater than zero")
            }
            Self::InvalidEpsilon { epsilon, step } => write!(
                f,
                "step epsilon {epsilon} must be non-negative and below the zoom step {step}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ViewportConfig};

    #[test]
    fn default_config_is_valid() {
        let config = ViewportConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 3.0);
    }

    #[test]
    fn scale_limits_are_normalized() {
        let config = ViewportConfig::default().with_scale_limits(4.0, 0.25);
        assert_eq!(config.min_scale, 0.25);
        assert_eq!(config.max_scale, 4.0);
    }

    #[test]
    fn rejects_non_positive_and_non_finite_values() {
        let zero_min = ViewportConfig::default().with_scale_limits(0.0, 2.0);
        assert_eq!(
            zero_min.validate(),
            Err(ConfigError::NonPositiveScale { value: 0.0 })
        );

        let nan_step = ViewportConfig::default().with_zoom_step(f64::NAN, 0.001);
        assert_eq!(
            nan_step.validate(),
            Err(ConfigError::NonFiniteValue { field: "zoom_step" })
        );

        let negative_step = ViewportConfig::default().with_zoom_step(-0.1, 0.0);
        assert_eq!(
            negative_step.validate(),
            Err(ConfigError::NonPositiveStep { value: -0.1 })
        );
    }

    #[test]
    fn epsilon_must_stay_below_step() {
        let config = ViewportConfig::default().with_zoom_step(0.1, 0.1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEpsilon {
                epsilon: 0.1,
                step: 0.1,
            })
        );
        assert!(
            ViewportConfig::default()
                .with_zoom_step(0.1, 0.0)
                .validate()
                .is_ok()
        );
    }
}
