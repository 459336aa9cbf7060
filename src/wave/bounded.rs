//! Bounded sine — a sine wave fitted between two y bounds.
//!
//! The wave oscillates about `(y_min + y_max) / 2` with half the bound span as
//! amplitude. A phase shift derived from `asin` places the curve at `y_start`
//! when `x == translate_x`.

use std::f64::consts::TAU;

use super::error::ValidationError;
use super::params::BoundedSineParams;

/// A validated wave. Holds only derived constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedSine {
    average: f64,
    amplitude: f64,
    invert_factor: f64,
    phase_shift: f64,
    period: f64,
    translate_x: f64,
    translate_y: f64,
}

impl BoundedSine {
    /// Validate `params` and derive the wave constants.
    ///
    /// Only `y_min <= y_start <= y_max` is checked, comparison by comparison,
    /// so `y_min > y_max` rejects every start value. A zero period or equal
    /// bounds are accepted and yield non-finite output.
    pub fn new(params: BoundedSineParams) -> Result<Self, ValidationError> {
        let BoundedSineParams {
            y_start,
            y_min,
            y_max,
            ..
        } = params;
        if y_start < y_min || y_start > y_max {
            return Err(ValidationError::new(y_start, y_min, y_max));
        }
        Ok(Self::derive(params))
    }

    fn derive(params: BoundedSineParams) -> Self {
        let BoundedSineParams {
            y_start,
            y_min,
            y_max,
            period,
            translate_x,
            translate_y,
            invert,
        } = params;
        // Position of y_start in the bounds, remapped to [-1, 1].
        let normalized = 2.0 * (y_start - y_min) / (y_max - y_min) - 1.0;
        Self {
            average: (y_min + y_max) / 2.0,
            amplitude: (y_max - y_min) / 2.0,
            invert_factor: if invert { -1.0 } else { 1.0 },
            phase_shift: normalized.asin() * (period / TAU),
            period,
            translate_x,
            translate_y,
        }
    }

    /// Evaluate the wave at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let angle =
            self.invert_factor * TAU * (x - self.translate_x + self.phase_shift) / self.period;
        self.average + self.amplitude * angle.sin() + self.translate_y
    }

    /// Turn the wave into a plain closure.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
        move |x| self.eval(x)
    }
}

impl Default for BoundedSine {
    fn default() -> Self {
        Self::derive(BoundedSineParams::default())
    }
}
