//! Wave parameters — bounds, start value, period and translation.
//!
//! Every field is optional when deserialized; missing keys fall back to the
//! unit sine (`y_min = -1`, `y_max = 1`, `period = 1`, starting at 0).

use serde::{Deserialize, Serialize};

use super::bounded::BoundedSine;
use super::error::ValidationError;

/// Configuration for a [`BoundedSine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundedSineParams {
    /// Value of the wave at `x = translate_x`, before the y translation.
    pub y_start: f64,
    /// Lower bound of the oscillation.
    pub y_min: f64,
    /// Upper bound of the oscillation.
    pub y_max: f64,
    /// Length of one full cycle along x.
    pub period: f64,
    /// Shift applied along x.
    pub translate_x: f64,
    /// Shift applied along y.
    pub translate_y: f64,
    /// Mirror the oscillation about the midline.
    pub invert: bool,
}

impl BoundedSineParams {
    /// Parse parameters from a YAML document. Absent keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Validate and build the wave.
    pub fn build(self) -> Result<BoundedSine, ValidationError> {
        BoundedSine::new(self)
    }
}

impl Default for BoundedSineParams {
    fn default() -> Self {
        Self {
            y_start: 0.0,
            y_min: -1.0,
            y_max: 1.0,
            period: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            invert: false,
        }
    }
}
