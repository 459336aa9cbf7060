//! Error type for bounded sine construction.

use std::fmt;

/// Returned when `y_start < y_min` or `y_start > y_max`.
///
/// The comparisons are not reordered, so inverted bounds (`y_min > y_max`)
/// reject every start value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationError {
    pub y_start: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ValidationError {
    pub const MESSAGE: &'static str = "yStart must be between yMin and yMax";

    pub fn new(y_start: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            y_start,
            y_min,
            y_max,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_contract_message() {
        let err = ValidationError::new(-1.0, 0.0, 5.0);
        assert_eq!(err.to_string(), "yStart must be between yMin and yMax");
    }

    #[test]
    fn debug_carries_values() {
        let err = ValidationError::new(-1.0, 6.0, 5.0);
        let dbg = format!("{err:?}");
        assert!(dbg.contains("y_start: -1.0"), "got {dbg}");
        assert!(dbg.contains("y_min: 6.0"), "got {dbg}");
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationError::new(9.0, 0.0, 1.0));
        assert_eq!(err.to_string(), ValidationError::MESSAGE);
    }
}
