//! Bounded sine — sine waves pinned to a start value and held between two bounds.

pub mod wave;

pub use wave::{bounded_sine, BoundedSine, BoundedSineParams, ValidationError};
