//! Bounded sine waves — validated parameters in, pure `f64 -> f64` functions out.

pub mod bounded;
pub mod error;
pub mod params;

pub use bounded::BoundedSine;
pub use error::ValidationError;
pub use params::BoundedSineParams;

/// Build a sine function `f` with `f(translate_x) == y_start + translate_y`
/// whose output stays between the bounds, shifted by `translate_y`.
///
/// Fails only when `y_start < y_min` or `y_start > y_max`.
pub fn bounded_sine(
    params: BoundedSineParams,
) -> Result<impl Fn(f64) -> f64 + Copy + Send + Sync, ValidationError> {
    BoundedSine::new(params).map(BoundedSine::into_fn)
}
