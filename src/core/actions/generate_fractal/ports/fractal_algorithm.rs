use std::error::Error;
use crate::core::data::point::Point;

/// Computes a per-pixel value for a fractal. Implementations must be pure so
/// pixels can be evaluated in any order and on any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
