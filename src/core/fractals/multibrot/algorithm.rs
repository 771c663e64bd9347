use std::num::NonZeroU32;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::frame_params::FrameParams;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Modulus beyond which a point has escaped. Kept at 2 for every degree.
pub const BAILOUT_RADIUS: f64 = 2.0;

/// Iterates `z <- z^degree + c` from `z = 0` for at most `max_iterations` passes.
///
/// An escaping point reports the 0-based pass at which `|z|` first exceeded
/// the bailout radius. A point that never escapes reports the index of the
/// final pass, `max_iterations - 1`, with `in_set` raised.
#[must_use]
pub fn escape(max_iterations: NonZeroU32, c: Complex, degree: NonZeroU32) -> EscapeResult {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations.get() {
        z = z.powu(degree.get()) + c;
        if z.magnitude() > BAILOUT_RADIUS {
            return EscapeResult {
                iterations: iteration,
                in_set: false,
            };
        }
    }

    EscapeResult {
        iterations: max_iterations.get() - 1,
        in_set: true,
    }
}

#[derive(Debug)]
pub struct MultibrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: NonZeroU32,
    degree: NonZeroU32,
}

impl FractalAlgorithm for MultibrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(escape(self.max_iterations, c, self.degree))
    }
}

impl MultibrotAlgorithm {
    #[must_use]
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: NonZeroU32,
        degree: NonZeroU32,
    ) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            max_iterations,
            degree,
        }
    }

    #[must_use]
    pub fn for_frame(params: &FrameParams) -> Self {
        Self::new(
            params.pixel_rect(),
            params.viewport(),
            params.max_iterations,
            params.degree,
        )
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::pixel_to_complex_coords::viewport_for_zoom;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn origin_never_escapes() {
        let result = escape(nz(10), Complex::ZERO, nz(2));

        assert_eq!(
            result,
            EscapeResult {
                iterations: 9,
                in_set: true
            }
        );
    }

    #[test]
    fn origin_never_escapes_for_higher_degrees() {
        for degree in 1..=6 {
            let result = escape(nz(25), Complex::ZERO, nz(degree));
            assert!(result.in_set);
            assert_eq!(result.iterations, 24);
        }
    }

    #[test]
    fn single_iteration_in_set_reports_zero() {
        let result = escape(nz(1), Complex::ZERO, nz(2));

        assert_eq!(
            result,
            EscapeResult {
                iterations: 0,
                in_set: true
            }
        );
    }

    #[test]
    fn far_point_escapes_on_first_pass() {
        let result = escape(nz(10), Complex::new(3.0, 0.0), nz(2));

        assert_eq!(
            result,
            EscapeResult {
                iterations: 0,
                in_set: false
            }
        );
    }

    #[test]
    fn minus_two_stays_on_the_boundary() {
        // -2 -> 2 -> 2 -> ...; |z| never exceeds 2
        let result = escape(nz(20), Complex::new(-2.0, 0.0), nz(2));

        assert!(result.in_set);
        assert_eq!(result.iterations, 19);
    }

    #[test]
    fn point_just_outside_the_cusp_escapes_late() {
        let result = escape(nz(20), Complex::new(0.3, 0.0), nz(2));

        assert_eq!(
            result,
            EscapeResult {
                iterations: 11,
                in_set: false
            }
        );
    }

    #[test]
    fn escape_is_deterministic() {
        let c = Complex::new(-0.743643887037151, 0.131825904205330);

        let first = escape(nz(500), c, nz(2));
        let second = escape(nz(500), c, nz(2));

        assert_eq!(first, second);
    }

    #[test]
    fn escaped_iterations_stay_below_max() {
        for step in 0..50 {
            let c = Complex::new(-2.0 + step as f64 * 0.08, 0.6);
            let result = escape(nz(40), c, nz(3));
            assert!(result.iterations < 40);
        }
    }

    #[test]
    fn compute_maps_pixel_then_escapes() {
        let pixel_rect = PixelRect::try_from_size(2, 1).unwrap();
        let viewport = viewport_for_zoom(1.3, Complex::ZERO);
        let algorithm = MultibrotAlgorithm::new(pixel_rect, viewport, nz(10), nz(2));

        assert_eq!(
            algorithm.compute(Point { x: 0, y: 0 }).unwrap(),
            EscapeResult {
                iterations: 0,
                in_set: false
            }
        );
        assert_eq!(
            algorithm.compute(Point { x: 1, y: 0 }).unwrap(),
            EscapeResult {
                iterations: 1,
                in_set: false
            }
        );
    }

    #[test]
    fn compute_rejects_pixel_outside_frame() {
        let pixel_rect = PixelRect::try_from_size(2, 1).unwrap();
        let viewport = viewport_for_zoom(1.0, Complex::ZERO);
        let algorithm = MultibrotAlgorithm::new(pixel_rect, viewport, nz(10), nz(2));

        assert!(algorithm.compute(Point { x: 0, y: 1 }).is_err());
    }
}
