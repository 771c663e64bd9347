use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Half the side of the viewport at scale 1.
pub const VIEWPORT_HALF_EXTENT: f64 = 1.2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel rect",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// The square region of the plane shown at `scale` around `center`.
///
/// The imaginary axis is flipped: the region is centred on `-center.imag`, so
/// pixel row 0 maps to the most negative imaginary value. At very small scales
/// `center ± 1.2 * scale` rounds back to `center` and the region collapses.
#[must_use]
pub fn viewport_for_zoom(scale: f64, center: Complex) -> ComplexRect {
    let factor = VIEWPORT_HALF_EXTENT * scale;

    ComplexRect::new(
        Complex {
            real: center.real - factor,
            imag: -center.imag - factor,
        },
        Complex {
            real: center.real + factor,
            imag: -center.imag + factor,
        },
    )
}

/// Linearly maps a pixel onto `complex_rect`. Column `width` (one past the
/// last) would land on the upper edge, so the upper edge itself is never sampled.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let real = complex_rect.width() * pixel_position.x as f64 / pixel_rect.width() as f64
        + complex_rect.lower().real;
    let imag = complex_rect.height() * pixel_position.y as f64 / pixel_rect.height() as f64
        + complex_rect.lower().imag;

    Ok(Complex { real, imag })
}

/// Flat form of the mapping: zoom parameters in, coordinate out.
pub fn map_pixel_to_complex(
    pixel_position: Point,
    pixel_rect: PixelRect,
    scale: f64,
    center: Complex,
) -> Result<Complex, PixelToComplexCoordsError> {
    pixel_to_complex_coords(pixel_position, pixel_rect, viewport_for_zoom(scale, center))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(width: u32, height: u32) -> PixelRect {
        PixelRect::try_from_size(width, height).unwrap()
    }

    #[test]
    fn test_viewport_is_centred_with_flipped_imaginary_axis() {
        let viewport = viewport_for_zoom(1.0, Complex::new(-0.5, 0.25));

        assert_eq!(viewport.lower(), Complex::new(-0.5 - 1.2, -0.25 - 1.2));
        assert_eq!(viewport.upper(), Complex::new(-0.5 + 1.2, -0.25 + 1.2));
    }

    #[test]
    fn test_collapsed_axis_maps_every_pixel_to_lower_edge() {
        let center = Complex::new(-0.744881555193959, 0.100107514886258);
        let scale = 1.03_f64.powf(-1298.0);
        let pixel_rect = rect(6, 4);
        let viewport = viewport_for_zoom(scale, center);
        assert_eq!(viewport.width(), 0.0);

        for y in 0..4 {
            for x in 0..6 {
                let c = pixel_to_complex_coords(Point { x, y }, pixel_rect, viewport).unwrap();

                assert_eq!(c.real, viewport.lower().real);
            }
        }
    }

    #[test]
    fn test_pixel_to_complex_top_left_is_lower_corner() {
        let viewport = viewport_for_zoom(1.0, Complex::ZERO);

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, rect(100, 100), viewport);

        assert_eq!(result.unwrap(), Complex::new(-1.2, -1.2));
    }

    #[test]
    fn test_pixel_to_complex_middle_pixel_is_center() {
        let viewport = viewport_for_zoom(1.0, Complex::ZERO);

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, rect(100, 100), viewport);

        assert_eq!(result.unwrap(), Complex::ZERO);
    }

    #[test]
    fn test_two_by_one_frame_at_scale_1_3() {
        let pixel_rect = rect(2, 1);

        let left = map_pixel_to_complex(Point { x: 0, y: 0 }, pixel_rect, 1.3, Complex::ZERO).unwrap();
        let right = map_pixel_to_complex(Point { x: 1, y: 0 }, pixel_rect, 1.3, Complex::ZERO).unwrap();

        let factor = 1.2 * 1.3;
        assert_eq!(left, Complex::new(-factor, -factor));
        assert_eq!(right, Complex::new(0.0, -factor));
    }

    #[test]
    fn test_adjacent_pixels_step_by_span_over_size() {
        let pixel_rect = rect(8, 5);
        let viewport = viewport_for_zoom(0.75, Complex::new(0.3, -0.1));
        let step_x = viewport.width() / 8.0;
        let step_y = viewport.height() / 5.0;

        for y in 0..5 {
            for x in 0..7 {
                let here = pixel_to_complex_coords(Point { x, y }, pixel_rect, viewport).unwrap();
                let right = pixel_to_complex_coords(Point { x: x + 1, y }, pixel_rect, viewport).unwrap();
                assert!((right.real - here.real - step_x).abs() < 1e-12);
                assert_eq!(right.imag, here.imag);
            }
        }

        for x in 0..8 {
            for y in 0..4 {
                let here = pixel_to_complex_coords(Point { x, y }, pixel_rect, viewport).unwrap();
                let below = pixel_to_complex_coords(Point { x, y: y + 1 }, pixel_rect, viewport).unwrap();
                assert!((below.imag - here.imag - step_y).abs() < 1e-12);
                assert_eq!(below.real, here.real);
            }
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let pixel_rect = rect(640, 480);
        let pixel = Point { x: 123, y: 456 };
        let center = Complex::new(-0.744881555193959, 0.100107514886258);

        let first = map_pixel_to_complex(pixel, pixel_rect, 0.01, center).unwrap();
        let second = map_pixel_to_complex(pixel, pixel_rect, 0.01, center).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pixel_outside_rect_fails() {
        let pixel_rect = rect(100, 100);
        let viewport = viewport_for_zoom(1.0, Complex::ZERO);
        let point = Point { x: 100, y: 10 };

        let result = pixel_to_complex_coords(point, pixel_rect, viewport);

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideRect { point, pixel_rect })
        );
    }
}
