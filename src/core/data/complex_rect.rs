use crate::core::data::complex::Complex;

/// A region of the complex plane. `lower` holds the smallest real and
/// imaginary parts, `upper` the largest; pixel row 0 maps to `lower.imag`.
///
/// Either side may be zero: a viewport narrower than f64 resolution around its
/// centre collapses, and every pixel along that axis samples `lower`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    lower: Complex,
    upper: Complex,
}

impl ComplexRect {
    #[must_use]
    pub fn new(lower: Complex, upper: Complex) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn lower(&self) -> Complex {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> Complex {
        self.upper
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper.real - self.lower.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper.imag - self.lower.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_kept() {
        let lower = Complex::new(-2.0, -1.0);
        let upper = Complex::new(1.0, 1.0);

        let rect = ComplexRect::new(lower, upper);

        assert_eq!(rect.lower(), lower);
        assert_eq!(rect.upper(), upper);
    }

    #[test]
    fn test_dimensions() {
        let rect = ComplexRect::new(Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0));

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_collapsed_side_has_zero_extent() {
        let center = -0.744881555193959;
        let half = 1.0e-17;

        let rect = ComplexRect::new(Complex::new(center - half, 0.0), Complex::new(center + half, 1.0));

        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 1.0);
    }
}
