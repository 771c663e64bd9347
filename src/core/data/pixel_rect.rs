use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// The pixel grid of one frame, anchored at (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl PixelRect {
    #[must_use]
    pub fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    pub fn try_from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(PixelRectError::InvalidSize { width, height }),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width() && point.y < self.height()
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::try_from_size(121, 101).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        assert_eq!(
            PixelRect::try_from_size(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelRect::try_from_size(10, 0),
            Err(PixelRectError::InvalidSize { width: 10, height: 0 })
        );
        assert_eq!(
            PixelRect::try_from_size(0, 0),
            Err(PixelRectError::InvalidSize { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        let rect = PixelRect::try_from_size(1, 1).unwrap();

        assert_eq!(rect.size(), 1);
        assert!(rect.contains_point(Point { x: 0, y: 0 }));
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::try_from_size(100, 50).unwrap();

        assert!(rect.contains_point(Point { x: 0, y: 0 }));
        assert!(rect.contains_point(Point { x: 99, y: 49 }));
        assert!(!rect.contains_point(Point { x: 100, y: 10 }));
        assert!(!rect.contains_point(Point { x: 10, y: 50 }));
    }
}
