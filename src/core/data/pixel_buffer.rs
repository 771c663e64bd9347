use std::error::Error;
use std::fmt;

use crate::core::data::pixel_rect::PixelRect;

/// Bytes per pixel: one each for red, green and blue.
pub const BYTES_PER_PIXEL: usize = 3;

pub type PixelBufferData = Vec<u8>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    /// The byte count does not match `width * height * 3`.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "frame needs {} RGB bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl Error for PixelBufferError {}

/// The finished RGB image of one frame, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    bytes: PixelBufferData,
}

impl PixelBuffer {
    /// Wraps `bytes` when they cover `pixel_rect` exactly.
    pub fn from_data(pixel_rect: PixelRect, bytes: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = pixel_rect.size() as usize * BYTES_PER_PIXEL;

        if bytes.len() != expected {
            return Err(PixelBufferError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self { pixel_rect, bytes })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.bytes
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.bytes.len()
    }
}
