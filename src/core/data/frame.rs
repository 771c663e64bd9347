use crate::core::data::pixel_buffer::PixelBuffer;

/// A finished frame: its logical index in the sequence and its pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u32,
    pub pixel_buffer: PixelBuffer,
}
