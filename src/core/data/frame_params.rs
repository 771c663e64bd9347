use std::num::NonZeroU32;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::multibrot::colour_mapping::kinds::MultibrotColourMapKinds;
use crate::core::util::pixel_to_complex_coords::viewport_for_zoom;

/// Everything needed to render one frame of a zoom sequence.
///
/// Only `scale` and `frame_index` change between frames of a sequence, but
/// every field is independently settable. The sizes are `NonZeroU32` so the
/// renderer never has to check them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameParams {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    pub max_iterations: NonZeroU32,
    pub scale: f64,
    pub center: Complex,
    pub colour_variation: f64,
    pub colour_scheme: MultibrotColourMapKinds,
    pub degree: NonZeroU32,
    pub frame_index: u32,
}

impl FrameParams {
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::new(self.width, self.height)
    }

    #[must_use]
    pub fn viewport(&self) -> ComplexRect {
        viewport_for_zoom(self.scale, self.center)
    }

    #[must_use]
    pub fn with_zoom(self, scale: f64, frame_index: u32) -> Self {
        Self {
            scale,
            frame_index,
            ..self
        }
    }
}
