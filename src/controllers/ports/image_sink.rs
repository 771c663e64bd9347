use std::error::Error;
use std::fmt;

use crate::core::data::frame::Frame;

/// Failure to persist one frame, whatever the underlying cause.
#[derive(Debug)]
pub struct ImageSinkError {
    frame_index: u32,
    source: Box<dyn Error + Send + Sync>,
}

impl ImageSinkError {
    pub fn new(frame_index: u32, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            frame_index,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }
}

impl fmt::Display for ImageSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write frame {}: {}", self.frame_index, self.source)
    }
}

impl Error for ImageSinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Receives finished frames. Takes ownership of the pixels; encoding, naming
/// and storage are entirely the sink's business. Frames rendered in parallel
/// may arrive out of index order.
pub trait ImageSinkPort: Send + Sync {
    fn write_frame(&self, frame: Frame) -> Result<(), ImageSinkError>;
}
