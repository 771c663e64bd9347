use std::error::Error;
use std::fmt;

use crate::controllers::ports::image_sink::ImageSinkError;
use crate::controllers::zoom_sequence::controller::SequenceSummary;
use crate::core::actions::render_frame::render_frame::RenderFrameError;

#[derive(Debug)]
pub enum ZoomSequenceError {
    /// The cancel token fired; `completed` lists what reached the sink first.
    Cancelled { completed: SequenceSummary },
    Render {
        frame_index: u32,
        source: RenderFrameError,
    },
    Sink(ImageSinkError),
}

impl ZoomSequenceError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

impl fmt::Display for ZoomSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled { completed } => write!(
                f,
                "zoom sequence cancelled after writing {} frame(s)",
                completed.written.len()
            ),
            Self::Render {
                frame_index,
                source,
            } => write!(f, "failed to render frame {}: {}", frame_index, source),
            Self::Sink(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ZoomSequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled { .. } => None,
            Self::Render { source, .. } => Some(source),
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<ImageSinkError> for ZoomSequenceError {
    fn from(err: ImageSinkError) -> Self {
        Self::Sink(err)
    }
}
