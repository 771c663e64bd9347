use std::convert::Infallible;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal_cancelable;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::actions::render_frame::ports::progress_reporter::{
    NoProgress, ProgressReporterPort,
};
use crate::core::data::frame::Frame;
use crate::core::data::frame_params::FrameParams;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::multibrot::algorithm::MultibrotAlgorithm;
use crate::core::fractals::multibrot::colour_mapping::hsv_colour_map::MultibrotHsvColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// How the pixels of a single frame are spread over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// One thread, pixels in row-major order.
    Serial,
    /// Rows fanned out over the rayon pool.
    #[default]
    ParallelRows,
}

#[derive(Debug)]
pub enum RenderFrameError {
    Cancelled(Cancelled),
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderFrameError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Algorithm(e),
        }
    }
}

impl From<GeneratePixelBufferError<Infallible>> for RenderFrameError {
    fn from(err: GeneratePixelBufferError<Infallible>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::ColourMap(never) => match never {},
            GeneratePixelBufferError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Renders one frame with no progress reporting and no cancellation.
pub fn render_frame(params: &FrameParams, strategy: RenderStrategy) -> Result<Frame, RenderFrameError> {
    render_frame_cancelable(params, strategy, &NoProgress, &NeverCancel)
}

/// Renders every pixel of the frame described by `params` and tags the
/// resulting buffer with `params.frame_index`.
///
/// Progress is reported once per finished row and once when the frame is
/// complete. The buffer always covers the whole frame; cancellation yields
/// [`RenderFrameError::Cancelled`] rather than a partial image.
pub fn render_frame_cancelable<P, C>(
    params: &FrameParams,
    strategy: RenderStrategy,
    progress: &P,
    cancel: &C,
) -> Result<Frame, RenderFrameError>
where
    P: ProgressReporterPort + ?Sized,
    C: CancelToken,
{
    let start = Instant::now();
    let algorithm = MultibrotAlgorithm::for_frame(params);
    let colour_map = MultibrotHsvColourMap::new(params.colour_variation, params.colour_scheme);
    let pixel_rect = algorithm.pixel_rect();
    let total_rows = pixel_rect.height();

    let rows_done = AtomicU32::new(0);
    let on_row_complete = |_row: u32| {
        let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
        progress.row_completed(params.frame_index, done, total_rows);
    };

    let escapes = match strategy {
        RenderStrategy::Serial => {
            generate_fractal_cancelable(pixel_rect, &algorithm, cancel, &on_row_complete)?
        }
        RenderStrategy::ParallelRows => {
            generate_fractal_parallel_rayon_cancelable(pixel_rect, &algorithm, cancel, &on_row_complete)?
        }
    };

    let pixel_buffer = generate_pixel_buffer_cancelable(escapes, &colour_map, pixel_rect, cancel)?;

    progress.frame_completed(params.frame_index, start.elapsed());

    Ok(Frame {
        index: params.frame_index,
        pixel_buffer,
    })
}
