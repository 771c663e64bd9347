pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::ports::image_sink::{ImageSinkError, ImageSinkPort};
pub use crate::controllers::zoom_sequence::{
    ConfigError, FrameScheduling, SequenceConfig, SequenceSummary, SinkFailurePolicy,
    SkippedFrame, ZoomPlan, ZoomPreset, ZoomSequenceController, ZoomSequenceError,
    scale_for_frame,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, Deadline, NeverCancel};
pub use crate::core::actions::render_frame::ports::progress_reporter::{NoProgress, ProgressReporterPort};
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, RenderStrategy, render_frame, render_frame_cancelable,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::frame::Frame;
pub use crate::core::data::frame_params::FrameParams;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::data::point::Point;
pub use crate::core::fractals::multibrot::algorithm::escape;
pub use crate::core::fractals::multibrot::colour_mapping::hsv_colour_map::colorize;
pub use crate::core::fractals::multibrot::colour_mapping::kinds::MultibrotColourMapKinds;
pub use crate::core::util::pixel_to_complex_coords::map_pixel_to_complex;
pub use crate::input::cli::args::ZoomArgs;
pub use crate::input::cli::run_zoom::run_zoom;
pub use crate::presenters::file::image_file::{ImageFileFormat, ImageFileSink, ImageFileSinkError};
pub use crate::presenters::progress::console::ConsoleProgress;
