//! Sequence driver for zoom animations.
//!
//! Turns a [`SequenceConfig`] into a validated [`ZoomPlan`], then renders one
//! frame per index with an exponentially changing scale and hands each frame
//! to an [`ImageSinkPort`](crate::controllers::ports::image_sink::ImageSinkPort).
//!
//! # Architecture
//!
//! - **Input**: `SequenceConfig`, validated into a `ZoomPlan`
//! - **Output**: `ImageSinkPort` for finished frames, `ProgressReporterPort` for progress
//! - **Core**: `render_frame` from `core/actions` does the per-frame work

mod controller;
pub mod errors;
pub mod sequence_config;
pub mod zoom_plan;

pub use controller::{SequenceSummary, SkippedFrame, ZoomSequenceController};
pub use errors::ZoomSequenceError;
pub use sequence_config::{ConfigError, SequenceConfig, ZoomPreset};
pub use zoom_plan::{FrameScheduling, SinkFailurePolicy, ZoomPlan, scale_for_frame};
