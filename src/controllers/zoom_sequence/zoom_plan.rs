use std::ops::RangeInclusive;

use crate::core::actions::render_frame::render_frame::RenderStrategy;
use crate::core::data::frame_params::FrameParams;

/// How frames of a sequence share the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameScheduling {
    /// One frame at a time, in index order.
    #[default]
    Sequential,
    /// Frames rendered concurrently; the sink sees them in completion order.
    Parallel,
}

/// What to do when the image sink fails to store a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkFailurePolicy {
    /// Stop the sequence and report the error.
    #[default]
    Abort,
    /// Record the frame as skipped and carry on.
    Skip,
}

/// Scale of frame `frame_index` (1-based): `base_scale * decay_rate^(1 - frame_index)`.
///
/// A decay rate above 1 zooms in as the index grows, below 1 zooms out.
#[must_use]
pub fn scale_for_frame(base_scale: f64, decay_rate: f64, frame_index: u32) -> f64 {
    base_scale * decay_rate.powf(1.0 - frame_index as f64)
}

/// A validated zoom sequence, ready to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPlan {
    /// Parameters shared by every frame; its `scale` is the base scale.
    pub base: FrameParams,
    pub frame_count: u32,
    pub start_frame: u32,
    pub decay_rate: f64,
    pub strategy: RenderStrategy,
    pub scheduling: FrameScheduling,
    pub on_sink_error: SinkFailurePolicy,
}

impl ZoomPlan {
    /// Logical indices of the frames this plan renders. Empty when
    /// `start_frame` lies beyond `frame_count`.
    #[must_use]
    pub fn frame_indices(&self) -> RangeInclusive<u32> {
        self.start_frame..=self.frame_count
    }

    #[must_use]
    pub fn frame_params(&self, frame_index: u32) -> FrameParams {
        let scale = scale_for_frame(self.base.scale, self.decay_rate, frame_index);
        self.base.with_zoom(scale, frame_index)
    }
}
