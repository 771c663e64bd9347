use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::controllers::ports::image_sink::ImageSinkPort;
use crate::controllers::zoom_sequence::errors::ZoomSequenceError;
use crate::controllers::zoom_sequence::zoom_plan::{FrameScheduling, SinkFailurePolicy, ZoomPlan};
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::ports::progress_reporter::ProgressReporterPort;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame_cancelable};

/// A frame the sink failed to store under [`SinkFailurePolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFrame {
    pub index: u32,
    pub reason: String,
}

/// What a finished (or cancelled) run handed to the sink, by frame index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceSummary {
    /// Ascending.
    pub written: Vec<u32>,
    pub skipped: Vec<SkippedFrame>,
}

enum FrameOutcome {
    Written(u32),
    Skipped(SkippedFrame),
    Cancelled,
    Failed(ZoomSequenceError),
}

/// Drives a [`ZoomPlan`]: renders each frame at its scheduled zoom and hands
/// it to the sink.
pub struct ZoomSequenceController<S, P> {
    sink: S,
    progress: P,
}

impl<S, P> ZoomSequenceController<S, P>
where
    S: ImageSinkPort,
    P: ProgressReporterPort,
{
    pub fn new(sink: S, progress: P) -> Self {
        Self { sink, progress }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Renders frames `plan.start_frame..=plan.frame_count`.
    ///
    /// The token is polled between frames and inside each render. A cancelled
    /// run reports the frames already stored; the frame in flight is dropped,
    /// never written partially. Under [`FrameScheduling::Parallel`] the first
    /// failure stops frames that have not started yet, and the failure with
    /// the lowest frame index is returned.
    pub fn run<C: CancelToken>(
        &self,
        plan: &ZoomPlan,
        cancel: &C,
    ) -> Result<SequenceSummary, ZoomSequenceError> {
        match plan.scheduling {
            FrameScheduling::Sequential => self.run_sequential(plan, cancel),
            FrameScheduling::Parallel => self.run_parallel(plan, cancel),
        }
    }

    fn run_sequential<C: CancelToken>(
        &self,
        plan: &ZoomPlan,
        cancel: &C,
    ) -> Result<SequenceSummary, ZoomSequenceError> {
        let mut summary = SequenceSummary::default();

        for frame_index in plan.frame_indices() {
            if cancel.is_cancelled() {
                return Err(ZoomSequenceError::Cancelled { completed: summary });
            }

            match self.render_and_store(plan, frame_index, cancel) {
                FrameOutcome::Written(index) => summary.written.push(index),
                FrameOutcome::Skipped(skipped) => summary.skipped.push(skipped),
                FrameOutcome::Cancelled => {
                    return Err(ZoomSequenceError::Cancelled { completed: summary });
                }
                FrameOutcome::Failed(err) => return Err(err),
            }
        }

        Ok(summary)
    }

    fn run_parallel<C: CancelToken>(
        &self,
        plan: &ZoomPlan,
        cancel: &C,
    ) -> Result<SequenceSummary, ZoomSequenceError> {
        let failed = AtomicBool::new(false);
        let stop = || failed.load(Ordering::Relaxed) || cancel.is_cancelled();

        let outcomes: Vec<FrameOutcome> = plan
            .frame_indices()
            .into_par_iter()
            .map(|frame_index| {
                if stop() {
                    return FrameOutcome::Cancelled;
                }

                let outcome = self.render_and_store(plan, frame_index, &stop);
                if matches!(outcome, FrameOutcome::Failed(_)) {
                    failed.store(true, Ordering::Relaxed);
                }
                outcome
            })
            .collect();

        let mut summary = SequenceSummary::default();
        let mut cancelled = false;

        for outcome in outcomes {
            match outcome {
                FrameOutcome::Written(index) => summary.written.push(index),
                FrameOutcome::Skipped(skipped) => summary.skipped.push(skipped),
                FrameOutcome::Cancelled => cancelled = true,
                FrameOutcome::Failed(err) => return Err(err),
            }
        }

        if cancelled {
            return Err(ZoomSequenceError::Cancelled { completed: summary });
        }

        Ok(summary)
    }

    fn render_and_store<C: CancelToken>(
        &self,
        plan: &ZoomPlan,
        frame_index: u32,
        cancel: &C,
    ) -> FrameOutcome {
        let params = plan.frame_params(frame_index);

        let frame = match render_frame_cancelable(&params, plan.strategy, &self.progress, cancel) {
            Ok(frame) => frame,
            Err(RenderFrameError::Cancelled(_)) => return FrameOutcome::Cancelled,
            Err(source) => {
                return FrameOutcome::Failed(ZoomSequenceError::Render {
                    frame_index,
                    source,
                });
            }
        };

        match self.sink.write_frame(frame) {
            Ok(()) => FrameOutcome::Written(frame_index),
            Err(err) => match plan.on_sink_error {
                SinkFailurePolicy::Abort => FrameOutcome::Failed(err.into()),
                SinkFailurePolicy::Skip => FrameOutcome::Skipped(SkippedFrame {
                    index: frame_index,
                    reason: err.to_string(),
                }),
            },
        }
    }
}
