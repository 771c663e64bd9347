use std::time::Duration;

/// Observes rendering progress. Purely informational; nothing it does feeds
/// back into the computation. Rows may be reported from worker threads.
pub trait ProgressReporterPort: Send + Sync {
    /// `rows_done` counts finished rows of the frame so far, in `1..=total_rows`.
    fn row_completed(&self, frame_index: u32, rows_done: u32, total_rows: u32);

    fn frame_completed(&self, frame_index: u32, elapsed: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporterPort for NoProgress {
    #[inline]
    fn row_completed(&self, _: u32, _: u32, _: u32) {}

    #[inline]
    fn frame_completed(&self, _: u32, _: Duration) {}
}
