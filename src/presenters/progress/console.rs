use std::time::Duration;

use crate::core::actions::render_frame::ports::progress_reporter::ProgressReporterPort;

const ROW_PROGRESS_STEPS: u64 = 4;

/// Prints a line to stdout per finished frame and quarter-frame progress to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgress {
    frame_count: u32,
}

impl ConsoleProgress {
    pub fn new(frame_count: u32) -> Self {
        Self { frame_count }
    }
}

/// True when `rows_done` is the first row to reach the next progress step.
fn crosses_step(rows_done: u32, total_rows: u32) -> bool {
    if rows_done == 0 || total_rows == 0 {
        return false;
    }

    let step = |rows: u32| rows as u64 * ROW_PROGRESS_STEPS / total_rows as u64;
    step(rows_done) != step(rows_done - 1)
}

impl ProgressReporterPort for ConsoleProgress {
    fn row_completed(&self, frame_index: u32, rows_done: u32, total_rows: u32) {
        if crosses_step(rows_done, total_rows) {
            eprintln!(
                "frame {}: {}%",
                frame_index,
                rows_done as u64 * 100 / total_rows as u64
            );
        }
    }

    fn frame_completed(&self, frame_index: u32, elapsed: Duration) {
        println!("Frame {}/{} done in {:?}", frame_index, self.frame_count, elapsed);
    }
}
