use std::error::Error;
use std::time::{Duration, Instant};

use crate::controllers::ports::image_sink::ImageSinkPort;
use crate::controllers::zoom_sequence::{
    SequenceSummary, ZoomPlan, ZoomSequenceController, ZoomSequenceError,
};
use crate::core::actions::cancellation::{CancelToken, Deadline};
use crate::core::actions::render_frame::ports::progress_reporter::{
    NoProgress, ProgressReporterPort,
};
use crate::input::cli::args::ZoomArgs;
use crate::presenters::file::image_file::ImageFileSink;
use crate::presenters::progress::console::ConsoleProgress;

/// Renders the sequence described by `args` into image files.
///
/// Hitting the time limit is not an error: the frames written so far are
/// kept and returned in the summary.
pub fn run_zoom(args: &ZoomArgs) -> Result<SequenceSummary, Box<dyn Error>> {
    let plan = args.sequence_config().validate()?;
    let sink = ImageFileSink::new(&args.output_dir, args.prefix.as_str(), args.image_format())?;
    let deadline = args.time_limit_secs.map(|secs| Deadline::after(Duration::from_secs(secs)));
    let cancel = || deadline.is_some_and(|d| d.is_cancelled());

    if !args.quiet {
        println!("Rendering multibrot zoom...");
        println!("Image size: {}x{}", plan.base.width, plan.base.height);
        println!("Max iterations: {}", plan.base.max_iterations);
        println!("Degree: {}", plan.base.degree);
        println!("Colour scheme: {}", plan.base.colour_scheme);
        println!(
            "Center: ({}, {})",
            plan.base.center.real, plan.base.center.imag
        );
        println!(
            "Frames: {}..={} (decay rate {})",
            plan.start_frame, plan.frame_count, plan.decay_rate
        );
        println!("Output: {}", sink.frame_path(plan.start_frame).display());
    }

    let start = Instant::now();
    let result = if args.quiet {
        run_plan(sink, NoProgress, &plan, &cancel)
    } else {
        run_plan(sink, ConsoleProgress::new(plan.frame_count), &plan, &cancel)
    };

    let summary = match result {
        Ok(summary) => summary,
        Err(ZoomSequenceError::Cancelled { completed }) => {
            println!("Time limit reached, stopping");
            completed
        }
        Err(err) => return Err(err.into()),
    };

    for skipped in &summary.skipped {
        eprintln!("Skipped frame {}: {}", skipped.index, skipped.reason);
    }

    if !args.quiet {
        println!(
            "Wrote {} frame(s) in {:?}",
            summary.written.len(),
            start.elapsed()
        );
    }

    Ok(summary)
}

fn run_plan<S, P, C>(
    sink: S,
    progress: P,
    plan: &ZoomPlan,
    cancel: &C,
) -> Result<SequenceSummary, ZoomSequenceError>
where
    S: ImageSinkPort,
    P: ProgressReporterPort,
    C: CancelToken,
{
    ZoomSequenceController::new(sink, progress).run(plan, cancel)
}
