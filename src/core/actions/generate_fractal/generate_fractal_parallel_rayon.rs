use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data over rayon's work-stealing pool.
///
/// Output order matches [`generate_fractal_cancelable`](super::generate_fractal::generate_fractal_cancelable).
/// Rows are processed in parallel, each into its own vector, and flattened
/// back into row-major order. Cancellation is checked at the start of each row
/// and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
/// `on_row_complete` is called from worker threads, in completion order.
///
/// Returns [`GenerateFractalError::Cancelled`] if cancellation was requested,
/// which should be handled as expected control flow (not an error to display).
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C, R>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
    on_row_complete: &R,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
    R: Fn(u32) + Sync,
{
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0
        ..pixel_rect.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..pixel_rect.width() {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            on_row_complete(y);
            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal_cancelable;
    use std::error::Error;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(pixel.y as u64 * 10_000 + pixel.x as u64)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    fn rect(width: u32, height: u32) -> PixelRect {
        PixelRect::try_from_size(width, height).unwrap()
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm {};

        for pixel_rect in [rect(11, 9), rect(1, 1), rect(1, 7), rect(101, 101)] {
            let serial_results =
                generate_fractal_cancelable(pixel_rect, &algorithm, &NeverCancel, &|_| {}).unwrap();
            let rayon_results =
                generate_fractal_parallel_rayon_cancelable(pixel_rect, &algorithm, &NeverCancel, &|_| {})
                    .unwrap();

            assert_eq!(rayon_results, serial_results);
        }
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon_cancelable(
            rect(11, 9),
            &StubSuccessAlgorithm {},
            &cancel_token,
            &|_| {},
        );

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_propagates_algorithm_failure() {
        let result = generate_fractal_parallel_rayon_cancelable(
            rect(4, 5),
            &StubFailureAlgorithm {},
            &NeverCancel,
            &|_| {},
        );

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(_))));
    }

    #[test]
    fn test_every_row_is_reported_once() {
        let rows = Mutex::new(Vec::new());

        generate_fractal_parallel_rayon_cancelable(
            rect(3, 40),
            &StubSuccessAlgorithm {},
            &NeverCancel,
            &|row| rows.lock().unwrap().push(row),
        )
        .unwrap();

        let mut rows = rows.into_inner().unwrap();
        rows.sort_unstable();
        assert_eq!(rows, (0..40).collect::<Vec<u32>>());
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(
            rect(2, 5),
            &StubSuccessAlgorithm {},
            &cancel_token,
            &|_| {},
        );

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 5, "Expected at least 5 polls for 5 rows, got {}", polls);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        // 3000 pixels per row polls at 0, 1024 and 2048
        let result = generate_fractal_parallel_rayon_cancelable(
            rect(3000, 2),
            &StubSuccessAlgorithm {},
            &cancel_token,
            &|_| {},
        );

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 6, "Expected at least 6 polls for 2 wide rows, got {}", polls);
    }
}
