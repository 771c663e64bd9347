use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Single-threaded generator: visits every pixel once, top to bottom and left
/// to right, and returns the results in that order.
///
/// `on_row_complete` receives the index of each row as soon as it finishes.
pub fn generate_fractal_cancelable<Alg, C, R>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
    on_row_complete: &R,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
    R: Fn(u32),
{
    let mut results = Vec::with_capacity(pixel_rect.size() as usize);

    for y in 0..pixel_rect.height() {
        for x in 0..pixel_rect.width() {
            if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(GenerateFractalError::Cancelled(Cancelled));
            }

            let result = algorithm
                .compute(Point { x, y })
                .map_err(GenerateFractalError::Algorithm)?;
            results.push(result);
        }

        on_row_complete(y);
    }

    Ok(results)
}
