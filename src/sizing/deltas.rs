use super::strategy::SizeStrategy;

/// Applies a drag of `delta` at the right edge of column `boundary`.
///
/// Dragging an internal boundary moves width between the two neighboring columns, so their
/// combined width stays the same. Dragging the right edge of the last column grows or
/// shrinks that column alone, which changes the table width. `delta` is in the strategy's
/// unit.
///
/// The delta is reduced as needed so that no column shrinks below the strategy's minimum
/// width. Columns further away are never touched.
pub fn redistribute(
    widths: &[f64],
    boundary: usize,
    delta: f64,
    strategy: &SizeStrategy,
) -> Vec<f64> {
    let mut new_widths = widths.to_vec();
    let min = strategy.min_cell_width();

    match widths.len() {
        0 => (),
        1 => {
            let adjustments = strategy.single_column_width(widths[0], delta);
            for (width, adjustment) in new_widths.iter_mut().zip(adjustments) {
                *width += adjustment;
            }
        }
        len if boundary + 1 >= len => {
            let last = len - 1;
            new_widths[last] += clamp_shrink(delta, widths[last], min);
        }
        _ => {
            let left = widths[boundary];
            let right = widths[boundary + 1];

            // Columns already under the minimum can't be forced to grow by the clamp.
            let lower = f64::min(0., min - left);
            let upper = f64::max(0., right - min);
            let delta = delta.clamp(lower, upper);

            new_widths[boundary] = left + delta;
            new_widths[boundary + 1] = right - delta;
        }
    }

    new_widths
}

/// Limits how much a column of `width` may shrink.
fn clamp_shrink(delta: f64, width: f64, min: f64) -> f64 {
    if delta >= 0. {
        delta
    } else {
        delta.max(f64::min(0., min - width))
    }
}
