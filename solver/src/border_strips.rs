//! Border-strip (rim hook) enumeration.
//!
//! A border strip of λ is a connected skew shape λ/λ* with no 2×2 block.
//! [`border_strips`] walks the rows of the Young diagram top to bottom as an
//! explicit state machine over four cursors:
//!
//! | State | Meaning |
//! |-------|---------|
//! | `row` | current row of the diagram |
//! | `first_non_zero_row` | top row of the strip under construction |
//! | `remaining` | cells still to place (may dip below 0 after a down step) |
//! | `xi` | cells taken from each row so far |
//!
//! Transitions:
//!
//! - **Left step** (row longer than the next one, or the last row): take up
//!   to `remaining` cells from the excess over the next row. The last row
//!   may give up all of its cells; if even that is not enough, no further
//!   strip exists and enumeration ends.
//! - **Down step** (row flush with the next one): the strip must run
//!   through the whole block of equal rows, one cell each. The cursor then
//!   retreats to the last row of the block. Overshoot is undone by handing
//!   back the top rows of the strip one at a time.
//! - **Emit**: when `remaining` hits 0 the current (λ*, ξ) is recorded,
//!   then the top row of the strip is released so the search continues with
//!   the strip starting one row lower.
//!
//! Strips come out ordered by their top row. The walk is
//! O(λ_1 + len(λ)) per call.

use crate::types::BorderStripRemoval;

/// Every way to remove a border strip of `length` cells from `lambda`.
///
/// `lambda` must be corrected (non-increasing, no zeros). Each result
/// satisfies `partition[i] + border_strip[i] == lambda[i]`. Returns an empty
/// vector when `length` is 0 or exceeds |λ|.
pub fn border_strips(lambda: &[usize], length: usize) -> Vec<BorderStripRemoval> {
    let mut result = Vec::new();
    let rows = lambda.len();
    if rows == 0 || length == 0 || length > lambda.iter().sum::<usize>() {
        return result;
    }

    let mut lambda = lambda.to_vec();
    let mut xi = vec![0usize; rows];
    let mut remaining = length as isize;
    let mut row = 0usize;
    let mut first_non_zero_row = 0usize;

    while remaining > 0 && row < rows {
        if row + 1 == rows {
            // Last row: may be emptied entirely.
            let step = remaining.min(lambda[row] as isize);
            take(&mut lambda, &mut xi, row, step as usize);
            remaining -= step;
            if remaining > 0 {
                return result;
            }
        } else if lambda[row] > lambda[row + 1] {
            let step = remaining.min((lambda[row] - lambda[row + 1]) as isize);
            take(&mut lambda, &mut xi, row, step as usize);
            remaining -= step;
        } else {
            let block_start = row;
            let block_len = lambda[block_start];
            while row < rows && lambda[row] == block_len {
                remaining -= 1;
                xi[row] += 1;
                row += 1;
            }
            for cells in &mut lambda[block_start..row] {
                *cells -= 1;
            }
            row -= 1;

            while remaining < 0 {
                remaining += release(&mut lambda, &mut xi, first_non_zero_row);
                first_non_zero_row += 1;
            }
        }

        if remaining == 0 {
            result.push(BorderStripRemoval {
                partition: lambda.clone(),
                border_strip: xi.clone(),
            });

            remaining += release(&mut lambda, &mut xi, first_non_zero_row);
            if row == first_non_zero_row {
                row += 1;
            }
            first_non_zero_row += 1;
        }
    }

    result
}

fn take(lambda: &mut [usize], xi: &mut [usize], row: usize, cells: usize) {
    lambda[row] -= cells;
    xi[row] += cells;
}

/// Hand the strip's cells in `row` back to λ. Returns how many were returned.
fn release(lambda: &mut [usize], xi: &mut [usize], row: usize) -> isize {
    let cells = xi[row];
    lambda[row] += cells;
    xi[row] = 0;
    cells as isize
}
