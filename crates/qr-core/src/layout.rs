//! Draws the fixed function patterns onto a fresh matrix: finder patterns and
//! their separators, timing patterns, the single alignment pattern used by
//! Version 2, the fixed dark module, and the cells reserved for format
//! information.

use crate::matrix::Matrix;
use crate::version::Version;

/// Draws every function pattern for `version` onto `matrix`, which must be a
/// freshly constructed, all-unset grid of the matching size.
pub fn draw_function_patterns(matrix: &mut Matrix, version: Version) {
    let size = matrix.size;

    draw_finder_pattern(matrix, 3, 3);
    draw_finder_pattern(matrix, 3, size - 4);
    draw_finder_pattern(matrix, size - 4, 3);

    draw_timing_patterns(matrix);

    if version == Version::V2 {
        draw_alignment_pattern(matrix, 18, 18);
    }

    reserve_dark_module(matrix, version);
    reserve_format_info_cells(matrix);
}

/// Draws one 7x7 finder pattern (plus its separator ring) centered at
/// `(center_row, center_col)`, clipped to the matrix bounds.
fn draw_finder_pattern(matrix: &mut Matrix, center_row: i32, center_col: i32) {
    let size = matrix.size;
    for delta_row in -4..=4 {
        for delta_col in -4..=4 {
            let row = center_row + delta_row;
            let col = center_col + delta_col;
            if (0..size).contains(&row) && (0..size).contains(&col) {
                let dist = delta_row.abs().max(delta_col.abs());
                matrix.set_function_dark(row, col, dist != 2 && dist != 4);
            }
        }
    }
}

/// Draws the alternating dark/light timing patterns along row 6 and column 6,
/// restricted to the span between the finder patterns (the finders and their
/// separators already cover the rest).
fn draw_timing_patterns(matrix: &mut Matrix) {
    let size = matrix.size;
    for i in 8..=(size - 9) {
        let dark = i % 2 == 0;
        matrix.set_function_dark(6, i, dark);
        matrix.set_function_dark(i, 6, dark);
    }
}

/// Draws one 5x5 alignment pattern centered at `(center_row, center_col)`,
/// unless it would overlap a finder pattern's 8x8 region.
fn draw_alignment_pattern(matrix: &mut Matrix, center_row: i32, center_col: i32) {
    if overlaps_finder_region(matrix.size, center_row, center_col) {
        return;
    }
    for delta_row in -2..=2 {
        for delta_col in -2..=2 {
            let dist = delta_row.abs().max(delta_col.abs());
            matrix.set_function_dark(center_row + delta_row, center_col + delta_col, dist != 1);
        }
    }
}

fn overlaps_finder_region(size: i32, center_row: i32, center_col: i32) -> bool {
    const FINDER_REGION: i32 = 8;
    let (r0, r1) = (center_row - 2, center_row + 2);
    let (c0, c1) = (center_col - 2, center_col + 2);
    let regions = [
        (0, FINDER_REGION - 1, 0, FINDER_REGION - 1),
        (0, FINDER_REGION - 1, size - FINDER_REGION, size - 1),
        (size - FINDER_REGION, size - 1, 0, FINDER_REGION - 1),
    ];
    regions
        .iter()
        .any(|&(rr0, rr1, cc0, cc1)| r0 <= rr1 && r1 >= rr0 && c0 <= cc1 && c1 >= cc0)
}

fn reserve_dark_module(matrix: &mut Matrix, version: Version) {
    let row = 4 * i32::from(version.number()) + 9;
    matrix.reserve(row, 8);
}

/// Reserves the 15 cells of the primary format-information copy (wrapping the
/// top-left finder pattern) and the 15 cells of the secondary copy (split
/// between row 8 near the top-right finder and column 8 near the bottom-left
/// finder).
fn reserve_format_info_cells(matrix: &mut Matrix) {
    const PRIMARY: [(i32, i32); 15] = [
        (8, 0),
        (8, 1),
        (8, 2),
        (8, 3),
        (8, 4),
        (8, 5),
        (8, 7),
        (8, 8),
        (7, 8),
        (5, 8),
        (4, 8),
        (3, 8),
        (2, 8),
        (1, 8),
        (0, 8),
    ];
    for &(row, col) in PRIMARY.iter() {
        matrix.reserve(row, col);
    }

    let size = matrix.size;
    for col in (size - 8)..size {
        matrix.reserve(8, col);
    }
    for row in (size - 7)..size {
        matrix.reserve(row, 8);
    }
}
