//! Applies and scores the eight XOR mask patterns over a matrix's data cells,
//! and picks the one with the lowest total penalty.
//!
//! The four penalty rules are scored as specified by ISO/IEC 18004: runs of
//! five or more same-colored modules in a row or column (rule 1), 2x2 blocks
//! of a single color (rule 2), occurrences of the finder-like 1:1:3:1:1 ratio
//! pattern in an 11-module window (rule 3), and overall dark/light balance
//! (rule 4). Reserved format-information cells, not yet written, count as
//! light for all four rules.

use crate::mask::Mask;
use crate::matrix::Matrix;
use crate::{PENALTY_N1, PENALTY_N2, PENALTY_N3, PENALTY_N4};

/// The finder-like ratio pattern (and its reverse) that rule 3 looks for,
/// read left-to-right / top-to-bottom, dark = true.
const FINDER_LIKE_A: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];
const FINDER_LIKE_B: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];

/// Evaluates whether mask pattern `mask` darkens the module at `(row, col)`.
fn mask_condition(mask: Mask, row: i32, col: i32) -> bool {
    match mask.value() {
        0 => (row + col) % 2 == 0,
        1 => row % 2 == 0,
        2 => col % 3 == 0,
        3 => (row + col) % 3 == 0,
        4 => (row / 2 + col / 3) % 2 == 0,
        5 => (row * col) % 2 + (row * col) % 3 == 0,
        6 => ((row * col) % 2 + (row * col) % 3) % 2 == 0,
        7 => ((row + col) % 2 + (row * col) % 3) % 2 == 0,
        _ => unreachable!("Mask value out of range"),
    }
}

/// XORs `mask` over every non-function cell of `matrix`. Since XOR is its own
/// inverse, calling this twice with the same mask restores the original data.
pub fn apply_mask(matrix: &mut Matrix, mask: Mask) {
    let size = matrix.size;
    for row in 0..size {
        for col in 0..size {
            if matrix.is_function(row, col) {
                continue;
            }
            if mask_condition(mask, row, col) {
                matrix.flip_data(row, col);
            }
        }
    }
}

/// Tries all eight masks and applies the one with the lowest penalty score,
/// breaking ties in favor of the lower mask number. Returns the chosen mask
/// and its score.
pub fn choose_best_mask(matrix: &mut Matrix) -> (Mask, i32) {
    let mut best_mask = Mask::new(0);
    let mut best_score = i32::MAX;

    for i in 0..8u8 {
        let mask = Mask::new(i);
        apply_mask(matrix, mask);
        let score = penalty_score(matrix);
        apply_mask(matrix, mask); // undo the trial application
        if score < best_score {
            best_score = score;
            best_mask = mask;
        }
    }

    apply_mask(matrix, best_mask);
    (best_mask, best_score)
}

pub fn penalty_score(matrix: &Matrix) -> i32 {
    penalty_rule1(matrix) + penalty_rule2(matrix) + penalty_rule3(matrix) + penalty_rule4(matrix)
}

fn penalty_rule1(matrix: &Matrix) -> i32 {
    let size = matrix.size;
    let mut score = 0;
    for row in 0..size {
        score += run_penalty((0..size).map(|col| matrix.is_dark(row, col)));
    }
    for col in 0..size {
        score += run_penalty((0..size).map(|row| matrix.is_dark(row, col)));
    }
    score
}

fn run_penalty(cells: impl Iterator<Item = bool>) -> i32 {
    let mut score = 0;
    let mut run_color: Option<bool> = None;
    let mut run_len = 0i32;
    for cell in cells {
        if run_color == Some(cell) {
            run_len += 1;
        } else {
            if run_len >= 5 {
                score += PENALTY_N1 + (run_len - 5);
            }
            run_color = Some(cell);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        score += PENALTY_N1 + (run_len - 5);
    }
    score
}

fn penalty_rule2(matrix: &Matrix) -> i32 {
    let size = matrix.size;
    let mut score = 0;
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let color = matrix.is_dark(row, col);
            if color == matrix.is_dark(row + 1, col)
                && color == matrix.is_dark(row, col + 1)
                && color == matrix.is_dark(row + 1, col + 1)
            {
                score += PENALTY_N2;
            }
        }
    }
    score
}

fn penalty_rule3(matrix: &Matrix) -> i32 {
    let size = matrix.size;
    if size < 11 {
        return 0;
    }
    let mut score = 0;
    for row in 0..size {
        for col in 0..=(size - 11) {
            let window: Vec<bool> = (0..11).map(|i| matrix.is_dark(row, col + i)).collect();
            if window == FINDER_LIKE_A || window == FINDER_LIKE_B {
                score += PENALTY_N3;
            }
        }
    }
    for col in 0..size {
        for row in 0..=(size - 11) {
            let window: Vec<bool> = (0..11).map(|i| matrix.is_dark(row + i, col)).collect();
            if window == FINDER_LIKE_A || window == FINDER_LIKE_B {
                score += PENALTY_N3;
            }
        }
    }
    score
}

fn penalty_rule4(matrix: &Matrix) -> i32 {
    let size = matrix.size;
    let total = (size * size) as f64;
    let dark = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&(row, col)| matrix.is_dark(row, col))
        .count() as f64;
    let percent_dark = dark / total * 100.0;
    let deviation = (percent_dark - 50.0).abs();
    (deviation / 5.0).floor() as i32 * PENALTY_N4
}
