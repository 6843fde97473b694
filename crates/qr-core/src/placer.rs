//! Places the encoded bitstream into the matrix's non-function cells, zigzagging
//! upward and downward through column pairs from the right edge.

use crate::matrix::Matrix;

/// Walks the matrix in the standard QR Code zigzag order, writing one bit from
/// `bits` into each non-function cell encountered, and returns how many bits
/// were actually placed (so the caller can check the whole bitstream was used).
///
/// Column pairs are visited right to left, skipping the vertical timing
/// column (column 6, whose pair index is redirected to column 5). Within a
/// pair, the right-hand column of each row is visited before the left-hand
/// column; the vertical direction alternates with each pair.
pub fn place_data_bits(matrix: &mut Matrix, bits: &[bool]) -> usize {
    let size = matrix.size;
    let mut bit_index = 0usize;
    let mut right = size - 1;

    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        let upward = (right + 1) & 2 == 0;
        for vert in 0..size {
            let row = if upward { size - 1 - vert } else { vert };
            for j in 0..2 {
                let col = right - j;
                if !matrix.is_function(row, col) {
                    let bit = bits.get(bit_index).copied().unwrap_or(false);
                    matrix.set_data(row, col, bit);
                    bit_index += 1;
                }
            }
        }
        right -= 2;
    }

    bit_index
}
