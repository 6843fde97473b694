//! Ties the whole pipeline together: encode the payload, compute error
//! correction, lay out function patterns, place data bits, choose and apply
//! a mask, and write format information.

use crate::encoder;
use crate::error::QrError;
use crate::format_info;
use crate::layout;
use crate::mask::Mask;
use crate::mask_engine;
use crate::matrix::Matrix;
use crate::placer;
use crate::reed_solomon;
use crate::version::Version;

/// A finished QR Code symbol: its version, the mask pattern chosen for it,
/// and the final module matrix (`true` = dark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    mask: Mask,
    modules: Vec<Vec<bool>>,
}

impl QrCode {
    /// The side length of the module matrix, in modules.
    pub fn size(&self) -> i32 {
        self.version.size()
    }

    /// The version (1 or 2) this symbol was encoded at.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The mask pattern (0-7) applied to this symbol's data modules.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns whether the module at `(row, col)` is dark.
    ///
    /// Panics if `row` or `col` is outside `0..size()`.
    pub fn get_module(&self, row: i32, col: i32) -> bool {
        self.modules[row as usize][col as usize]
    }
}

/// Intermediate snapshots of the module matrix, taken at fixed points of the
/// pipeline, alongside the finished symbol. Useful for callers that want to
/// visualize or test individual stages rather than just the end result.
#[derive(Debug, Clone)]
pub struct EncodeStages {
    /// The matrix immediately after data bits are placed, before masking.
    /// Reserved format-information cells read as light.
    pub after_data_placement: Vec<Vec<bool>>,
    /// The matrix after the chosen mask is applied, before format information
    /// is written. Reserved format-information cells read as light.
    pub after_masking: Vec<Vec<bool>>,
    /// The finished symbol.
    pub code: QrCode,
}

/// Encodes `text` into a finished QR Code symbol: the smaller of Version 1 or
/// 2 that fits, Error Correction Level L, with the lowest-penalty mask.
pub fn encode(text: &str) -> Result<QrCode, QrError> {
    Ok(encode_with_stages(text)?.code)
}

/// Like [`encode`], but also returns intermediate matrix snapshots.
pub fn encode_with_stages(text: &str) -> Result<EncodeStages, QrError> {
    let (data_codewords, version) = encoder::encode_data_codewords(text)?;
    let ecc_codewords = reed_solomon::compute_ecc_for_version(&data_codewords, version);

    let mut all_codewords = data_codewords;
    all_codewords.extend_from_slice(&ecc_codewords);

    let total_codewords = version.num_data_codewords() + version.num_ecc_codewords();
    if all_codewords.len() != total_codewords {
        return Err(QrError::InternalInvariant(
            "codeword count mismatch after Reed-Solomon",
        ));
    }

    let mut bits = Vec::with_capacity(total_codewords * 8 + version.num_remainder_bits());
    for byte in &all_codewords {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits.resize(bits.len() + version.num_remainder_bits(), false);

    let mut matrix = Matrix::new(version.size());
    layout::draw_function_patterns(&mut matrix, version);

    let placed = placer::place_data_bits(&mut matrix, &bits);
    if placed != bits.len() {
        return Err(QrError::InternalInvariant(
            "data placer did not consume the full bitstream",
        ));
    }

    let after_data_placement = matrix.snapshot_with_reserved_as_light();

    let (mask, _score) = mask_engine::choose_best_mask(&mut matrix);

    let after_masking = matrix.snapshot_with_reserved_as_light();

    let format_bits = format_info::compute_format_bits(mask);
    format_info::place_format_info(&mut matrix, version, format_bits);

    let modules = matrix.into_bool_grid()?;

    let dark_row = (4 * i32::from(version.number()) + 9) as usize;
    if !modules[dark_row][8] {
        return Err(QrError::InternalInvariant("dark module was not set"));
    }

    let code = QrCode {
        version,
        mask,
        modules,
    };

    Ok(EncodeStages {
        after_data_placement,
        after_masking,
        code,
    })
}
