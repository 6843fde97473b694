//! Reed-Solomon error correction codeword computation.
//!
//! Neither Version 1 nor Version 2 at Error Correction Level L splits data
//! into multiple blocks, so this module only needs to compute a single
//! remainder polynomial per symbol.

use std::sync::OnceLock;

use crate::gf256;
use crate::version::Version;

static GENERATOR_7: OnceLock<Vec<u8>> = OnceLock::new();
static GENERATOR_10: OnceLock<Vec<u8>> = OnceLock::new();

fn generator_for_degree(degree: usize) -> &'static [u8] {
    let cell = match degree {
        7 => &GENERATOR_7,
        10 => &GENERATOR_10,
        _ => unreachable!("only degree 7 and 10 generators are needed"),
    };
    cell.get_or_init(|| gf256::generator_polynomial(degree))
}

/// Computes the error-correction codewords for `data` using the generator
/// polynomial for the given Version's Error Correction Level L block.
pub fn compute_ecc_for_version(data: &[u8], version: Version) -> Vec<u8> {
    let degree = version.num_ecc_codewords();
    divide(data, generator_for_degree(degree))
}

/// Polynomial long division of `data` by `divisor` over GF(256), returning
/// the remainder, which is the Reed-Solomon error-correction codeword.
fn divide(data: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; divisor.len()];
    for &b in data {
        let factor = b ^ result.remove(0);
        result.push(0);
        for (x, &y) in result.iter_mut().zip(divisor.iter()) {
            *x ^= gf256::mul(y, factor);
        }
    }
    result
}
