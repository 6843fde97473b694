//! Builds QR Code symbols from text, following ISO/IEC 18004 (Model 2).
//!
//! This crate covers a single, well-defined slice of the standard: byte-mode
//! (ISO 8859-1) payloads, Versions 1 and 2, Error Correction Level L. It picks
//! the smaller of the two versions that fits the input, runs Reed-Solomon
//! error correction, lays out the function patterns and data bits, evaluates
//! all eight mask patterns and keeps the lowest-penalty one, and returns the
//! finished module matrix.
//!
//! # Examples
//!
//! ```
//! use qr_core::encode;
//!
//! let qr = encode("HELLO WORLD").unwrap();
//! for row in 0..qr.size() {
//!     for col in 0..qr.size() {
//!         let _dark = qr.get_module(row, col);
//!     }
//! }
//! ```

mod bit_buffer;
mod encoder;
mod error;
mod format_info;
mod gf256;
mod layout;
mod mask;
mod mask_engine;
mod matrix;
mod placer;
mod qr_code;
mod reed_solomon;
mod version;

pub use bit_buffer::BitBuffer;
pub use error::QrError;
pub use mask::Mask;
pub use qr_code::{encode, encode_with_stages, EncodeStages, QrCode};
pub use version::Version;

// For use in mask_engine::penalty_score(), when evaluating which mask is best.
pub(crate) const PENALTY_N1: i32 = 3;
pub(crate) const PENALTY_N2: i32 = 3;
pub(crate) const PENALTY_N3: i32 = 40;
pub(crate) const PENALTY_N4: i32 = 10;
