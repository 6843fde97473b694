use thiserror::Error;

/// Everything that can go wrong while turning text into a QR Code symbol.
///
/// Ways to handle this exception include:
///
/// - Shorten the input text so it fits within Version 2's byte-mode capacity.
/// - Restrict the input to characters representable in ISO 8859-1.
/// - Propagate the error upward to the caller/user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QrError {
    #[error("character {0:?} has no ISO 8859-1 (Latin-1) representation")]
    InvalidCharacter(char),

    #[error("payload of {len} bytes exceeds the {max} byte capacity of Version 2, Error Correction Level L")]
    PayloadTooLong { len: usize, max: usize },

    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}
