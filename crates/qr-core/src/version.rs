/// A QR Code version, restricted to the two sizes this crate supports.
///
/// The general standard runs from Version 1 (21x21 modules) to Version 40
/// (177x177 modules); this crate only ever produces Version 1 or Version 2.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    V1,
    V2,
}

impl Version {
    /// The plain version number, as printed on the symbol's specification.
    pub fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// The side length of the square module matrix, in modules.
    pub fn size(self) -> i32 {
        4 * i32::from(self.number()) + 17
    }

    /// Total codewords available at Error Correction Level L.
    pub fn num_data_codewords(self) -> usize {
        match self {
            Self::V1 => 19,
            Self::V2 => 34,
        }
    }

    /// Error-correction codewords appended after the data codewords.
    pub fn num_ecc_codewords(self) -> usize {
        match self {
            Self::V1 => 7,
            Self::V2 => 10,
        }
    }

    /// Bits of padding appended after the bitstream to fill the symbol exactly.
    pub fn num_remainder_bits(self) -> usize {
        match self {
            Self::V1 => 0,
            Self::V2 => 7,
        }
    }

    /// Picks the smaller of Version 1 or 2 that can hold `payload_len` bytes of
    /// byte-mode data at Error Correction Level L, or `None` if neither can.
    pub fn for_payload_len(payload_len: usize) -> Option<Version> {
        if payload_len <= Self::V1.num_data_codewords() - 2 {
            Some(Self::V1)
        } else if payload_len <= Self::V2.num_data_codewords() - 2 {
            Some(Self::V2)
        } else {
            None
        }
    }
}
