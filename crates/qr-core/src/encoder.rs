//! Turns input text into the data codewords for a QR Code symbol: transcoding
//! to ISO 8859-1, assembling the byte-mode bitstream (mode indicator,
//! character count, payload, terminator, bit padding), and appending the
//! alternating pad codewords.

use crate::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::version::Version;

const MODE_INDICATOR_BYTE: u32 = 0b0100;
const MODE_INDICATOR_BITS: u8 = 4;
const CHARACTER_COUNT_BITS: u8 = 8;
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Converts `text` to ISO 8859-1 bytes, one byte per character.
///
/// Fails on any character whose code point exceeds `0xFF`, since those have
/// no representation in Latin-1.
fn to_latin1(text: &str) -> Result<Vec<u8>, QrError> {
    text.chars()
        .map(|c| {
            let code_point = c as u32;
            if code_point <= 0xFF {
                Ok(code_point as u8)
            } else {
                Err(QrError::InvalidCharacter(c))
            }
        })
        .collect()
}

/// Encodes `text` into data codewords, choosing the smaller of Version 1 or 2
/// (Error Correction Level L) that can hold it.
pub fn encode_data_codewords(text: &str) -> Result<(Vec<u8>, Version), QrError> {
    let payload = to_latin1(text)?;

    let version = Version::for_payload_len(payload.len()).ok_or_else(|| QrError::PayloadTooLong {
        len: payload.len(),
        max: Version::V2.num_data_codewords() - 2,
    })?;

    let capacity_bits = version.num_data_codewords() * 8;

    let mut buf = BitBuffer::new();
    buf.append_bits(MODE_INDICATOR_BYTE, MODE_INDICATOR_BITS);
    buf.append_bits(payload.len() as u32, CHARACTER_COUNT_BITS);
    for &byte in &payload {
        buf.append_bits(u32::from(byte), 8);
    }

    let terminator_len = std::cmp::min(4, capacity_bits - buf.len());
    buf.append_bits(0, terminator_len as u8);

    let pad_to_byte = (8 - buf.len() % 8) % 8;
    buf.append_bits(0, pad_to_byte as u8);

    let mut codewords = bits_to_bytes(buf.as_slice());

    for pad in PAD_CODEWORDS.iter().cycle() {
        if codewords.len() == version.num_data_codewords() {
            break;
        }
        codewords.push(*pad);
    }

    if codewords.len() != version.num_data_codewords() {
        return Err(QrError::InternalInvariant(
            "assembled codeword count does not match the chosen version's capacity",
        ));
    }

    Ok((codewords, version))
}

fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_picks_version_1() {
        let (codewords, version) = encode_data_codewords("").unwrap();
        assert_eq!(version, Version::V1);
        assert_eq!(codewords[0], 0x40);
        assert_eq!(codewords[1], 0x00);
        assert_eq!(&codewords[2..6], &[0xEC, 0x11, 0xEC, 0x11]);
    }

    #[test]
    fn single_character_a() {
        let (codewords, version) = encode_data_codewords("A").unwrap();
        assert_eq!(version, Version::V1);
        assert_eq!(&codewords[..3], &[0x40, 0x14, 0x10]);
        assert_eq!(codewords[3], 0xEC);
        assert_eq!(codewords[4], 0x11);
    }

    #[test]
    fn hello_world_picks_version_1() {
        let (codewords, version) = encode_data_codewords("HELLO WORLD").unwrap();
        assert_eq!(version, Version::V1);
        assert_eq!(codewords.len(), 19);
        assert_eq!(&codewords[..3], &[0x40, 0xB4, 0x84]);
    }

    #[test]
    fn seventeen_bytes_still_fits_version_1() {
        let text = "A".repeat(17);
        let (codewords, version) = encode_data_codewords(&text).unwrap();
        assert_eq!(version, Version::V1);
        assert_eq!(codewords.len(), 19);
    }

    #[test]
    fn eighteen_bytes_overflows_to_version_2() {
        let text = "A".repeat(18);
        let (codewords, version) = encode_data_codewords(&text).unwrap();
        assert_eq!(version, Version::V2);
        assert_eq!(codewords.len(), 34);
    }

    #[test]
    fn thirty_two_bytes_still_fits_version_2() {
        let text = "A".repeat(32);
        let (codewords, version) = encode_data_codewords(&text).unwrap();
        assert_eq!(version, Version::V2);
        assert_eq!(codewords.len(), 34);
    }

    #[test]
    fn thirty_three_bytes_is_rejected() {
        let text = "A".repeat(33);
        let err = encode_data_codewords(&text).unwrap_err();
        assert!(matches!(err, QrError::PayloadTooLong { len: 33, .. }));
    }

    #[test]
    fn non_latin1_character_is_rejected() {
        let err = encode_data_codewords("héllo \u{1F600}").unwrap_err();
        assert!(matches!(err, QrError::InvalidCharacter('\u{1F600}')));
    }

    #[test]
    fn latin1_extended_character_is_accepted() {
        let (codewords, version) = encode_data_codewords("caf\u{E9}").unwrap();
        // 'é' (0xE9 in Latin-1) is outside ASCII but still representable.
        assert_eq!(version, Version::V1);
        assert_eq!(codewords[0], 0x40);
        assert_eq!(codewords.len(), 19);
    }
}
