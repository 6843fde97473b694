//! Named end-to-end encoding scenarios exercising the full pipeline.

use qr_core::{encode, QrError, Version};

#[test]
fn scenario_hello_world_fits_version_1() {
    let qr = encode("HELLO WORLD").unwrap();
    assert_eq!(qr.version(), Version::V1);
    assert_eq!(qr.size(), 21);
}

#[test]
fn scenario_empty_string_still_encodes() {
    let qr = encode("").unwrap();
    assert_eq!(qr.version(), Version::V1);
}

#[test]
fn scenario_single_character() {
    let qr = encode("A").unwrap();
    assert_eq!(qr.version(), Version::V1);
}

#[test]
fn scenario_seventeen_bytes_is_the_version_1_boundary() {
    let qr = encode(&"X".repeat(17)).unwrap();
    assert_eq!(qr.version(), Version::V1);
}

#[test]
fn scenario_eighteen_bytes_crosses_into_version_2() {
    let qr = encode(&"X".repeat(18)).unwrap();
    assert_eq!(qr.version(), Version::V2);
    assert_eq!(qr.size(), 25);
}

#[test]
fn scenario_thirty_two_bytes_is_the_version_2_boundary() {
    let qr = encode(&"X".repeat(32)).unwrap();
    assert_eq!(qr.version(), Version::V2);
}

#[test]
fn scenario_thirty_three_bytes_does_not_fit_either_version() {
    let err = encode(&"X".repeat(33)).unwrap_err();
    assert!(matches!(err, QrError::PayloadTooLong { len: 33, .. }));
}

#[test]
fn scenario_latin1_punctuation_round_trips_through_encoding() {
    let qr = encode("Caf\u{E9}: 10% off!").unwrap();
    assert_eq!(qr.version(), Version::V1);
}

#[test]
fn scenario_non_latin1_character_is_rejected() {
    let err = encode("\u{4E2D}").unwrap_err();
    assert!(matches!(err, QrError::InvalidCharacter(_)));
}

#[test]
fn finder_patterns_occupy_all_three_expected_corners() {
    let qr = encode("HELLO WORLD").unwrap();
    // Top-left, top-right, and bottom-left finder centers are dark.
    assert!(qr.get_module(3, 3));
    assert!(qr.get_module(3, qr.size() - 4));
    assert!(qr.get_module(qr.size() - 4, 3));
    // Bottom-right corner, outside any finder, is not unconditionally dark.
}

#[test]
fn timing_pattern_alternates_along_row_six() {
    let qr = encode("A").unwrap();
    for col in 8..(qr.size() - 8) {
        let expected = col % 2 == 0;
        assert_eq!(qr.get_module(6, col), expected, "mismatch at column {col}");
    }
}

#[test]
fn version_2_alignment_pattern_center_is_dark() {
    let qr = encode(&"X".repeat(20)).unwrap();
    assert_eq!(qr.version(), Version::V2);
    assert!(qr.get_module(18, 18));
}

#[test]
fn repeated_encoding_is_deterministic() {
    let a = encode("HELLO WORLD").unwrap();
    let b = encode("HELLO WORLD").unwrap();
    assert_eq!(a, b);
}
