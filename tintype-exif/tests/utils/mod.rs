#![allow(dead_code)]

pub use tintype_exif::internal::*;
pub use tintype_exif::{ExifData, PREAMBLE};

pub fn with_preamble(body: &[u8]) -> Vec<u8> {
    let mut data = PREAMBLE.to_vec();
    data.extend_from_slice(body);
    data
}

/// Serialize one little endian directory entry
///
/// The four value bytes are passed through as they appear on the wire.
pub fn entry_le(tag: u16, data_type: u16, count: u32, value: [u8; 4]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&data_type.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&value);
    out
}

/// A little endian TIFF body with one primary entry holding an inline value
pub fn minimal_le(tag: u16, data_type: u16, count: u32, value: [u8; 4]) -> Vec<u8> {
    let mut body = Vec::new();

    // Little endian
    body.extend_from_slice(b"II");
    // Magic bytes
    body.extend_from_slice(&42_u16.to_le_bytes());
    // Offset of the primary IFD
    body.extend_from_slice(&8_u32.to_le_bytes());

    // Number of entries
    body.extend_from_slice(&1_u16.to_le_bytes());
    body.extend_from_slice(&entry_le(tag, data_type, count, value));
    // Next IFD offset
    body.extend_from_slice(&0_u32.to_le_bytes());

    body
}

/// A little endian TIFF body with a primary IFD and an Exif sub-directory
///
/// Layout:
///
/// ```text
///   0 header
///   8 primary IFD: Make (offset), Model (inline), ExifIfdPointer
///  50 "Canon\0"
///  56 Exif IFD: ISOSpeedRatings, ExposureTime (offset), DateTimeOriginal
///  98 (1, 60)
/// 106 "2007:10:19 19:57:06\0"
/// ```
pub fn full_le() -> Vec<u8> {
    let mut body = Vec::new();

    body.extend_from_slice(b"II");
    body.extend_from_slice(&42_u16.to_le_bytes());
    body.extend_from_slice(&8_u32.to_le_bytes());

    // Primary IFD
    body.extend_from_slice(&3_u16.to_le_bytes());
    body.extend_from_slice(&entry_le(0x010F, 2, 6, 50_u32.to_le_bytes()));
    body.extend_from_slice(&entry_le(0x0110, 2, 4, *b"X100"));
    body.extend_from_slice(&entry_le(0x8769, 4, 1, 56_u32.to_le_bytes()));
    body.extend_from_slice(&0_u32.to_le_bytes());

    body.extend_from_slice(b"Canon\0");

    // Exif IFD
    body.extend_from_slice(&3_u16.to_le_bytes());
    body.extend_from_slice(&entry_le(0x8827, 3, 1, [200, 0, 0, 0]));
    body.extend_from_slice(&entry_le(0x829A, 5, 1, 98_u32.to_le_bytes()));
    body.extend_from_slice(&entry_le(0x9003, 2, 20, 106_u32.to_le_bytes()));
    body.extend_from_slice(&0_u32.to_le_bytes());

    body.extend_from_slice(&1_u32.to_le_bytes());
    body.extend_from_slice(&60_u32.to_le_bytes());

    body.extend_from_slice(b"2007:10:19 19:57:06\0");

    body
}

pub fn assembled(body: &[u8]) -> ExifData {
    let exif = ExifData::from_buffer(body.to_vec(), true);
    exif.assemble().unwrap();
    exif
}
