//! Cross-crate scenarios mirroring how real files nest the formats

use tintype_bim::iptc::Iptc;
use tintype_bim::{Bim, BlockId};
use tintype_exif::ExifData;
use tintype_raf::Raf;

fn resource_block(id: u16, payload: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(b"8BIM");
    data.extend_from_slice(&id.to_be_bytes());
    // Empty name plus its pad byte
    data.extend_from_slice(&[0, 0]);
    data.extend_from_slice(&u32::try_from(payload.len()).unwrap().to_be_bytes());
    data.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        data.push(0);
    }

    data
}

/// A little endian TIFF body with the camera model stored inline
fn exif_body() -> Vec<u8> {
    let mut body = Vec::new();

    body.extend_from_slice(b"II");
    body.extend_from_slice(&42_u16.to_le_bytes());
    body.extend_from_slice(&8_u32.to_le_bytes());

    body.extend_from_slice(&1_u16.to_le_bytes());
    body.extend_from_slice(&0x0110_u16.to_le_bytes());
    body.extend_from_slice(&2_u16.to_le_bytes());
    body.extend_from_slice(&4_u32.to_le_bytes());
    body.extend_from_slice(b"X100");
    body.extend_from_slice(&0_u32.to_le_bytes());

    body
}

#[test]
fn photoshop_resources_to_exif_and_iptc() {
    // A Photoshop style resource stream carrying both an Exif blob and an
    // IPTC record, the way APP13 segments do
    let mut iptc_record = vec![0x1C, 2, 120];
    iptc_record.extend_from_slice(&16_u16.to_be_bytes());
    iptc_record.extend_from_slice(b"A harbor at dusk");

    let mut stream = resource_block(0x0422, &exif_body());
    stream.extend_from_slice(&resource_block(0x0404, &iptc_record));

    let bim = Bim::new(stream).unwrap();

    // The embedded Exif blob lacks the preamble, so it gets synthesized
    let exif_payload = bim.block_by_id(BlockId::Exif).unwrap().data().to_vec();
    let exif = ExifData::from_buffer(exif_payload, true);
    exif.assemble().unwrap();
    assert_eq!(exif.model().unwrap().as_deref(), Some("X100"));

    let iptc_payload = bim.block_by_id(BlockId::IptcNaa).unwrap().data().to_vec();
    let iptc = Iptc::new(iptc_payload).unwrap();
    assert_eq!(iptc.caption().as_deref(), Some("A harbor at dusk"));
}

#[test]
fn raf_preview_extraction() {
    let preview = {
        let mut jpeg = vec![0xFF, 0xD8];
        jpeg.extend_from_slice(&[0x42; 64]);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);
        jpeg
    };

    let mut data = tintype_raf::MAGIC_BYTES.to_vec();
    data.resize(0x100, 0);
    data[tintype_raf::PREVIEW_OFFSET_FIELD..tintype_raf::PREVIEW_LENGTH_FIELD]
        .copy_from_slice(&0x100_u32.to_be_bytes());
    data[tintype_raf::PREVIEW_LENGTH_FIELD..0x5E]
        .copy_from_slice(&u32::try_from(preview.len()).unwrap().to_be_bytes());
    data.extend_from_slice(&preview);

    assert!(Raf::is_filetype(&data));

    let raf = Raf::new(data).unwrap();
    assert_eq!(raf.embedded_jpeg(), preview.as_slice());
}

#[test]
fn umbrella_reexports() {
    assert!(tintype::raf::Raf::is_filetype(tintype::raf::MAGIC_BYTES));
    assert!(tintype::bim::Bim::new(b"XBIM".to_vec()).is_err());
    let _ = tintype::exif::ExifData::from_buffer(Vec::new(), true);
    let _ = tintype::common::endian::ByteOrder::BigEndian;
}
