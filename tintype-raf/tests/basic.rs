use tintype_raf::{Error, Raf, MAGIC_BYTES, PREVIEW_LENGTH_FIELD, PREVIEW_OFFSET_FIELD};

/// A RAF file of `total` bytes whose directory entry references
/// `offset..offset+length`, with the referenced range filled with `0xAB`
fn raf(total: usize, offset: u32, length: u32) -> Vec<u8> {
    let mut data = vec![0; total];
    data[..MAGIC_BYTES.len()].copy_from_slice(MAGIC_BYTES);
    data[PREVIEW_OFFSET_FIELD..PREVIEW_LENGTH_FIELD].copy_from_slice(&offset.to_be_bytes());
    data[PREVIEW_LENGTH_FIELD..PREVIEW_LENGTH_FIELD.checked_add(4).unwrap()]
        .copy_from_slice(&length.to_be_bytes());

    let start = usize::try_from(offset).unwrap();
    let end = start.checked_add(usize::try_from(length).unwrap()).unwrap();
    if end <= total {
        data[start..end].fill(0xAB);
    }

    data
}

#[test]
fn extract_preview() {
    let raf = Raf::new(raf(1024, 0x100, 0x200)).unwrap();

    assert_eq!(raf.preview_location(), 0x100..0x300);
    assert_eq!(raf.embedded_jpeg().len(), 0x200);
    assert!(raf.embedded_jpeg().iter().all(|x| *x == 0xAB));
}

#[test]
fn preview_out_of_range() {
    // 0x100 + 0x400 exceeds the 1024 byte file: no short read is returned
    let err = Raf::new(raf(1024, 0x100, 0x400)).unwrap_err();

    assert!(matches!(
        err.err(),
        Error::PreviewOutOfRange {
            offset: 0x100,
            length: 0x400,
            available: 1024,
        }
    ));
}

#[test]
fn preview_up_to_last_byte() {
    let raf = Raf::new(raf(1024, 0x200, 0x200)).unwrap();
    assert_eq!(raf.preview_location(), 0x200..0x400);
}

#[test]
fn empty_preview() {
    let raf = Raf::new(raf(1024, 0x100, 0)).unwrap();
    assert!(raf.embedded_jpeg().is_empty());
}

#[test]
fn invalid_magic() {
    let mut data = raf(1024, 0x100, 0x200);
    data[0] = b'X';

    let err = Raf::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::InvalidMagicBytes(_)));
}

#[test]
fn file_shorter_than_directory() {
    let mut data = MAGIC_BYTES.to_vec();
    data.resize(0x58, 0);

    let err = Raf::new(data).unwrap_err();
    assert!(matches!(err.err(), Error::DirectoryEof(_)));
}

#[test]
fn is_filetype() {
    assert!(Raf::is_filetype(MAGIC_BYTES));
    assert!(!Raf::is_filetype(b"II*\0"));
}

#[test]
fn buffer_returned_on_error() {
    let data = raf(1024, 0x100, 0x400);
    let err = Raf::new(data.clone()).unwrap_err();
    assert_eq!(err.into_inner(), data);
}
