#![doc = include_str!("../README.md")]

use std::ops::Range;

use tintype_common::endian::{ByteOrder, OutOfRangeError};
use tintype_common::error::ErrorWithData;
use tintype_common::math::*;

pub const MAGIC_BYTES: &[u8] = b"FUJIFILMCCD-RAW ";

/// File offset of the preview JPEG offset field
pub const PREVIEW_OFFSET_FIELD: usize = 0x56;
/// File offset of the preview JPEG length field
pub const PREVIEW_LENGTH_FIELD: usize = 0x5A;

/// Representation of a RAF raw container
///
/// Only the 8-byte preview directory entry at [`PREVIEW_OFFSET_FIELD`] is
/// interpreted. The remainder of the directory is undocumented and kept as
/// opaque bytes; [`Self::into_inner`] returns them untouched.
#[derive(Debug, Clone)]
pub struct Raf {
    data: Vec<u8>,
    preview_location: Range<usize>,
}

impl Raf {
    /// Returns the container with its preview directory entry resolved
    ///
    /// * `data`: complete RAF file data starting with the magic bytes
    ///
    /// The referenced preview range is validated against the actual file
    /// size here. An out-of-range entry is fatal since a truncated preview
    /// is useless to any downstream decoder.
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        match Self::find_preview(&data) {
            Ok(preview_location) => Ok(Self {
                data,
                preview_location,
            }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Checks if passed data have RAF magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// The embedded preview JPEG, exactly as referenced by the directory
    pub fn embedded_jpeg(&self) -> &[u8] {
        self.data
            .get(self.preview_location.clone())
            .expect("Unreachable: The preview range is validated during parsing")
    }

    /// File position and length of the embedded preview
    pub fn preview_location(&self) -> Range<usize> {
        self.preview_location.clone()
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    fn find_preview(data: &[u8]) -> Result<Range<usize>, Error> {
        if !Self::is_filetype(data) {
            let magic = data.get(..MAGIC_BYTES.len()).unwrap_or(data);
            return Err(Error::InvalidMagicBytes(magic.to_vec()));
        }

        let offset = ByteOrder::BigEndian.u32(data, PREVIEW_OFFSET_FIELD)?;
        let length = ByteOrder::BigEndian.u32(data, PREVIEW_LENGTH_FIELD)?;

        let start = offset.usize()?;
        let end = start.safe_add(length.usize()?)?;

        if end > data.len() {
            return Err(Error::PreviewOutOfRange {
                offset,
                length,
                available: data.len(),
            });
        }

        Ok(start..end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid magic bytes: {0:x?}")]
    InvalidMagicBytes(Vec<u8>),
    #[error("Preview directory outside of file: {0}")]
    DirectoryEof(#[from] OutOfRangeError),
    #[error("Preview at {offset:#x}+{length:#x} exceeds file of {available} bytes")]
    PreviewOutOfRange {
        offset: u32,
        length: u32,
        available: usize,
    },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}
