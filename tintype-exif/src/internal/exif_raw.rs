mod debug;
mod decode;
mod lookup;

use std::collections::BTreeMap;

pub use tintype_common::exif::{Ifd, Tag};
use tintype_common::math::*;

pub use super::*;
use crate::error::{Error, Result};

/// The six literal bytes that must prefix any blob handed to the builder
pub const PREAMBLE: &[u8; 6] = b"Exif\0\0";

/// Location of one directory entry inside the blob
#[derive(Debug, Clone, Copy)]
pub struct EntryRef {
    pub position: u32,
    pub ifd: Ifd,
    pub data_type: Type,
    pub count: u32,
    pub value_offset: ValueOffset,
}

impl EntryRef {
    pub fn data_len(&self) -> Result<u32> {
        self.count
            .safe_mul(self.data_type.size())
            .map_err(|_| Error::DataSizeTooLarge)
    }

    pub fn offset(&self) -> Result<u32> {
        if let ValueOffset::Offset(offset) = self.value_offset {
            Ok(offset)
        } else {
            Err(Error::ValueInsteadOfOffset)
        }
    }
}

/// This can either be a value or an offset where to find the value
#[derive(Debug, Clone, Copy)]
pub enum ValueOffset {
    Value(u32),
    Offset(u32),
}

impl ValueOffset {
    fn new(data_type: Type, count: u32, value: u32) -> Result<Self> {
        let size = data_type
            .size()
            .safe_mul(count)
            .map_err(|_| Error::DataSizeTooLarge)?;

        Ok(if size <= 4 {
            Self::Value(value)
        } else {
            Self::Offset(value)
        })
    }

    pub fn u32(&self) -> u32 {
        match self {
            Self::Value(x) | Self::Offset(x) => *x,
        }
    }
}

/// Tag index over a raw Exif blob
///
/// [`Self::decode`] walks the IFD chain and records where each entry lives;
/// lookups seek back into the blob on demand. Entries are recorded in visit
/// order (primary IFD, its sub-directories, then the thumbnail directory),
/// so the first entry for a tag id is the outermost occurrence.
#[derive(Debug, Clone)]
pub struct ExifRaw {
    pub raw: Raw,
    pub locations: BTreeMap<Tag, Vec<EntryRef>>,
    /// Directory start offsets, also used to refuse visiting one twice
    pub ifd_locations: BTreeMap<Ifd, u32>,
}

impl ExifRaw {
    pub fn new(raw: Vec<u8>) -> Self {
        Self {
            raw: Raw::new(raw),
            locations: Default::default(),
            ifd_locations: Default::default(),
        }
    }
}
