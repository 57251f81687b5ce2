use std::ops::Range;

use tintype_common::utils::convertible_enum;

pub use super::*;

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Well-known resource block ids
    ///
    /// Only [`IptcNaa`](Self::IptcNaa) is interpreted further; every other
    /// block passes through as an opaque payload.
    pub enum BlockId {
        /// IPTC-NAA record, see [`crate::iptc`]
        IptcNaa = 0x0404,
        /// Grid and guides information
        GridGuides = 0x0408,
        /// Thumbnail preview
        Thumbnail = 0x040C,
        /// ICC color profile
        IccProfile = 0x040F,
        /// Raw Exif data
        Exif = 0x0422,
        /// XMP packet
        Xmp = 0x0424,
        /// Caption digest
        CaptionDigest = 0x0425,
    }
);

/// Block location inside the container buffer
#[derive(Debug, Clone)]
pub struct RawBlock {
    pub(crate) block_id: BlockId,
    pub(crate) data_location: Range<usize>,
}

impl RawBlock {
    pub(crate) fn block<'a>(&self, bim: &'a Bim) -> Block<'a> {
        Block {
            block_id: self.block_id,
            data_location: self.data_location.clone(),
            bim,
        }
    }
}

/// View on a single resource block
#[derive(Debug)]
pub struct Block<'a> {
    pub(crate) block_id: BlockId,
    pub(crate) data_location: Range<usize>,
    pub(crate) bim: &'a Bim,
}

impl<'a> Block<'a> {
    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    pub fn data(&self) -> &'a [u8] {
        self.bim
            .data
            .get(self.data_location.clone())
            .expect("Unreachable: The block must be part of the data")
    }
}
