use std::io::{Cursor, Read, Seek, SeekFrom};

use tintype_common::endian::ByteOrder;
use tintype_common::math::*;

use crate::error::Result;

/// Cursor over the raw Exif blob
///
/// Offsets reported inside the directory are relative to the TIFF body,
/// which starts after the preamble; `base` holds that shift so that seeks
/// and positions stay in directory terms.
#[derive(Debug, Clone)]
pub struct Raw {
    pub order: ByteOrder,
    pub(crate) base: u64,
    buffer: Cursor<Vec<u8>>,
}

impl Raw {
    pub fn new(buffer: Vec<u8>) -> Self {
        Self {
            order: ByteOrder::LittleEndian,
            base: 0,
            buffer: Cursor::new(buffer),
        }
    }

    /// Position relative to the TIFF body
    pub fn position(&self) -> Result<u32> {
        Ok(self.buffer.position().safe_sub(self.base)?.u32()?)
    }

    /// Seek to a directory offset
    pub fn seek_start(&mut self, seek: u32) -> Result<()> {
        self.buffer
            .seek(SeekFrom::Start(self.base.safe_add(seek.u64()?)?))?;

        Ok(())
    }

    pub fn read_exact<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes: [u8; N] = [0; N];
        self.buffer.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0; len];
        self.buffer.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.order.u16_bytes(self.read_exact()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.order.u32_bytes(self.read_exact()?))
    }
}
