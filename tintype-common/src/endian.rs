//! Byte-order aware integer reads
//!
//! All container formats handled by the tintype crates declare fixed-width
//! unsigned integers in an explicit byte order. The containers themselves are
//! big-endian by convention, but embedded sub-payloads (TIFF bodies in
//! particular) choose their own order, so both are supported.

/// Byte order of an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

/// A read of `width` bytes at `offset` did not fit into the buffer
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("Read of {width} bytes at offset {offset} exceeds buffer of {available} bytes")]
pub struct OutOfRangeError {
    pub offset: usize,
    pub width: usize,
    pub available: usize,
}

impl ByteOrder {
    /// Decode the two bytes at `offset` as an unsigned 16-bit integer
    ///
    /// ```
    /// # use tintype_common::endian::ByteOrder;
    /// let data = [0x12, 0x34];
    /// assert_eq!(ByteOrder::BigEndian.u16(&data, 0).unwrap(), 0x1234);
    /// assert_eq!(ByteOrder::LittleEndian.u16(&data, 0).unwrap(), 0x3412);
    /// assert!(ByteOrder::BigEndian.u16(&data, 1).is_err());
    /// ```
    pub fn u16(self, data: &[u8], offset: usize) -> Result<u16, OutOfRangeError> {
        Ok(self.u16_bytes(take(data, offset)?))
    }

    /// Decode the four bytes at `offset` as an unsigned 32-bit integer
    pub fn u32(self, data: &[u8], offset: usize) -> Result<u32, OutOfRangeError> {
        Ok(self.u32_bytes(take(data, offset)?))
    }

    /// Combine two already extracted bytes
    pub fn u16_bytes(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::BigEndian => u16::from_be_bytes(bytes),
            Self::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    /// Combine four already extracted bytes
    pub fn u32_bytes(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::BigEndian => u32::from_be_bytes(bytes),
            Self::LittleEndian => u32::from_le_bytes(bytes),
        }
    }

    /// Split an integer back into bytes in this order
    pub fn u32_to_bytes(self, value: u32) -> [u8; 4] {
        match self {
            Self::BigEndian => value.to_be_bytes(),
            Self::LittleEndian => value.to_le_bytes(),
        }
    }
}

fn take<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], OutOfRangeError> {
    let err = OutOfRangeError {
        offset,
        width: N,
        available: data.len(),
    };

    let end = offset.checked_add(N).ok_or(err)?;

    data.get(offset..end)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(err)
}
