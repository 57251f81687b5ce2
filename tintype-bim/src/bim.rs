use std::io::{Cursor, Read};

use tintype_common::error::ErrorWithData;
use tintype_common::math::*;

pub use super::*;

/// Every resource block starts with these signature bytes
pub const SIGNATURE: &[u8; 4] = b"8BIM";

/// An ordered sequence of resource blocks
///
/// Built once per parse and queried read-only afterwards. The container owns
/// the complete stream data; blocks reference ranges into it.
#[derive(Debug, Clone)]
pub struct Bim {
    /// Raw data
    pub(crate) data: Vec<u8>,
    /// Blocks in the order in which they appear in the data
    pub(crate) blocks: Vec<RawBlock>,
}

impl Bim {
    /// Returns the parsed resource block container
    ///
    /// * `data`: complete resource stream, starting with the first block
    ///
    /// A signature mismatch or a block cut off by the end of the stream is
    /// fatal. No partial container is ever returned since block boundaries
    /// cannot be re-synchronized without the signature anchor.
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        match Self::find_blocks(&data) {
            Ok(blocks) => Ok(Self { data, blocks }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Returns all blocks
    pub fn blocks(&self) -> Vec<Block> {
        self.blocks.iter().map(|x| x.block(self)).collect()
    }

    /// Returns the first block with the given id
    ///
    /// Ids may repeat within a stream; the first occurrence wins.
    pub fn block_by_id(&self, block_id: BlockId) -> Option<Block> {
        self.blocks
            .iter()
            .find(|x| x.block_id == block_id)
            .map(|x| x.block(self))
    }

    /// List all blocks in the data
    ///
    /// Wire layout of a single block:
    ///
    /// ```text
    /// "8BIM" | id:u16 BE | nameLen:u8 | name | pad | dataLen:u32 BE | data | pad
    /// ```
    ///
    /// The name field (length byte plus contents) and the data field are each
    /// padded to an even byte count. Name contents are consumed but not
    /// interpreted.
    fn find_blocks(data: &[u8]) -> Result<Vec<RawBlock>, Error> {
        let total = data.len();
        let mut cur = Cursor::new(data);
        let mut blocks = Vec::new();

        loop {
            if cur.position().usize()? == total {
                break;
            }

            let signature = &mut [0; 4];
            cur.read_exact(signature).map_err(|_| Error::UnexpectedEof)?;
            if signature != SIGNATURE {
                return Err(Error::InvalidSignature(*signature));
            }

            let id = &mut [0; 2];
            cur.read_exact(id).map_err(|_| Error::UnexpectedEof)?;
            let block_id = BlockId::from(u16::from_be_bytes(*id));

            let name_len = &mut [0; 1];
            cur.read_exact(name_len).map_err(|_| Error::UnexpectedEof)?;
            // The length byte itself counts towards the even-sized name
            // field, so an even name length needs one byte of padding.
            let name_skip = if name_len[0] % 2 == 0 {
                usize::from(name_len[0]).safe_add(1)?
            } else {
                usize::from(name_len[0])
            };
            let after_name = cur.position().usize()?.safe_add(name_skip)?;
            if after_name > total {
                return Err(Error::UnexpectedEof);
            }
            cur.set_position(after_name.u64()?);

            let len = &mut [0; 4];
            cur.read_exact(len).map_err(|_| Error::UnexpectedEof)?;
            let data_len = u32::from_be_bytes(*len).usize()?;

            let data_start = cur.position().usize()?;
            let data_end = data_start.safe_add(data_len)?;
            let padded_end = if data_len % 2 == 1 {
                data_end.safe_add(1)?
            } else {
                data_end
            };
            if padded_end > total {
                return Err(Error::UnexpectedEof);
            }
            cur.set_position(padded_end.u64()?);

            tracing::debug!("Resource block {block_id:?} with {data_len} data bytes");

            blocks.push(RawBlock {
                block_id,
                data_location: data_start..data_end,
            });
        }

        Ok(blocks)
    }
}
