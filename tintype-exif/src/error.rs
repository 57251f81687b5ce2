use tintype_common::math::MathError;

use crate::internal::Type;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Exif preamble missing")]
    PreambleMissing,
    #[error("Unknown byte order: {0:x?}")]
    UnknownByteOrder([u8; 2]),
    #[error("Wrong magic bytes: {0}")]
    MagicBytesWrong(u16),
    #[error("Lookup before the directory was assembled")]
    NotAssembled,
    #[error("Directory assembled twice")]
    AlreadyAssembled,
    #[error("Unexpected end of data reading byte order")]
    ByteOrderEof,
    #[error("Unexpected end of data reading magic bytes")]
    MagicBytesEof,
    #[error("Unexpected end of data reading number of entries")]
    NumEntriesEof,
    #[error("Unexpected end of data reading entry")]
    EntryEof,
    #[error("Unexpected end of data reading value")]
    LookupEof,
    #[error("Data size too large")]
    DataSizeTooLarge,
    #[error("Expected value but entry stores an offset")]
    OffsetInsteadOfValue,
    #[error("Expected offset but entry stores a value")]
    ValueInsteadOfOffset,
    #[error("Entry has no textual type: {0:?}")]
    UnexpectedType(Type),
    #[error("Wrong type: expected {expected:?}, actual {actual:?}")]
    WrongType {
        expected: (u32, Type),
        actual: (u32, Type),
    },
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }
}
