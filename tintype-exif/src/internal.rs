//! Directory decoding internals
//!
//! [`ExifRaw`] gives raw access to the tag index without the state checks of
//! the [`ExifData`](crate::ExifData) facade.

mod exif_raw;
mod raw;
mod type_;

pub use exif_raw::*;
pub use raw::*;
pub use type_::*;
