#![doc = include_str!("../README.md")]

pub use {tintype_bim as bim, tintype_common as common, tintype_exif as exif, tintype_raf as raf};
