#![doc = include_str!("../README.md")]

pub mod endian;
pub mod error;
pub mod exif;
pub mod math;
pub mod utils;
