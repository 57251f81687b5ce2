#![doc = include_str!("../README.md")]

mod bim;
mod block;
pub mod error;
pub mod iptc;

pub use bim::*;
pub use block::*;
pub use error::Error;
