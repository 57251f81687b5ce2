use tintype_common::math::MathError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected end of resource stream")]
    UnexpectedEof,
    #[error("Invalid resource signature: {0:x?}")]
    InvalidSignature([u8; 4]),
    #[error("Invalid dataset marker: {0:#04x}")]
    InvalidDataSetMarker(u8),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}
