//! Whole-file decoding and encoding.
//!
//! There is no track count in the format: the decoder reads records until the
//! header's byte budget is spent, and the encoder sizes the header from the
//! records it produced.

mod decoder;
mod encoder;

pub use decoder::decode;
pub(crate) use decoder::decode_tracks;
pub use encoder::encode;
