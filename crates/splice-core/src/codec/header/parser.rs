use tracing::debug;

use crate::codec::error::FormatError;

use super::layout;
use super::reader::HeaderReader;

/// Decoded file header.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub version: String,
    pub tempo: f32,
    /// Number of track bytes that follow the header.
    pub track_bytes: usize,
}

pub fn parse_header(payload: &[u8]) -> Result<Header, FormatError> {
    let reader = HeaderReader::new(payload);
    reader.require_magic()?;
    reader.require_len(layout::HEADER_LEN)?;

    let size = reader.read_u8(layout::SIZE_OFFSET)?;
    let track_bytes = (size as usize)
        .checked_sub(layout::PAYLOAD_BASE_LEN)
        .ok_or(FormatError::SizeUnderflow { size })?;

    let version = reader.read_padded_string(layout::VERSION_RANGE)?;
    let tempo = reader.read_f32_le(layout::TEMPO_RANGE)?;
    debug!(%version, tempo, track_bytes, "decoded splice header");

    Ok(Header {
        version,
        tempo,
        track_bytes,
    })
}
