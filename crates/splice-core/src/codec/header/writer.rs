use crate::Pattern;
use crate::codec::error::RangeError;

use super::layout;

/// Append the 50-byte header for `pattern`, given the total size of its
/// encoded track records.
///
/// Validates everything before writing, so `out` is untouched on error.
pub fn write_header(
    pattern: &Pattern,
    track_bytes: usize,
    out: &mut Vec<u8>,
) -> Result<(), RangeError> {
    let size = layout::PAYLOAD_BASE_LEN.saturating_add(track_bytes);
    if size > layout::MAX_PAYLOAD_LEN {
        return Err(RangeError::PayloadTooLarge { size });
    }

    let version = pattern.version.as_bytes();
    if version.len() > layout::VERSION_LEN {
        return Err(RangeError::VersionTooLong { len: version.len() });
    }
    if version.last() == Some(&0) {
        return Err(RangeError::VersionTrailingNul {
            version: pattern.version.clone(),
        });
    }

    let start = out.len();
    out.resize(start + layout::HEADER_LEN, 0);
    let header = &mut out[start..];
    header[layout::MAGIC_RANGE].copy_from_slice(layout::MAGIC);
    header[layout::SIZE_OFFSET] = size as u8;
    header[layout::VERSION_RANGE.start..layout::VERSION_RANGE.start + version.len()]
        .copy_from_slice(version);
    header[layout::TEMPO_RANGE].copy_from_slice(&pattern.tempo.to_le_bytes());
    Ok(())
}
