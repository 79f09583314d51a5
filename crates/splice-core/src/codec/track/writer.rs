use crate::Track;
use crate::codec::common::reader::step_to_byte;
use crate::codec::error::RangeError;

use super::layout;

/// Append the record for `track` to `out` and return its length.
///
/// A name that does not fit the length byte is rejected before anything is
/// appended.
pub fn write_track(track: &Track, out: &mut Vec<u8>) -> Result<usize, RangeError> {
    let name = track.name.as_bytes();
    if name.len() > layout::MAX_NAME_LEN {
        return Err(RangeError::NameTooLong {
            id: track.id,
            len: name.len(),
        });
    }

    let len = layout::record_len(name.len());
    out.reserve(len);
    out.extend_from_slice(&track.id.to_le_bytes());
    out.push(name.len() as u8);
    out.extend_from_slice(name);
    out.extend(track.steps.iter().map(|&on| step_to_byte(on)));
    Ok(len)
}
