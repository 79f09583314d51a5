use tracing::trace;

use crate::Track;

use super::error::{TrackError, TrackField};
use super::layout;
use super::reader::TrackReader;

/// Parse one track record from the start of `payload`.
///
/// Returns the track and the number of bytes the record occupied; bytes past
/// the record are left for the caller.
pub fn parse_track(payload: &[u8]) -> Result<(Track, usize), TrackError> {
    let reader = TrackReader::new(payload);

    let id = reader.read_u32_le(layout::ID_RANGE, TrackField::Id)?;
    let name_len = reader.read_u8(layout::NAME_LEN_OFFSET, TrackField::NameLength)? as usize;
    let name = reader.read_string(layout::name_range(name_len), TrackField::Name)?;
    let steps = reader.read_steps(layout::steps_range(name_len))?;
    trace!(id, %name, "decoded track record");

    Ok((Track { id, name, steps }, layout::record_len(name_len)))
}
