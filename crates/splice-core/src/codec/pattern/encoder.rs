use tracing::debug;

use crate::Pattern;
use crate::codec::error::RangeError;
use crate::codec::header::{self, write_header};
use crate::codec::track::write_track;

/// Encode `pattern` into a complete SPLICE file.
///
/// Track records are produced first so the header's size field can be
/// computed from their total; nothing is returned unless every field fits.
///
/// # Examples
/// ```
/// use splice_core::{Pattern, Track, encode};
///
/// let mut pattern = Pattern::new("0.808-alpha", 120.0);
/// pattern.add_track(Track::new(0, "kick", [false; 16]));
/// let bytes = encode(&pattern)?;
/// assert_eq!(&bytes[..6], b"SPLICE");
/// assert_eq!(bytes[13], 36 + 25);
/// # Ok::<(), splice_core::RangeError>(())
/// ```
///
/// # Errors
/// Returns `RangeError` when a name, the version, or the total payload
/// exceeds its fixed-width field.
pub fn encode(pattern: &Pattern) -> Result<Vec<u8>, RangeError> {
    let mut records = Vec::new();
    for track in &pattern.tracks {
        write_track(track, &mut records)?;
    }

    let mut out = Vec::with_capacity(header::layout::HEADER_LEN + records.len());
    write_header(pattern, records.len(), &mut out)?;
    out.extend_from_slice(&records);
    debug!(
        tracks = pattern.tracks.len(),
        track_bytes = records.len(),
        "encoded splice pattern"
    );
    Ok(out)
}
