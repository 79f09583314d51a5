use tracing::debug;

use crate::Pattern;
use crate::codec::error::FormatError;
use crate::codec::header::{self, Header, parse_header};
use crate::codec::track::parse_track;

/// Decode a complete SPLICE file held in memory.
///
/// Bytes past the header's declared size are ignored.
///
/// # Examples
/// ```
/// use splice_core::{Pattern, Track, decode, encode};
///
/// let mut pattern = Pattern::new("0.909", 98.4);
/// pattern.add_track(Track::new(1, "snare", [false; 16]));
/// let bytes = encode(&pattern)?;
/// assert_eq!(decode(&bytes)?, pattern);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns `FormatError` when the magic is wrong, the header is cut short,
/// or the track data does not fill the declared size.
pub fn decode(bytes: &[u8]) -> Result<Pattern, FormatError> {
    let header = parse_header(bytes)?;
    let rest = bytes.get(header::layout::HEADER_LEN..).unwrap_or_default();
    decode_tracks(header, rest)
}

/// Build a pattern from a parsed header and the bytes that follow it.
///
/// Exactly `header.track_bytes` bytes are consumed; the track loop ends when
/// that budget is used up.
pub(crate) fn decode_tracks(header: Header, rest: &[u8]) -> Result<Pattern, FormatError> {
    let budget = header.track_bytes;
    let bounded = &rest[..budget.min(rest.len())];
    if rest.len() > budget {
        debug!(ignored = rest.len() - budget, "ignoring bytes past declared size");
    }

    let mut pattern = Pattern::new(header.version, header.tempo);
    let mut offset = 0;
    while offset < bounded.len() {
        let (track, used) =
            parse_track(&bounded[offset..]).map_err(|source| FormatError::TruncatedTrack {
                index: pattern.tracks.len(),
                offset,
                source,
            })?;
        pattern.add_track(track);
        offset += used;
    }

    if bounded.len() < budget {
        return Err(FormatError::TrackDataShort {
            declared: budget,
            actual: bounded.len(),
        });
    }
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::decode;
    use crate::codec::error::{FormatError, FormatErrorKind};
    use crate::codec::header::layout;
    use crate::codec::track::error::{TrackError, TrackField};

    fn header(size: u8) -> Vec<u8> {
        let mut bytes = vec![0u8; layout::HEADER_LEN];
        bytes[layout::MAGIC_RANGE].copy_from_slice(layout::MAGIC);
        bytes[layout::SIZE_OFFSET] = size;
        bytes[layout::VERSION_RANGE.start..layout::VERSION_RANGE.start + 5]
            .copy_from_slice(b"0.909");
        bytes[layout::TEMPO_RANGE].copy_from_slice(&240.0f32.to_le_bytes());
        bytes
    }

    fn record(id: u32, name: &str, on: &[usize]) -> Vec<u8> {
        let mut bytes = id.to_le_bytes().to_vec();
        bytes.push(name.len() as u8);
        bytes.extend_from_slice(name.as_bytes());
        let mut steps = [0u8; 16];
        for &i in on {
            steps[i] = 1;
        }
        bytes.extend_from_slice(&steps);
        bytes
    }

    #[test]
    fn decode_header_only() {
        let pattern = decode(&header(36)).unwrap();
        assert_eq!(pattern.version, "0.909");
        assert_eq!(pattern.tempo, 240.0);
        assert!(pattern.tracks.is_empty());
    }

    #[test]
    fn decode_tracks_in_file_order() {
        let first = record(40, "SubKick", &[0, 8]);
        let second = record(1, "Kick", &[4, 12]);
        let mut bytes = header((36 + first.len() + second.len()) as u8);
        bytes.extend_from_slice(&first);
        bytes.extend_from_slice(&second);

        let pattern = decode(&bytes).unwrap();
        let ids: Vec<u32> = pattern.tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![40, 1]);
        assert_eq!(pattern.tracks[0].name, "SubKick");
        assert!(pattern.tracks[1].steps[12]);
        assert!(!pattern.tracks[1].steps[0]);
    }

    #[test]
    fn decode_stops_at_budget() {
        let first = record(0, "kick", &[0]);
        let mut bytes = header((36 + first.len()) as u8);
        bytes.extend_from_slice(&first);
        bytes.extend_from_slice(&record(1, "trailing", &[1]));

        let pattern = decode(&bytes).unwrap();
        assert_eq!(pattern.tracks.len(), 1);
        assert_eq!(pattern.tracks[0].name, "kick");
    }

    #[test]
    fn decode_record_cut_by_budget() {
        let first = record(0, "kick", &[0]);
        let mut bytes = header((36 + first.len() - 3) as u8);
        bytes.extend_from_slice(&first);

        let err = decode(&bytes).unwrap_err();
        assert_eq!(
            err,
            FormatError::TruncatedTrack {
                index: 0,
                offset: 0,
                source: TrackError::TruncatedRecord {
                    field: TrackField::Steps,
                    needed: 16,
                    actual: 13,
                },
            }
        );
    }

    #[test]
    fn decode_input_shorter_than_budget_mid_record() {
        let first = record(0, "kick", &[0]);
        let second = record(1, "snare", &[4]);
        let mut bytes = header((36 + first.len() + second.len()) as u8);
        bytes.extend_from_slice(&first);
        bytes.extend_from_slice(&second[..6]);

        let err = decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            FormatError::TruncatedTrack {
                index: 1,
                offset: 25,
                ..
            }
        ));
        assert_eq!(err.kind(), FormatErrorKind::TruncatedTrack);
    }

    #[test]
    fn decode_input_shorter_than_budget_on_record_boundary() {
        let first = record(0, "kick", &[0]);
        let mut bytes = header((36 + first.len() * 2) as u8);
        bytes.extend_from_slice(&first);

        let err = decode(&bytes).unwrap_err();
        assert_eq!(
            err,
            FormatError::TrackDataShort {
                declared: 50,
                actual: 25
            }
        );
        assert_eq!(err.kind(), FormatErrorKind::TruncatedTrack);
    }

    #[test]
    fn decode_every_prefix_fails_cleanly() {
        let first = record(0, "kick", &[0, 4, 8, 12]);
        let mut bytes = header((36 + first.len()) as u8);
        bytes.extend_from_slice(&first);

        for len in 0..bytes.len() {
            let err = decode(&bytes[..len]).unwrap_err();
            assert_ne!(err.kind(), FormatErrorKind::MalformedMagic, "prefix {len}");
        }
        assert!(decode(&bytes).is_ok());
    }
}
