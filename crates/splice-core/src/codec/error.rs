use thiserror::Error;

use super::track::error::TrackError;

/// Input bytes that do not follow the SPLICE layout.
///
/// Decoding aborts on the first error; nothing is recovered.
///
/// # Examples
/// ```
/// use splice_core::{FormatErrorKind, decode};
///
/// let err = decode(b"NOTSPLICE").unwrap_err();
/// assert_eq!(err.kind(), FormatErrorKind::MalformedMagic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("malformed magic: expected \"SPLICE\", got {found:?}")]
    MalformedMagic { found: String },
    #[error("truncated header: need {needed} bytes, got {actual}")]
    TruncatedHeader { needed: usize, actual: usize },
    #[error("declared size {size} is below the 36-byte version and tempo fields")]
    SizeUnderflow { size: u8 },
    #[error("truncated track {index} at track byte {offset}: {source}")]
    TruncatedTrack {
        index: usize,
        offset: usize,
        #[source]
        source: TrackError,
    },
    #[error("track data too short: header declares {declared} bytes, got {actual}")]
    TrackDataShort { declared: usize, actual: usize },
}

/// Coarse classification of [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    MalformedMagic,
    TruncatedHeader,
    TruncatedTrack,
}

impl FormatError {
    pub fn kind(&self) -> FormatErrorKind {
        match self {
            FormatError::MalformedMagic { .. } => FormatErrorKind::MalformedMagic,
            FormatError::TruncatedHeader { .. } | FormatError::SizeUnderflow { .. } => {
                FormatErrorKind::TruncatedHeader
            }
            FormatError::TruncatedTrack { .. } | FormatError::TrackDataShort { .. } => {
                FormatErrorKind::TruncatedTrack
            }
        }
    }
}

/// A pattern value that cannot be represented in the fixed-width fields.
///
/// Raised before any output exists, so encoding is all-or-nothing.
///
/// # Examples
/// ```
/// use splice_core::{Pattern, RangeErrorKind, Track, encode};
///
/// let mut pattern = Pattern::new("0.808-alpha", 120.0);
/// pattern.add_track(Track::new(0, "x".repeat(256), [false; 16]));
/// let err = encode(&pattern).unwrap_err();
/// assert_eq!(err.kind(), RangeErrorKind::NameTooLong);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("track {id} name is {len} bytes, limit is 255")]
    NameTooLong { id: u32, len: usize },
    #[error("payload is {size} bytes, the size field holds at most 255")]
    PayloadTooLarge { size: usize },
    #[error("version is {len} bytes, the version field holds 32")]
    VersionTooLong { len: usize },
    #[error("version {version:?} ends in a NUL byte, which the zero padding cannot preserve")]
    VersionTrailingNul { version: String },
}

/// Coarse classification of [`RangeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeErrorKind {
    NameTooLong,
    PayloadTooLarge,
    VersionTooLong,
    VersionTrailingNul,
}

impl RangeError {
    pub fn kind(&self) -> RangeErrorKind {
        match self {
            RangeError::NameTooLong { .. } => RangeErrorKind::NameTooLong,
            RangeError::PayloadTooLarge { .. } => RangeErrorKind::PayloadTooLarge,
            RangeError::VersionTooLong { .. } => RangeErrorKind::VersionTooLong,
            RangeError::VersionTrailingNul { .. } => RangeErrorKind::VersionTrailingNul,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::track::error::TrackField;

    #[test]
    fn size_underflow_is_a_header_error() {
        let err = FormatError::SizeUnderflow { size: 12 };
        assert_eq!(err.kind(), FormatErrorKind::TruncatedHeader);
        assert!(err.to_string().contains("declared size 12"));
    }

    #[test]
    fn truncated_track_reports_record_field() {
        let err = FormatError::TruncatedTrack {
            index: 2,
            offset: 40,
            source: TrackError::TruncatedRecord {
                field: TrackField::Steps,
                needed: 16,
                actual: 5,
            },
        };
        assert_eq!(err.kind(), FormatErrorKind::TruncatedTrack);
        let msg = err.to_string();
        assert!(msg.contains("truncated track 2"));
        assert!(msg.contains("steps needs 16 bytes, got 5"));
    }

    #[test]
    fn range_error_messages_name_the_limit() {
        let err = RangeError::PayloadTooLarge { size: 300 };
        assert!(err.to_string().contains("at most 255"));
        let err = RangeError::VersionTooLong { len: 40 };
        assert!(err.to_string().contains("holds 32"));
        let err = RangeError::VersionTrailingNul {
            version: "0.808\0".to_string(),
        };
        assert_eq!(err.kind(), RangeErrorKind::VersionTrailingNul);
        assert!(err.to_string().contains("NUL byte"));
    }
}
