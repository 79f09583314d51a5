use thiserror::Error;

/// Errors returned by track record parsing.
///
/// # Examples
/// ```
/// use splice_core::{TrackError, TrackField};
///
/// let err = TrackError::TruncatedRecord {
///     field: TrackField::Steps,
///     needed: 16,
///     actual: 3,
/// };
/// assert_eq!(err.to_string(), "truncated record: steps needs 16 bytes, got 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("truncated record: {field} needs {needed} bytes, got {actual}")]
    TruncatedRecord {
        field: TrackField,
        needed: usize,
        actual: usize,
    },
}

/// Record field that was being read when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Id,
    NameLength,
    Name,
    Steps,
}

impl std::fmt::Display for TrackField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TrackField::Id => "id",
            TrackField::NameLength => "name length",
            TrackField::Name => "name",
            TrackField::Steps => "steps",
        };
        f.write_str(label)
    }
}
