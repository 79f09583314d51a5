pub const MAGIC: &[u8; 6] = b"SPLICE";

pub const MAGIC_FIELD_RANGE: std::ops::Range<usize> = 0..13;
pub const MAGIC_RANGE: std::ops::Range<usize> = 0..6;
pub const SIZE_OFFSET: usize = 13;
pub const VERSION_RANGE: std::ops::Range<usize> = 14..46;
pub const TEMPO_RANGE: std::ops::Range<usize> = 46..50;

pub const HEADER_LEN: usize = 50;
pub const VERSION_LEN: usize = 32;
pub const TEMPO_LEN: usize = 4;

/// Bytes counted by the size field before any track data.
pub const PAYLOAD_BASE_LEN: usize = VERSION_LEN + TEMPO_LEN;
/// The size field is a single byte.
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize;
