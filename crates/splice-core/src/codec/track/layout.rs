pub const ID_RANGE: std::ops::Range<usize> = 0..4;
pub const NAME_LEN_OFFSET: usize = 4;
pub const NAME_OFFSET: usize = 5;
pub const STEPS_LEN: usize = 16;

/// Bytes of a record that do not depend on the name.
pub const FIXED_LEN: usize = NAME_OFFSET + STEPS_LEN;
/// The name length is a single byte.
pub const MAX_NAME_LEN: usize = u8::MAX as usize;

pub fn name_range(name_len: usize) -> std::ops::Range<usize> {
    NAME_OFFSET..NAME_OFFSET + name_len
}

pub fn steps_range(name_len: usize) -> std::ops::Range<usize> {
    let start = NAME_OFFSET + name_len;
    start..start + STEPS_LEN
}

/// Total encoded size of a record whose name is `name_len` bytes.
pub fn record_len(name_len: usize) -> usize {
    FIXED_LEN + name_len
}
