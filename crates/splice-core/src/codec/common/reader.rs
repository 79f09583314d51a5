pub(crate) const STEP_ON: u8 = 0x01;
pub(crate) const STEP_OFF: u8 = 0x00;

/// A step is on only when its byte is exactly `0x01`.
pub(crate) fn step_from_byte(value: u8) -> bool {
    value == STEP_ON
}

pub(crate) fn step_to_byte(on: bool) -> u8 {
    if on { STEP_ON } else { STEP_OFF }
}

pub(crate) fn text_from_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub(crate) fn trim_trailing_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    &bytes[..end]
}
