use crate::codec::common::reader::{text_from_bytes, trim_trailing_nul};
use crate::codec::error::FormatError;

use super::layout;

pub struct HeaderReader<'a> {
    payload: &'a [u8],
}

impl<'a> HeaderReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FormatError> {
        if self.payload.len() < needed {
            return Err(FormatError::TruncatedHeader {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    /// Check the magic against whatever prefix of it is available.
    ///
    /// A short input whose bytes still agree with `SPLICE` passes here and is
    /// rejected later by `require_len`.
    pub fn require_magic(&self) -> Result<(), FormatError> {
        let available = self.payload.len().min(layout::MAGIC_RANGE.end);
        let found = &self.payload[..available];
        if *found != layout::MAGIC[..available] {
            return Err(FormatError::MalformedMagic {
                found: String::from_utf8_lossy(found).into_owned(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, FormatError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(FormatError::TruncatedHeader {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_f32_le(&self, range: std::ops::Range<usize>) -> Result<f32, FormatError> {
        let bytes = self.read_slice(range)?;
        let bytes: [u8; 4] = bytes.try_into().map_err(|_| FormatError::TruncatedHeader {
            needed: 4,
            actual: bytes.len(),
        })?;
        Ok(f32::from_le_bytes(bytes))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], FormatError> {
        self.payload
            .get(range.clone())
            .ok_or(FormatError::TruncatedHeader {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    /// Read a zero-padded text field, dropping the trailing padding.
    pub fn read_padded_string(&self, range: std::ops::Range<usize>) -> Result<String, FormatError> {
        let bytes = self.read_slice(range)?;
        Ok(text_from_bytes(trim_trailing_nul(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderReader;
    use crate::codec::error::FormatError;
    use crate::codec::header::layout;

    #[test]
    fn require_magic_accepts_matching_prefix() {
        let reader = HeaderReader::new(b"SPL");
        assert!(reader.require_magic().is_ok());
    }

    #[test]
    fn require_magic_rejects_wrong_prefix() {
        let reader = HeaderReader::new(b"SPX");
        let err = reader.require_magic().unwrap_err();
        assert!(matches!(err, FormatError::MalformedMagic { ref found } if found == "SPX"));
    }

    #[test]
    fn read_padded_string_strips_padding() {
        let mut payload = vec![0u8; layout::HEADER_LEN];
        payload[layout::VERSION_RANGE.start..layout::VERSION_RANGE.start + 5]
            .copy_from_slice(b"0.909");
        let reader = HeaderReader::new(&payload);
        let version = reader.read_padded_string(layout::VERSION_RANGE).unwrap();
        assert_eq!(version, "0.909");
    }

    #[test]
    fn read_slice_out_of_bounds() {
        let payload = [0u8; 20];
        let reader = HeaderReader::new(&payload);
        let err = reader.read_slice(layout::VERSION_RANGE).unwrap_err();
        assert!(matches!(
            err,
            FormatError::TruncatedHeader {
                needed: 46,
                actual: 20
            }
        ));
    }
}
