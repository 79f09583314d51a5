use crate::STEPS_PER_TRACK;
use crate::codec::common::reader::{step_from_byte, text_from_bytes};

use super::error::{TrackError, TrackField};
use super::layout;

pub struct TrackReader<'a> {
    payload: &'a [u8],
}

impl<'a> TrackReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn read_u8(&self, offset: usize, field: TrackField) -> Result<u8, TrackError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or_else(|| self.truncated(field, offset..offset + 1))
    }

    pub fn read_u32_le(
        &self,
        range: std::ops::Range<usize>,
        field: TrackField,
    ) -> Result<u32, TrackError> {
        let bytes = self.read_slice(range.clone(), field)?;
        let bytes: [u8; 4] = bytes
            .try_into()
            .map_err(|_| self.truncated(field, range))?;
        Ok(u32::from_le_bytes(bytes))
    }

    pub fn read_slice(
        &self,
        range: std::ops::Range<usize>,
        field: TrackField,
    ) -> Result<&'a [u8], TrackError> {
        self.payload
            .get(range.clone())
            .ok_or_else(|| self.truncated(field, range))
    }

    pub fn read_string(
        &self,
        range: std::ops::Range<usize>,
        field: TrackField,
    ) -> Result<String, TrackError> {
        let bytes = self.read_slice(range, field)?;
        Ok(text_from_bytes(bytes))
    }

    pub fn read_steps(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<[bool; STEPS_PER_TRACK], TrackError> {
        let bytes = self.read_slice(range, TrackField::Steps)?;
        let mut steps = [false; STEPS_PER_TRACK];
        for (step, byte) in steps.iter_mut().zip(bytes) {
            *step = step_from_byte(*byte);
        }
        Ok(steps)
    }

    /// Error for a field occupying `range` that the payload cannot cover.
    fn truncated(&self, field: TrackField, range: std::ops::Range<usize>) -> TrackError {
        TrackError::TruncatedRecord {
            field,
            needed: range.len(),
            actual: self.payload.len().saturating_sub(range.start),
        }
    }
}
