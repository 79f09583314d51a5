//! SPLICE drum-machine pattern codec.
//!
//! A `.splice` file holds a hardware version string, a tempo, and an ordered
//! list of instrument tracks with sixteen on/off steps each. This crate
//! decodes those files into a [`Pattern`] and encodes patterns back to the
//! exact same bytes.
//!
//! The codec (`codec`) is byte-oriented and side-effect free; streams and
//! paths are isolated in `file`.
//!
//! Invariants:
//! - `decode(&encode(&p)?)? == p` for every pattern that fits the format.
//! - Track count is implicit: decoding stops when the header's size budget is
//!   spent.
//! - The size field is one byte, so version, tempo and tracks together are
//!   capped at 255 bytes. Larger patterns are rejected, never truncated.
//!
//! # Examples
//! ```
//! use splice_core::{Pattern, Track, decode, encode};
//!
//! let mut pattern = Pattern::new("0.808-alpha", 120.0);
//! let mut steps = [false; 16];
//! steps[0] = true;
//! steps[8] = true;
//! pattern.add_track(Track::new(0, "kick", steps));
//!
//! let bytes = encode(&pattern)?;
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded, pattern);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod codec;
mod file;

pub use codec::{
    FormatError, FormatErrorKind, RangeError, RangeErrorKind, TrackError, TrackField, decode,
    encode,
};
pub use file::{SpliceError, decode_file, decode_reader, encode_file, encode_writer};

/// Number of sequencer steps in every track.
pub const STEPS_PER_TRACK: usize = 16;

/// A decoded drum pattern.
///
/// Tracks keep the order they were added in, which is the lane order used
/// for playback and printing.
///
/// # Examples
/// ```
/// use splice_core::{Pattern, Track};
///
/// let mut pattern = Pattern::new("0.909", 240.0);
/// pattern.add_track(Track::new(1, "Kick", [false; 16]));
/// assert_eq!(pattern.tracks.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Version of the hardware or software that saved the file.
    pub version: String,
    /// Beats per minute.
    pub tempo: f32,
    /// Tracks in file order.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Create a pattern with no tracks.
    pub fn new(version: impl Into<String>, tempo: f32) -> Self {
        Self {
            version: version.into(),
            tempo,
            tracks: Vec::new(),
        }
    }

    /// Append a track after the existing ones.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }
}

/// One instrument lane of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Instrument identifier; unique by convention only.
    pub id: u32,
    /// Instrument name. Encodes to at most 255 bytes.
    pub name: String,
    /// Step flags, step 0 first.
    pub steps: [bool; STEPS_PER_TRACK],
}

impl Track {
    pub fn new(id: u32, name: impl Into<String>, steps: [bool; STEPS_PER_TRACK]) -> Self {
        Self {
            id,
            name: name.into(),
            steps,
        }
    }

    /// Number of steps that sound.
    pub fn active_steps(&self) -> usize {
        self.steps.iter().filter(|on| **on).count()
    }
}

/// Human-readable rendering, one line per track.
///
/// # Examples
/// ```
/// use splice_core::{Pattern, Track};
///
/// let mut pattern = Pattern::new("0.808-alpha", 120.0);
/// let mut steps = [false; 16];
/// steps[0] = true;
/// pattern.add_track(Track::new(0, "kick", steps));
/// assert_eq!(
///     pattern.to_string(),
///     "Saved with HW Version: 0.808-alpha\nTempo: 120\n(0) kick\t|x---|----|----|----|\n"
/// );
/// ```
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t|", self.id, self.name)?;
        for (i, on) in self.steps.iter().enumerate() {
            f.write_str(if *on { "x" } else { "-" })?;
            if (i + 1) % 4 == 0 {
                f.write_str("|")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<Pattern>();
        assert_send_sync::<Track>();
        assert_send_sync::<FormatError>();
        assert_send_sync::<RangeError>();
        assert_send_sync::<TrackError>();
        assert_send_sync::<SpliceError>();
    }

    #[test]
    fn display_matches_step_grid() {
        let mut pattern = Pattern::new("0.909", 98.4);
        let mut steps = [false; STEPS_PER_TRACK];
        steps[2] = true;
        steps[6] = true;
        steps[15] = true;
        pattern.add_track(Track::new(40, "HiHat", steps));

        let rendered = pattern.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Saved with HW Version: 0.909");
        assert_eq!(lines[1], "Tempo: 98.4");
        assert_eq!(lines[2], "(40) HiHat\t|--x-|--x-|----|---x|");
    }

    #[test]
    fn active_steps_counts_on_flags() {
        let track = Track::new(0, "kick", [true; STEPS_PER_TRACK]);
        assert_eq!(track.active_steps(), 16);
        assert_eq!(Track::new(1, "rest", [false; 16]).active_steps(), 0);
    }

    #[test]
    fn pattern_json_shape() {
        let mut pattern = Pattern::new("0.808-alpha", 120.0);
        pattern.add_track(Track::new(0, "kick", [false; STEPS_PER_TRACK]));
        let value = serde_json::to_value(&pattern).expect("pattern json");
        assert_eq!(value["version"], "0.808-alpha");
        assert_eq!(value["tracks"][0]["name"], "kick");
        assert_eq!(value["tracks"][0]["steps"].as_array().map(Vec::len), Some(16));
    }

    #[test]
    fn pattern_json_without_tracks() {
        let pattern: Pattern =
            serde_json::from_str(r#"{"version":"0.909","tempo":240}"#).expect("parse pattern");
        assert!(pattern.tracks.is_empty());
        assert_eq!(pattern.tempo, 240.0);
    }
}
