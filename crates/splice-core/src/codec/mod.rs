//! SPLICE binary codec.
//!
//! Each part of the file follows a layered structure:
//! - `layout`: byte offsets, ranges and field widths (source of truth)
//! - `reader`: bounds-checked byte access
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `writer`: domain-level encoding into a byte buffer
//! - `error`: explicit, actionable errors
//!
//! Everything here is pure and works on byte slices; the `file` module owns
//! streams and paths.

pub(crate) mod common;
pub mod error;
pub mod header;
pub mod pattern;
pub mod track;

pub use error::{FormatError, FormatErrorKind, RangeError, RangeErrorKind};
pub use pattern::{decode, encode};
pub use track::error::{TrackError, TrackField};
