//! Stream and file access for SPLICE patterns.
//!
//! The codec works on byte slices; this module feeds it from `Read`
//! implementations and paths, and writes encoded output only once encoding
//! has fully succeeded.

pub mod error;
pub(crate) mod reader;

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::Pattern;
use crate::codec::encode;
use crate::codec::header::{layout, parse_header};
use crate::codec::pattern::decode_tracks;

pub use error::SpliceError;
use reader::read_up_to;

/// Decode a pattern from a byte stream.
///
/// Reads the header, then exactly the number of track bytes it declares;
/// the stream is never read past that point.
///
/// # Errors
/// Returns `SpliceError::Format` for malformed or short input and
/// `SpliceError::Io` when the stream itself fails.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<Pattern, SpliceError> {
    let mut head = [0u8; layout::HEADER_LEN];
    let read = read_up_to(&mut reader, &mut head)?;
    let header = parse_header(&head[..read])?;

    let mut rest = Vec::with_capacity(header.track_bytes);
    reader
        .take(header.track_bytes as u64)
        .read_to_end(&mut rest)?;
    decode_tracks(header, &rest).map_err(SpliceError::from)
}

/// Encode `pattern` and write it to `writer` in a single call.
///
/// # Errors
/// Returns `SpliceError::Range` before anything is written when the pattern
/// does not fit the format, and `SpliceError::Io` when writing fails.
pub fn encode_writer<W: Write>(pattern: &Pattern, mut writer: W) -> Result<(), SpliceError> {
    let bytes = encode(pattern)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Decode the `.splice` file at `path`.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use splice_core::decode_file;
///
/// let pattern = decode_file(Path::new("pattern_1.splice"))?;
/// print!("{pattern}");
/// # Ok::<(), splice_core::SpliceError>(())
/// ```
///
/// # Errors
/// See [`decode_reader`]; opening the file can also fail with
/// `SpliceError::Io`.
pub fn decode_file(path: &Path) -> Result<Pattern, SpliceError> {
    debug!(path = %path.display(), "decoding splice file");
    let file = File::open(path)?;
    decode_reader(BufReader::new(file))
}

/// Encode `pattern` into a file at `path`, replacing any existing file.
///
/// The file is only created once encoding has succeeded.
///
/// # Errors
/// See [`encode_writer`].
pub fn encode_file(path: &Path, pattern: &Pattern) -> Result<(), SpliceError> {
    let bytes = encode(pattern)?;
    debug!(path = %path.display(), len = bytes.len(), "writing splice file");
    std::fs::write(path, bytes)?;
    Ok(())
}
