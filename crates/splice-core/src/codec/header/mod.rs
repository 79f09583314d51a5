//! Fixed-size SPLICE file header.
//!
//! The header carries the magic literal, the single-byte size field, the
//! zero-padded version text, and the tempo. The size field is the only record
//! of how many track bytes follow; the parser turns it into a track byte
//! budget and the writer derives it from the encoded track total.

pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use parser::{Header, parse_header};
pub use writer::write_header;
