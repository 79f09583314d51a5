//! Variable-length track records.
//!
//! A record is the id, a one-byte name length, the name, and sixteen step
//! bytes. Records carry no terminator; the pattern codec bounds them with the
//! header's byte budget.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use parser::parse_track;
pub use writer::write_track;
