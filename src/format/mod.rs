//! Decoding of Safari's `Cookies.binarycookies` container format.
//!
//! The format is a paged container with mixed endianness: the file header is
//! big-endian while page and record payloads are little-endian. This is a
//! property of the format, not an implementation choice.
//!
//! ## File layout
//!
//! | Offset | Field | Type |
//! |--------|-------|------|
//! | 0 | magic `"cook"` | 4-byte ASCII |
//! | 4 | page count N | u32 BE |
//! | 8 | page lengths | u32 BE × N |
//! | 8+4N | pages | sequential, no padding |
//! | end | checksum | 8 bytes, not validated |
//!
//! Each page carries its own signature, a little-endian record count, and a
//! table of record offsets relative to the page start. Each record stores a
//! flags bitmask, four string-field offsets relative to the record start, and
//! a Cocoa-epoch expiration timestamp.
//!
//! ## References
//! - https://github.com/libyal/dtformats/blob/main/documentation/Safari%20Cookies.asciidoc

pub mod container;
pub mod page;
pub mod record;
pub(crate) mod reader;

/// Magic bytes at the start of a binary cookies file.
pub const MAGIC: &[u8; 4] = b"cook";
