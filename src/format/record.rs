//! Cookie record decoding.
//!
//! Record layout, all positions relative to the record start:
//!
//! | Offset | Field | Type |
//! |--------|-------|------|
//! | +0 | record size | u32 LE (unused) |
//! | +8 | flags | u32 LE (bit 0 secure, bit 2 http-only) |
//! | +16 | domain offset | u32 LE |
//! | +20 | name offset | u32 LE |
//! | +24 | path offset | u32 LE |
//! | +28 | value offset | u32 LE |
//! | +40 | expiration | f64 LE, Cocoa-epoch seconds |
//!
//! The four string offsets are themselves relative to the record start (not
//! the page start) and point at null-terminated ASCII runs.

use crate::base::error::CookieError;
use crate::format::reader::{ByteReader, CStrError};

const FLAGS: usize = 8;
const DOMAIN_OFFSET: usize = 16;
const NAME_OFFSET: usize = 20;
const PATH_OFFSET: usize = 24;
const VALUE_OFFSET: usize = 28;
const EXPIRATION: usize = 40;

const FLAG_SECURE: u32 = 0x1;
const FLAG_HTTP_ONLY: u32 = 0x4;

/// One cookie as stored on disk, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub flags: u32,
    /// Expiration in seconds since the Cocoa epoch (2001-01-01T00:00:00Z).
    pub expiration: f64,
}

impl CookieRecord {
    pub fn is_secure(&self) -> bool {
        self.flags & FLAG_SECURE != 0
    }

    pub fn is_http_only(&self) -> bool {
        self.flags & FLAG_HTTP_ONLY != 0
    }
}

/// Decode the record starting at `record_offset` within `page`.
///
/// Failures are record-level: the import pipeline skips the record and
/// continues with the next offset in the page, since pages can contain stale
/// or partially overwritten records.
pub fn decode_record(page: &[u8], record_offset: usize) -> Result<CookieRecord, CookieError> {
    let reader = ByteReader::new(page);

    let field = |relative: usize| {
        record_offset
            .checked_add(relative)
            .and_then(|offset| reader.u32_le(offset))
            .ok_or(CookieError::TruncatedRecord { offset: record_offset })
    };

    let flags = field(FLAGS)?;
    let domain_offset = field(DOMAIN_OFFSET)?;
    let name_offset = field(NAME_OFFSET)?;
    let path_offset = field(PATH_OFFSET)?;
    let value_offset = field(VALUE_OFFSET)?;
    let expiration = record_offset
        .checked_add(EXPIRATION)
        .and_then(|offset| reader.f64_le(offset))
        .ok_or(CookieError::TruncatedRecord { offset: record_offset })?;

    let string_at = |field_offset: u32| {
        let start = record_offset
            .checked_add(field_offset as usize)
            .ok_or(CookieError::BadStringOffset { offset: field_offset as usize })?;
        reader
            .c_str(start)
            .map(str::to_owned)
            .map_err(|err| match err {
                CStrError::InvalidUtf8 => CookieError::InvalidString,
                CStrError::OutOfBounds | CStrError::Unterminated => {
                    CookieError::BadStringOffset { offset: start }
                }
            })
    };

    Ok(CookieRecord {
        name: string_at(name_offset)?,
        value: string_at(value_offset)?,
        domain: string_at(domain_offset)?,
        path: string_at(path_offset)?,
        flags,
        expiration,
    })
}
