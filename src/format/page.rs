//! Page decoding: signature check and record-offset table.

use crate::format::reader::ByteReader;

/// Expected big-endian value of the 4-byte page signature.
pub const PAGE_SIGNATURE: u32 = 0x0000_0100;

/// Decode the record-offset table of one page.
///
/// Pages are independent: a page whose signature does not match (or which is
/// too short to carry one) contributes zero records instead of failing the
/// file. A corrupt or foreign page simply yields no cookies.
///
/// Offsets are relative to the page start. They are not range-checked here;
/// validation is deferred to record decoding so a single bad entry does not
/// discard valid siblings. A truncated offset table yields only the entries
/// whose bytes are present.
pub fn record_offsets(page: &[u8]) -> Vec<usize> {
    let reader = ByteReader::new(page);
    if reader.u32_be(0) != Some(PAGE_SIGNATURE) {
        return Vec::new();
    }
    let count = match reader.u32_le(4) {
        Some(count) => count as usize,
        None => return Vec::new(),
    };
    (0..count)
        .map_while(|index| {
            let offset = index.checked_mul(4)?.checked_add(8)?;
            reader.u32_le(offset).map(|entry| entry as usize)
        })
        .collect()
}
