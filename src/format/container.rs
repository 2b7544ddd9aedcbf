//! Container header: magic check, page count, and page-length table.

use crate::base::error::CookieError;
use crate::format::reader::ByteReader;
use crate::format::MAGIC;

/// Validate the container header and slice out the page byte ranges.
///
/// The magic and the page-length table are the only file-level structure; a
/// failure here is fatal because nothing below the header can be located
/// without it. A page whose declared length runs past the end of the buffer
/// is clipped to the remaining bytes rather than failing the file. Partial
/// data beats no data for a cookie importer. Bytes after the last declared
/// page (the trailing checksum) are ignored.
pub fn page_slices(data: &[u8]) -> Result<Vec<&[u8]>, CookieError> {
    if data.len() >= 4 && &data[..4] != MAGIC.as_slice() {
        return Err(CookieError::BadMagic);
    }
    let reader = ByteReader::new(data);
    let page_count = match reader.u32_be(4) {
        Some(count) => count as usize,
        None => {
            return Err(CookieError::TruncatedHeader { needed: 8, actual: data.len() });
        }
    };

    let header_len = page_count
        .checked_mul(4)
        .and_then(|table| table.checked_add(8))
        .filter(|&needed| needed <= data.len())
        .ok_or(CookieError::TruncatedHeader {
            needed: page_count.saturating_mul(4).saturating_add(8),
            actual: data.len(),
        })?;

    let mut pages = Vec::with_capacity(page_count);
    let mut start = header_len;
    for (index, chunk) in data[8..header_len].chunks_exact(4).enumerate() {
        let declared = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize;
        let end = match start.checked_add(declared) {
            Some(end) if end <= data.len() => end,
            _ => {
                tracing::warn!(
                    page = index,
                    declared,
                    available = data.len() - start,
                    "page extends beyond file, clipping to remaining bytes"
                );
                data.len()
            }
        };
        pages.push(&data[start..end]);
        start = end;
    }
    Ok(pages)
}
