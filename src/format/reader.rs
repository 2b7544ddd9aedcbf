//! Bounds-checked reads over a flat byte buffer.
//!
//! The binarycookies format is navigated through stored offsets, so decoding
//! is random-access rather than sequential. Every accessor here takes an
//! explicit offset and validates it against the slice bounds: a read that
//! would run past the end returns `None` (or a typed error for strings)
//! instead of panicking or reading out of range.

/// Failure modes when resolving a null-terminated string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CStrError {
    /// The start offset lies outside the slice.
    OutOfBounds,
    /// The slice ended before a `0x00` terminator was found.
    Unterminated,
    /// The bytes before the terminator are not valid UTF-8.
    InvalidUtf8,
}

/// Read-only view over a byte slice with offset-addressed accessors.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn array<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        let end = offset.checked_add(N)?;
        self.data.get(offset..end)?.try_into().ok()
    }

    pub(crate) fn u32_be(&self, offset: usize) -> Option<u32> {
        self.array::<4>(offset).map(u32::from_be_bytes)
    }

    pub(crate) fn u32_le(&self, offset: usize) -> Option<u32> {
        self.array::<4>(offset).map(u32::from_le_bytes)
    }

    pub(crate) fn f64_le(&self, offset: usize) -> Option<f64> {
        self.array::<8>(offset).map(f64::from_le_bytes)
    }

    /// Read a null-terminated string starting at `offset`, with the scan
    /// bounded by the end of the slice. Reaching the end without a terminator
    /// is an error, not a clamped read.
    pub(crate) fn c_str(&self, offset: usize) -> Result<&'a str, CStrError> {
        let tail = self.data.get(offset..).ok_or(CStrError::OutOfBounds)?;
        let end = tail
            .iter()
            .position(|&b| b == 0)
            .ok_or(CStrError::Unterminated)?;
        std::str::from_utf8(&tail[..end]).map_err(|_| CStrError::InvalidUtf8)
    }
}
