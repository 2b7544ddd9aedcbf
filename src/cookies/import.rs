//! Import pipeline: file → container → pages → records → normalized cookies.

use std::path::Path;

use crate::base::error::CookieError;
use crate::cookies::SafariCookie;
use crate::format::{container, page, record};
use crate::profile::SafariProfileResolver;

/// Decode an in-memory binarycookies buffer.
///
/// Only file-level problems (bad magic, truncated header) are errors. A page
/// with a foreign signature yields no cookies and a record that fails to
/// decode is skipped; both shrink the returned sequence without failing the
/// call. A syntactically valid file with no usable cookies returns an empty
/// vector, not an error.
pub fn decode_binary_cookies(data: &[u8]) -> Result<Vec<SafariCookie>, CookieError> {
    let mut cookies = Vec::new();
    for (page_index, page_slice) in container::page_slices(data)?.into_iter().enumerate() {
        for record_offset in page::record_offsets(page_slice) {
            match record::decode_record(page_slice, record_offset) {
                Ok(decoded) => cookies.push(SafariCookie::from(decoded)),
                Err(error) => tracing::debug!(
                    page = page_index,
                    offset = record_offset,
                    error = %error,
                    "skipping undecodable cookie record"
                ),
            }
        }
    }
    Ok(cookies)
}

/// Parse a `Cookies.binarycookies` file from disk.
///
/// Fails with [`CookieError::FileNotFound`] before any byte-level parsing if
/// the path does not exist.
pub fn parse_binary_cookies(path: impl AsRef<Path>) -> Result<Vec<SafariCookie>, CookieError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CookieError::FileNotFound { path: path.display().to_string() });
    }
    let data = std::fs::read(path)?;
    decode_binary_cookies(&data)
}

/// Importer for Safari's cookie store with optional profile selection and
/// domain filtering.
///
/// ```rust,no_run
/// use cooknet::CookieImporter;
///
/// let cookies = CookieImporter::new()
///     .domain("example.com") // Optional: filter by domain
///     .import()?;
/// println!("Found {} cookies", cookies.len());
/// # Ok::<(), cooknet::CookieError>(())
/// ```
#[derive(Debug, Default)]
pub struct CookieImporter {
    profile: Option<String>,
    domain: Option<String>,
    resolver: SafariProfileResolver,
}

impl CookieImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import from a named Safari profile instead of the default store.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Keep only cookies scoped to this domain, its parent, or its subdomains.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Resolve paths through a custom resolver (e.g. a relocated home dir).
    pub fn with_resolver(mut self, resolver: SafariProfileResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Resolve the cookie file, parse it, and apply the domain filter.
    pub fn import(&self) -> Result<Vec<SafariCookie>, CookieError> {
        let path = self
            .resolver
            .cookie_path(self.profile.as_deref())
            .ok_or_else(|| self.missing_store_error("Cookies.binarycookies".into()))?;
        if !path.exists() {
            return Err(self.missing_store_error(path.display().to_string()));
        }
        let cookies = parse_binary_cookies(&path)?;
        Ok(match &self.domain {
            Some(filter) => cookies
                .into_iter()
                .filter(|cookie| cookie.matches_domain(filter))
                .collect(),
            None => cookies,
        })
    }

    fn missing_store_error(&self, path: String) -> CookieError {
        match &self.profile {
            Some(profile) => CookieError::ProfileNotFound { profile: profile.clone() },
            None => CookieError::FileNotFound { path },
        }
    }
}
