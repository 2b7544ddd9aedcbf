//! Normalized cookie model and conversion from on-disk records.
//!
//! [`SafariCookie`] is the only shape that crosses the crate boundary. It
//! serializes to the `{name, value, domain, path, expires, secure, httpOnly,
//! sameSite}` object that session-import and cookie-injection consumers
//! accept, with `expires` in Unix epoch seconds.

pub mod import;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::format::record::CookieRecord;

/// Seconds between the Cocoa epoch (2001-01-01T00:00:00Z) and the Unix epoch.
pub const COCOA_EPOCH_OFFSET: i64 = 978_307_200;

/// SameSite policy attached to an imported cookie.
///
/// The binarycookies format does not store SameSite at all. The value here is
/// inferred during mapping (`None` for secure cookies, `Lax` otherwise): a
/// best-effort heuristic, not data recovered from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    None,
    Lax,
    Strict,
}

/// A cookie in the normalized, platform-neutral shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafariCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Expiration as Unix epoch seconds, floored from the on-disk float.
    pub expires: i64,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
}

impl SafariCookie {
    pub fn expiration_time(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.expires).ok()
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        match self.expiration_time() {
            Some(expiry) => expiry < now,
            None => false,
        }
    }

    /// Case-insensitive domain match used by the import filter.
    ///
    /// A cookie is retained when its domain equals the filter, equals the
    /// filter with a leading dot, or is a subdomain of the filter. This covers
    /// both exact and parent-domain cookie scoping as cookie jars apply them.
    pub fn matches_domain(&self, filter: &str) -> bool {
        let domain = self.domain.to_ascii_lowercase();
        let filter = filter.to_ascii_lowercase();
        let dotted = format!(".{filter}");
        domain == filter || domain == dotted || domain.ends_with(&dotted)
    }
}

impl From<CookieRecord> for SafariCookie {
    fn from(record: CookieRecord) -> Self {
        let secure = record.is_secure();
        Self {
            // The `as` cast saturates; NaN maps to zero.
            expires: (record.expiration.floor() as i64).saturating_add(COCOA_EPOCH_OFFSET),
            same_site: if secure { SameSite::None } else { SameSite::Lax },
            secure,
            http_only: record.is_http_only(),
            name: record.name,
            value: record.value,
            domain: record.domain,
            path: record.path,
        }
    }
}
