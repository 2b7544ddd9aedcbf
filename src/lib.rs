//! # cooknet
//!
//! A bounds-checked reader for Safari's `Cookies.binarycookies` store,
//! extracting browser session cookies for reuse by automation and
//! session-import tooling.
//!
//! The crate is a single decoder pipeline over one immutable buffer:
//!
//! raw bytes → container header → pages → records → normalized cookies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cooknet::CookieImporter;
//!
//! let cookies = CookieImporter::new()
//!     .domain("example.com") // Optional: filter by domain
//!     .import()?;
//! for cookie in &cookies {
//!     println!("{}={} ({})", cookie.name, cookie.value, cookie.domain);
//! }
//! # Ok::<(), cooknet::CookieError>(())
//! ```
//!
//! Or parse an explicit file:
//!
//! ```rust,no_run
//! let cookies = cooknet::parse_binary_cookies("/tmp/Cookies.binarycookies")?;
//! # Ok::<(), cooknet::CookieError>(())
//! ```
//!
//! ## Error handling
//!
//! Only file-level problems are fatal: a missing file, bad magic, or a header
//! that declares more page-table bytes than the buffer contains. A page with a
//! foreign signature contributes zero cookies, a record that fails to decode
//! is skipped, and a page declared longer than the file is clipped. All of
//! these merely shrink the returned sequence.
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`format`] - Container, page, and record decoding
//! - [`cookies`] - Normalized cookie model and import pipeline
//! - [`profile`] - Safari cookie-store path resolution
//!
//! The trailing 8-byte file checksum is not validated, matching Safari's own
//! tolerance; a corrupted but structurally valid file can therefore yield
//! wrong cookie values undetected.

pub mod base;
pub mod cookies;
pub mod format;
pub mod profile;

pub use base::error::CookieError;
pub use cookies::import::{decode_binary_cookies, parse_binary_cookies, CookieImporter};
pub use cookies::{SafariCookie, SameSite};
pub use profile::SafariProfileResolver;
