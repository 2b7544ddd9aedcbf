//! Safari cookie-store path resolution.
//!
//! Thin boundary component: it owns no parsing logic, only locates candidate
//! `Cookies.binarycookies` paths and enumerates the profiles that have one on
//! disk.

use std::path::PathBuf;

/// Legacy (pre-sandbox) location of the default store, relative to home.
const LEGACY_STORE: &str = "Library/Cookies/Cookies.binarycookies";
/// Sandboxed Safari container cookie directory, relative to home.
const CONTAINER_DIR: &str = "Library/Containers/com.apple.Safari/Data/Library/Cookies";
const STORE_FILE: &str = "Cookies.binarycookies";

/// Resolves filesystem locations of Safari cookie stores.
#[derive(Debug, Clone, Default)]
pub struct SafariProfileResolver {
    home: Option<PathBuf>,
}

impl SafariProfileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against an explicit home directory instead of `$HOME`.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home
            .clone()
            .or_else(|| std::env::var("HOME").ok().map(PathBuf::from))
    }

    fn profiles_dir(&self) -> Option<PathBuf> {
        Some(self.home_dir()?.join(CONTAINER_DIR).join("Profiles"))
    }

    /// Candidate path to the cookie store for the given profile.
    ///
    /// The default store prefers the legacy location when the file exists
    /// there, falling back to the sandboxed container path. Named profiles
    /// live under the container's `Profiles/` directory.
    pub fn cookie_path(&self, profile: Option<&str>) -> Option<PathBuf> {
        match profile {
            Some(profile) => Some(self.profiles_dir()?.join(profile).join(STORE_FILE)),
            None => {
                let home = self.home_dir()?;
                let legacy = home.join(LEGACY_STORE);
                if legacy.exists() {
                    Some(legacy)
                } else {
                    Some(home.join(CONTAINER_DIR).join(STORE_FILE))
                }
            }
        }
    }

    /// Enumerate profiles that have a cookie store on disk, sorted by name.
    ///
    /// A directory under `Profiles/` counts as a profile only when its
    /// `Cookies.binarycookies` companion file exists.
    pub fn list_profiles(&self) -> Vec<String> {
        let Some(dir) = self.profiles_dir() else {
            return Vec::new();
        };
        let Ok(entries) = std::fs::read_dir(&dir) else {
            return Vec::new();
        };
        let mut profiles: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().join(STORE_FILE).exists())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        profiles.sort();
        profiles
    }
}
