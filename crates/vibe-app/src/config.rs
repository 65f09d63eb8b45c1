//! Application configuration

use std::path::PathBuf;

/// Configuration for constructing an [`crate::AppCore`].
///
/// The only setting the core needs is where the durable session snapshot
/// lives. Frontends embed their own platform defaults via
/// [`AppConfig::default`] or point tests at a temporary directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the filesystem storage handler writes under
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create a config with an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl Default for AppConfig {
    /// Platform-local data directory (`<data_local_dir>/vibe`), falling back
    /// to a relative path when the platform reports none.
    fn default() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_dir: base.join("vibe"),
        }
    }
}
