use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for loading the sqlite-vec extension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    /// Path to the extension binary
    /// Default: `./vec0.{so,dylib,dll}` depending on the platform
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Entry point symbol; SQLite derives one from the file name when unset
    #[serde(default)]
    pub entry_point: Option<String>,
}

impl ExtensionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = Some(entry_point.into());
        self
    }

    /// The configured path, or the platform default
    pub fn resolved_path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(default_extension_path()))
    }
}

fn default_extension_path() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        "./vec0.dylib"
    }
    #[cfg(target_os = "windows")]
    {
        "./vec0.dll"
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        "./vec0.so"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = ExtensionConfig::new().with_path("/opt/vec0.so");
        assert_eq!(config.resolved_path(), Path::new("/opt/vec0.so"));
    }

    #[test]
    fn test_default_path_points_at_vec0() {
        let config = ExtensionConfig::default();
        let name = config.resolved_path().to_string_lossy().into_owned();
        assert!(name.starts_with("./vec0."));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ExtensionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ExtensionConfig::default());

        let config: ExtensionConfig =
            serde_json::from_str(r#"{"path":"./ext/vec0.so","entry_point":"sqlite3_vec_init"}"#)
                .unwrap();
        assert_eq!(config.path.as_deref(), Some(Path::new("./ext/vec0.so")));
        assert_eq!(config.entry_point.as_deref(), Some("sqlite3_vec_init"));
    }
}
