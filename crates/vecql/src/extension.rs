//! sqlite-vec extension loading

use rusqlite::Connection;
use vecql_core::{ExtensionConfig, Result, VecqlError};

/// Load the sqlite-vec extension into `conn`
///
/// Pre-built binaries are published at
/// https://github.com/asg017/sqlite-vec/releases
///
/// # Safety
///
/// Loading an extension runs native code from the given file. The binary must
/// come from a trusted source.
pub fn load_vec_extension(conn: &Connection, config: &ExtensionConfig) -> Result<()> {
    let ext_path = config.resolved_path();

    unsafe {
        let _guard = rusqlite::LoadExtensionGuard::new(conn)
            .map_err(|e| VecqlError::Extension(format!("Failed to enable extensions: {}", e)))?;

        conn.load_extension(ext_path, config.entry_point.as_deref())
            .map_err(|e| {
                VecqlError::Extension(format!(
                    "Failed to load vector extension from {}: {}",
                    ext_path.display(),
                    e
                ))
            })?;
    }

    tracing::info!(path = %ext_path.display(), "Loaded sqlite-vec extension");
    Ok(())
}

/// sqlite-vec helpers on a connection
pub trait VecConnectionExt {
    /// Load the extension described by `config`
    fn load_vec_extension(&self, config: &ExtensionConfig) -> Result<()>;

    /// True when `vec_version()` resolves on this connection
    fn has_vec_support(&self) -> bool;

    /// Version string reported by the extension
    fn vec_version(&self) -> Result<String>;
}

impl VecConnectionExt for Connection {
    fn load_vec_extension(&self, config: &ExtensionConfig) -> Result<()> {
        load_vec_extension(self, config)
    }

    fn has_vec_support(&self) -> bool {
        self.prepare("SELECT vec_version()").is_ok()
    }

    fn vec_version(&self) -> Result<String> {
        self.query_row("SELECT vec_version()", [], |row| row.get(0))
            .map_err(|e| VecqlError::Extension(format!("Failed to get vec version: {}", e)))
    }
}
