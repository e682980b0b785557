//! Path management for the shelter CLI
//!
//! ## Path Resolution Order
//!
//! 1. `SHELTER_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `shelter-cli` (via `directories`)
//!
//! Only settings and the audit log live here. Engine state is never written
//! to disk.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ShelterError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SHELTER_CLI_DATA_DIR";

/// Manages all paths used by the shelter CLI
#[derive(Debug, Clone)]
pub struct ShelterPaths {
    base_dir: PathBuf,
}

impl ShelterPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ShelterError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ShelterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ShelterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShelterError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ShelterError> {
    ProjectDirs::from("", "", "shelter-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShelterError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShelterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("shelter");
        let paths = ShelterPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
