//! Path management
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_PLANNER_DIR` environment variable (if set)
//! 2. The platform config directory joined with `expense-planner`
//!    (`~/.config/expense-planner` on Linux, `%APPDATA%\expense-planner` on Windows)

use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::error::PlannerError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "EXPENSE_PLANNER_DIR";

/// Manages the paths used by the expense planner
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PlannerError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the base directory if needed
    pub fn ensure_directories(&self) -> Result<(), PlannerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlannerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PlannerError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PlannerError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("expense-planner"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("planner");
        let paths = PlannerPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Ok(path) = resolve_default_path() {
            assert!(path.ends_with("expense-planner"));
        }
    }
}
