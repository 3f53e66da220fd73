//! Configuration module
//!
//! This module provides the upload storage configuration. The destination
//! directory is injected here and threaded through to the resolver, never
//! read from a global.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

const UPLOAD_DIR_ENV: &str = "DEPOT_UPLOAD_DIR";

/// Default uploads directory, relative to the deployment root.
const DEFAULT_UPLOAD_SUBDIR: &str = "public/images/uploads";

/// Upload storage configuration.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Directory uploaded files are written into. Identical for every
    /// upload; no per-user or per-date partitioning.
    pub upload_dir: PathBuf,
}

impl UploadConfig {
    /// Create a configuration with an explicit destination directory.
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        UploadConfig {
            upload_dir: upload_dir.into(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads `DEPOT_UPLOAD_DIR`. When unset, the default uploads directory
    /// is anchored to the binary's install directory rather than the
    /// process working directory, so behavior does not depend on where the
    /// service was launched from.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let upload_dir = match env::var(UPLOAD_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_upload_dir()?,
        };

        Ok(UploadConfig { upload_dir })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Validate the configuration.
    ///
    /// The destination must be an absolute path. A missing directory is
    /// only warned about: provisioning it happens out-of-band, before the
    /// service accepts uploads, and the resolver never creates it.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.upload_dir.is_absolute() {
            anyhow::bail!(
                "upload directory must be an absolute path: {}",
                self.upload_dir.display()
            );
        }

        if !self.upload_dir.is_dir() {
            tracing::warn!(
                path = %self.upload_dir.display(),
                "Upload directory does not exist; create it before accepting uploads"
            );
        }

        Ok(())
    }
}

fn default_upload_dir() -> Result<PathBuf, anyhow::Error> {
    let exe = env::current_exe().context("Failed to locate the running binary")?;
    let root = exe
        .parent()
        .context("Running binary has no parent directory")?;
    Ok(root.join(DEFAULT_UPLOAD_SUBDIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_env_honors_upload_dir_var() {
        let dir = tempdir().unwrap();
        env::set_var(UPLOAD_DIR_ENV, dir.path());

        let config = UploadConfig::from_env().unwrap();
        assert_eq!(config.upload_dir(), dir.path());

        env::remove_var(UPLOAD_DIR_ENV);
    }

    #[test]
    fn test_validate_accepts_existing_absolute_dir() {
        let dir = tempdir().unwrap();
        let config = UploadConfig::new(dir.path());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_missing_dir() {
        let dir = tempdir().unwrap();
        let config = UploadConfig::new(dir.path().join("not-created-yet"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_dir() {
        let config = UploadConfig::new("public/images/uploads");
        assert!(config.validate().is_err());
    }
}
