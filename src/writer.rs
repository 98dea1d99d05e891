//! File-writer capability for generated model sources

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CodegenError, Result};

/// Persists one generated source file; called at most once per invocation
pub trait ModelWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Filesystem writer honoring the force-overwrite flag
pub struct FsWriter {
    pub force: bool,
}

impl ModelWriter for FsWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if path.exists() && !self.force {
            return Err(CodegenError::OutputExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "writing model file");
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models").join("Users.php");

        let writer = FsWriter { force: false };
        writer.write(&path, "<?php\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php\n");
    }

    #[test]
    fn test_existing_file_requires_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Users.php");
        fs::write(&path, "old").unwrap();

        let writer = FsWriter { force: false };
        let err = writer.write(&path, "new").unwrap_err();
        assert!(matches!(err, CodegenError::OutputExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        let forced = FsWriter { force: true };
        forced.write(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
