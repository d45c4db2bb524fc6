//! Test helpers for unit tests
//!
//! For integration tests, see `tests/integration_test_helpers.rs`.

use std::fs;
use std::path::{Path, PathBuf};

/// Changes the current working directory for the lifetime of the guard.
/// Tests using it must be `#[serial]`.
pub struct DirGuard {
    original_dir: PathBuf,
}

impl DirGuard {
    /// Create `path` if needed and change into it.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        let original_dir = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        Ok(DirGuard { original_dir })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
