//! In-memory runtime for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use super::{Runtime, RuntimeError, RuntimeResult};

/// Runtime backed by a map of absolute paths to file contents.
///
/// Every read is counted so tests can assert that a file was processed at
/// most once.
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    cwd: PathBuf,
    files: FxHashMap<PathBuf, Vec<u8>>,
    reads: Mutex<FxHashMap<PathBuf, usize>>,
}

impl MemoryRuntime {
    /// Create an empty runtime whose working directory is `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }

    /// Add a file. Relative paths are placed under the working directory.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        let path = self.cwd.join(path);
        self.files.insert(path, content.into());
        self
    }

    /// How many times `path` was read.
    pub fn read_count(&self, path: &Path) -> usize {
        self.reads.lock().get(path).copied().unwrap_or(0)
    }

    /// Total number of reads across all paths.
    pub fn total_reads(&self) -> usize {
        self.reads.lock().values().sum()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files.keys().any(|file| file != path && file.starts_with(path))
    }
}

#[async_trait]
impl Runtime for MemoryRuntime {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        *self.reads.lock().entry(path.to_path_buf()).or_default() += 1;

        if let Some(content) = self.files.get(path) {
            return Ok(content.clone());
        }
        if self.is_dir(path) {
            return Err(RuntimeError::Io(format!("{} is a directory", path.display())));
        }
        Err(RuntimeError::FileNotFound(path.to_path_buf()))
    }
}
