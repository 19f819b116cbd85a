//! Native Runtime Implementation
//!
//! Wraps `std::fs` behind the [`Runtime`] trait. Blocking calls are moved onto
//! tokio's blocking pool so a layer of concurrent reads does not stall the
//! executor.

// NativeRuntime is platform-specific and wraps std::fs by design
#![allow(clippy::disallowed_methods)]

use async_trait::async_trait;
use std::path::Path;
use tokio::task;

use super::{Runtime, RuntimeError, RuntimeResult};

/// Native filesystem Runtime implementation using `std::fs`.
///
/// # Example
///
/// ```rust,no_run
/// use probe_graph::runtime::Runtime;
/// use probe_graph::NativeRuntime;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let runtime = NativeRuntime::new();
/// let content = runtime.read_file(Path::new("/tmp/check.spec.ts")).await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NativeRuntime;

impl NativeRuntime {
    /// Create a new NativeRuntime instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

fn map_io_error(path: &Path, err: std::io::Error) -> RuntimeError {
    if err.kind() == std::io::ErrorKind::NotFound {
        RuntimeError::FileNotFound(path.to_path_buf())
    } else {
        RuntimeError::Io(format!("Failed to read {}: {}", path.display(), err))
    }
}

#[async_trait]
impl Runtime for NativeRuntime {
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        let path = path.to_path_buf();

        task::spawn_blocking(move || std::fs::read(&path).map_err(|e| map_io_error(&path, e)))
            .await
            .map_err(|e| RuntimeError::Other(format!("Task join error: {}", e)))?
    }
}
