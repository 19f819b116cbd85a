//! Platform runtime abstraction for file access.
//!
//! The resolver never touches `std::fs` directly. Every read goes through the
//! [`Runtime`] trait so traversal can run against the real filesystem
//! ([`NativeRuntime`](native::NativeRuntime)) or an in-memory tree in tests.

pub mod native;

// Test utilities (available in test builds)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Other runtime error
    #[error("Runtime error: {0}")]
    Other(String),
}

/// Platform runtime trait
///
/// Implementations must be shareable across tasks: a single resolution call
/// may have several reads in flight at once.
///
/// # Example
///
/// ```rust,ignore
/// use probe_graph::runtime::{Runtime, RuntimeError, RuntimeResult};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct MyRuntime;
///
/// #[async_trait]
/// impl Runtime for MyRuntime {
///     async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
///         std::fs::read(path).map_err(|e| RuntimeError::Io(e.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read a file from the filesystem.
    ///
    /// Any error, whatever its kind, makes the resolver report the path as missing.
    async fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;
}
