//! # probe-graph
//!
//! Dependency resolution for monitoring check scripts.
//!
//! A check is an ordinary `.js` or `.ts` file that pulls in local helpers
//! and third-party packages. Before a check is uploaded, this crate works
//! out exactly which local files it needs and verifies that every package it
//! names is available in the remote runtime.
//!
//! ## Architecture
//!
//! ```text
//!  entrypoint ──▶ DependencyResolver ──▶ Traversal (BFS, layer at a time)
//!                       │                     │
//!                       │           ┌─────────┴──────────┐
//!                       ▼           ▼                    ▼
//!                   AllowList   ImportExtractor       Runtime
//!                              (require / import)   (file reads)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use probe_graph::{AllowList, DependencyResolver, NativeRuntime, ResolveError};
//! use std::path::Path;
//!
//! # async fn example() {
//! let resolver = DependencyResolver::new(AllowList::runtime_default());
//! match resolver.resolve(Path::new("/project/checks/login.spec.ts"), &NativeRuntime::new()).await {
//!     Ok(deps) => println!("{} files to upload", deps.len() + 1),
//!     Err(ResolveError::Graph(errors)) => eprintln!("{errors}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! # }
//! ```
//!
//! ## Failure model
//!
//! Resolution keeps walking after a problem so a single call reports every
//! missing file, parse error and unsupported package it can reach. Only an
//! unusable entrypoint (unknown extension, relative path) fails before the
//! walk starts.

pub mod allow_list;
pub mod dialect;
pub mod extract;
pub mod resolver;
pub mod runtime;
pub mod specifier;

pub use allow_list::{AllowList, RUNTIME_VERSION};
pub use dialect::Dialect;
pub use extract::{ExtractError, ImportExtractor, extract_imports};
pub use resolver::{
    DEFAULT_MAX_PARALLEL_READS, Dependencies, DependencyResolver, GraphErrors, ParseFailure,
    ResolveError, ResolverOptions, UnsupportedPackages, resolve,
};
pub use runtime::native::NativeRuntime;
pub use runtime::{Runtime, RuntimeError, RuntimeResult};

#[cfg(any(test, feature = "test-utils"))]
pub use runtime::test_utils::MemoryRuntime;
