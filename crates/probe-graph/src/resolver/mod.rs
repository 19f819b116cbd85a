//! Dependency resolution for check scripts.
//!
//! Starting from an entrypoint, walks every local file it pulls in and
//! checks every package it names against the runtime's [`AllowList`]. The
//! walk never stops at the first problem: missing files, parse errors and
//! unsupported packages from the whole graph come back together in
//! [`GraphErrors`].

mod outcome;
mod traversal;

pub use outcome::{Dependencies, GraphErrors, ParseFailure, UnsupportedPackages};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use path_clean::PathClean;

use crate::allow_list::AllowList;
use crate::dialect::Dialect;
use crate::runtime::Runtime;

use traversal::Traversal;

/// Default number of files read and parsed concurrently within one BFS layer.
pub const DEFAULT_MAX_PARALLEL_READS: usize = 8;

/// Error returned by [`DependencyResolver::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The entrypoint's extension does not select a dialect. Raised before
    /// any file is read.
    #[error("Unsupported file extension for '{path}': expected a .js or .ts file")]
    UnsupportedExtension { path: PathBuf },

    /// The entrypoint is not an absolute path.
    #[error("Entrypoint must be an absolute path: '{path}'")]
    RelativeEntrypoint { path: PathBuf },

    /// The graph was walked and at least one problem was found.
    #[error(transparent)]
    Graph(#[from] GraphErrors),
}

impl ResolveError {
    /// The collected problems, when the failure came from the walk itself.
    pub fn graph_errors(&self) -> Option<&GraphErrors> {
        match self {
            ResolveError::Graph(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Tuning knobs for a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Upper bound on files read and parsed at once. Values below 1 are treated as 1.
    pub max_parallel_reads: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_parallel_reads: DEFAULT_MAX_PARALLEL_READS,
        }
    }
}

/// Resolves the local files and packages a check script depends on.
///
/// Holds only the allow-list and options; every call to
/// [`resolve`](Self::resolve) starts from fresh traversal state, so a single
/// resolver can serve concurrent calls.
///
/// # Example
///
/// ```rust,no_run
/// use probe_graph::{AllowList, DependencyResolver, NativeRuntime};
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = DependencyResolver::new(AllowList::runtime_default());
/// let deps = resolver
///     .resolve(Path::new("/project/checks/home.spec.ts"), &NativeRuntime::new())
///     .await?;
///
/// for file in &deps {
///     println!("{}", file.display());
/// }
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct DependencyResolver {
    allow_list: Arc<AllowList>,
    options: ResolverOptions,
}

impl DependencyResolver {
    pub fn new(allow_list: impl Into<Arc<AllowList>>) -> Self {
        Self {
            allow_list: allow_list.into(),
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve all local dependencies of `entrypoint`.
    ///
    /// The dialect comes from the entrypoint's extension and applies to every
    /// file reached from it. On success the returned files exclude the
    /// entrypoint itself.
    pub async fn resolve(
        &self,
        entrypoint: &Path,
        runtime: &dyn Runtime,
    ) -> Result<Dependencies, ResolveError> {
        let dialect =
            Dialect::from_path(entrypoint).ok_or_else(|| ResolveError::UnsupportedExtension {
                path: entrypoint.to_path_buf(),
            })?;

        if !entrypoint.is_absolute() {
            return Err(ResolveError::RelativeEntrypoint {
                path: entrypoint.to_path_buf(),
            });
        }

        let entrypoint = entrypoint.to_path_buf().clean();
        tracing::debug!(
            entrypoint = %entrypoint.display(),
            %dialect,
            runtime = self.allow_list.runtime(),
            "resolving dependencies"
        );

        let traversal = Traversal::new(
            &entrypoint,
            dialect,
            &self.allow_list,
            self.options.max_parallel_reads,
        );

        match traversal.traverse(runtime).await {
            Ok(files) => {
                tracing::info!(
                    entrypoint = %entrypoint.display(),
                    dependencies = files.len(),
                    "resolved dependencies"
                );
                Ok(Dependencies::new(entrypoint, dialect, files))
            }
            Err(errors) => {
                tracing::info!(
                    entrypoint = %entrypoint.display(),
                    missing = errors.missing_files.len(),
                    parse_errors = errors.parse_errors.len(),
                    unsupported = errors.unsupported_packages.len(),
                    "dependency resolution failed"
                );
                Err(ResolveError::Graph(errors))
            }
        }
    }
}

/// Resolve `entrypoint` with a one-off resolver.
pub async fn resolve(
    entrypoint: &Path,
    allow_list: AllowList,
    runtime: &dyn Runtime,
) -> Result<Dependencies, ResolveError> {
    DependencyResolver::new(allow_list)
        .resolve(entrypoint, runtime)
        .await
}
