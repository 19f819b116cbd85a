//! BFS traversal logic for dependency resolution.
//!
//! The frontier is processed one layer at a time. Files in a layer are read
//! and parsed concurrently (bounded by `max_parallel_reads`), then their
//! specifiers are merged back sequentially in frontier order. Only the merge
//! step touches the visited set, so each path is enqueued at most once even
//! when two files in the same layer import it.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use rustc_hash::FxHashSet;

use crate::allow_list::AllowList;
use crate::dialect::Dialect;
use crate::extract::{ExtractError, ImportExtractor, extractor_for};
use crate::runtime::{Runtime, RuntimeError};
use crate::specifier::{Reference, classify, resolve_local};

use super::outcome::{GraphErrors, ParseFailure, UnsupportedPackages};

/// What reading and extracting one file produced.
enum FileScan {
    Specifiers(Vec<String>),
    Unreadable(RuntimeError),
    Unparsable(ExtractError),
}

/// BFS traversal state and logic.
pub(super) struct Traversal<'a> {
    entrypoint: &'a Path,
    dialect: Dialect,
    extractor: &'static dyn ImportExtractor,
    allow_list: &'a AllowList,
    max_parallel_reads: usize,
}

impl<'a> Traversal<'a> {
    pub fn new(
        entrypoint: &'a Path,
        dialect: Dialect,
        allow_list: &'a AllowList,
        max_parallel_reads: usize,
    ) -> Self {
        Self {
            entrypoint,
            dialect,
            extractor: extractor_for(dialect),
            allow_list,
            max_parallel_reads: max_parallel_reads.max(1),
        }
    }

    /// Drain the frontier and return every discovered file except the
    /// entrypoint, or all problems found along the way.
    pub async fn traverse(&self, runtime: &dyn Runtime) -> Result<Vec<PathBuf>, GraphErrors> {
        let mut visited: FxHashSet<PathBuf> = FxHashSet::default();
        let mut frontier: VecDeque<PathBuf> = VecDeque::new();
        let mut errors = GraphErrors::default();

        visited.insert(self.entrypoint.to_path_buf());
        frontier.push_back(self.entrypoint.to_path_buf());

        let mut depth = 0usize;
        while !frontier.is_empty() {
            let layer: Vec<PathBuf> = frontier.drain(..).collect();
            tracing::debug!(depth, files = layer.len(), "scanning layer");

            let scans: Vec<FileScan> = stream::iter(layer.iter())
                .map(|path| self.scan(path, runtime))
                .buffered(self.max_parallel_reads)
                .collect()
                .await;

            for (path, scan) in layer.into_iter().zip(scans) {
                match scan {
                    FileScan::Specifiers(specifiers) => {
                        self.link(&path, &specifiers, &mut visited, &mut frontier, &mut errors);
                    }
                    FileScan::Unreadable(err) => {
                        tracing::debug!(file = %path.display(), error = %err, "missing file");
                        errors.missing_files.push(path);
                    }
                    FileScan::Unparsable(err) => {
                        tracing::debug!(file = %path.display(), error = %err, "parse error");
                        errors.parse_errors.push(ParseFailure {
                            file: path,
                            message: err.to_string(),
                        });
                    }
                }
            }

            depth += 1;
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        visited.remove(self.entrypoint);
        Ok(visited.into_iter().collect())
    }

    /// Read one file and extract its specifiers.
    async fn scan(&self, path: &Path, runtime: &dyn Runtime) -> FileScan {
        let bytes = match runtime.read_file(path).await {
            Ok(bytes) => bytes,
            Err(err) => return FileScan::Unreadable(err),
        };

        let source = match std::str::from_utf8(&bytes) {
            Ok(source) => source,
            Err(err) => return FileScan::Unparsable(ExtractError::invalid_utf8(&bytes, &err)),
        };

        match self.extractor.extract(source) {
            Ok(specifiers) => {
                tracing::debug!(
                    file = %path.display(),
                    imports = specifiers.len(),
                    "extracted imports"
                );
                FileScan::Specifiers(specifiers)
            }
            Err(err) => FileScan::Unparsable(err),
        }
    }

    /// Classify a file's specifiers: check packages, enqueue unseen local files.
    fn link(
        &self,
        path: &Path,
        specifiers: &[String],
        visited: &mut FxHashSet<PathBuf>,
        frontier: &mut VecDeque<PathBuf>,
        errors: &mut GraphErrors,
    ) {
        let mut unsupported: Vec<String> = Vec::new();

        for specifier in specifiers {
            match classify(specifier) {
                Reference::Package(name) => {
                    if !self.allow_list.contains(name) && !unsupported.iter().any(|n| n == name) {
                        unsupported.push(name.to_string());
                    }
                }
                Reference::Local(local) => {
                    let resolved = resolve_local(local, path, self.dialect);
                    // Insert-and-test is the only guard against revisiting.
                    if visited.insert(resolved.clone()) {
                        frontier.push_back(resolved);
                    }
                }
            }
        }

        if !unsupported.is_empty() {
            errors.unsupported_packages.push(UnsupportedPackages {
                file: path.to_path_buf(),
                names: unsupported,
            });
        }
    }
}
