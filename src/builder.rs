use std::path::{Path, PathBuf};

use tracing::debug;

use crate::EnvMap;
use crate::env::{EnvStore, ProcessEnv};
use crate::file;
use crate::merge;
use crate::resolve;
use crate::types::{Candidate, LoadReport};

/// Base file used when no path is given.
pub const DEFAULT_FILE: &str = ".env";

/// Entry point for building a layered env load.
pub struct EnvLayer;

impl EnvLayer {
    pub fn builder() -> EnvLayerBuilder {
        EnvLayerBuilder::new()
    }
}

/// Builder for loading a stack of `.env` files.
///
/// Settings map directly onto the candidate list (see [`resolve`]):
///
/// - [`path()`](Self::path): the base file, default `.env`.
/// - [`environment()`](Self::environment): adds `.env.<name>` and, with local
///   overrides, `.env.<name>.local`.
/// - [`local_overrides()`](Self::local_overrides): adds `.env.local` (on by
///   default).
///
/// Two terminal operations with different override policies:
///
/// - [`load()`](Self::load) / [`load_into()`](Self::load_into) write into an
///   environment and never overwrite keys that were set before the call.
/// - [`load_and_return()`](Self::load_and_return) touches no environment and
///   lets later files win unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLayerBuilder {
    path: PathBuf,
    environment: Option<String>,
    local_overrides: bool,
}

impl Default for EnvLayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLayerBuilder {
    fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE),
            environment: None,
            local_overrides: true,
        }
    }

    /// Set the base file (default: `.env`).
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the deployment environment name, e.g. `"dev"` or `"prod"`.
    pub fn environment(mut self, name: &str) -> Self {
        self.environment = Some(name.to_string());
        self
    }

    /// Set or clear the deployment environment name.
    pub fn maybe_environment(mut self, name: Option<&str>) -> Self {
        self.environment = name.map(str::to_string);
        self
    }

    /// Enable or disable `.local` override files (default: `true`).
    pub fn local_overrides(mut self, enabled: bool) -> Self {
        self.local_overrides = enabled;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.path
    }

    /// The files this builder would consult, lowest priority first.
    pub fn candidates(&self) -> Vec<Candidate> {
        resolve::candidate_files(
            &self.path,
            self.environment.as_deref(),
            self.local_overrides,
        )
    }

    /// Apply every existing candidate to `store`, in priority order.
    ///
    /// Keys present in `store` when the call starts are never overwritten.
    /// Among the files, later ones overwrite earlier ones. Missing and
    /// unreadable files are skipped.
    pub fn load_into<S: EnvStore + ?Sized>(&self, store: &mut S) -> LoadReport {
        let snapshot = store.snapshot();
        let mut report = LoadReport::default();

        for candidate in self.candidates() {
            let Some(entries) = file::read_entries(&candidate.path) else {
                debug!(path = %candidate.path.display(), kind = ?candidate.kind, "env file not loaded");
                continue;
            };
            merge::apply_protected(store, &snapshot, entries, &mut report);
            report.files.push(candidate.path);
        }

        debug!(
            files = report.files.len(),
            applied = report.applied,
            skipped = report.skipped_existing.len(),
            "env load finished"
        );
        report
    }

    /// Like [`load_into`](Self::load_into) against the process environment,
    /// holding the process-wide env lock for the whole operation.
    pub fn load_report(&self) -> LoadReport {
        let mut env = ProcessEnv::lock();
        self.load_into(&mut env)
    }

    /// Load into the process environment. Returns `true` if at least one
    /// candidate file was read.
    pub fn load(&self) -> bool {
        self.load_report().loaded()
    }

    /// Read and merge the candidates without touching any environment.
    ///
    /// Later files overwrite earlier ones for the same key, regardless of
    /// what the process environment already holds.
    pub fn load_and_return(&self) -> EnvMap {
        let mut merged = EnvMap::new();
        for candidate in self.candidates() {
            if let Some(entries) = file::read_entries(&candidate.path) {
                merge::overlay(&mut merged, entries);
            }
        }
        merged
    }
}
