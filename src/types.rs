use std::path::PathBuf;

/// Which layer of the override stack a candidate file belongs to.
///
/// Variants are declared in priority-ascending order, matching the order
/// [`candidate_files`](crate::resolve::candidate_files) emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CandidateKind {
    /// The path the caller passed in, e.g. `.env`.
    Base,
    /// Deployment-environment variant, e.g. `.env.prod`.
    Environment,
    /// Developer-machine override, e.g. `.env.local`.
    Local,
    /// Environment-scoped developer override, e.g. `.env.prod.local`.
    EnvironmentLocal,
}

/// One file that may contribute entries to a load. Existence is not checked
/// until the file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub path: PathBuf,
}

/// A `KEY=value` pair parsed from one line of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// 1-based line number within the source buffer.
    pub line: usize,
}

/// Outcome of applying candidate files to an [`EnvStore`](crate::EnvStore).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Files that existed and were read, in the order they were applied.
    pub files: Vec<PathBuf>,
    /// Number of assignments written to the store.
    pub applied: usize,
    /// Keys left untouched because they were set before the load started.
    pub skipped_existing: Vec<String>,
}

impl LoadReport {
    /// True if at least one candidate file was read, whether or not it held
    /// any valid entries.
    pub fn loaded(&self) -> bool {
        !self.files.is_empty()
    }
}
