//! Candidate file resolution: which files a load consults, and in what order.
//!
//! Given a base path such as `config/.env`, the resolver produces up to four
//! candidates in **priority-ascending** order (last = highest):
//!
//! ```text
//! config/.env              Base
//! config/.env.<env>        Environment       (only with an environment name)
//! config/.env.local        Local             (only with local overrides)
//! config/.env.<env>.local  EnvironmentLocal  (environment + local overrides)
//! ```
//!
//! Variant names are derived by a literal substring replace of
//! [`SUFFIX_TOKEN`] in the file name only; the directory is never touched.
//! This is not extension parsing: every occurrence of the token is replaced,
//! so `app.env.env` with environment `dev` becomes `app.env.dev.env.dev`.
//! When the file name does not contain the token at all, the replacement is
//! appended instead (`settings` becomes `settings.env.dev`).
//!
//! No existence checks happen here. Missing candidates are skipped later by
//! the reader.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::types::{Candidate, CandidateKind};

/// The literal text substituted in the base file name to derive variants.
pub const SUFFIX_TOKEN: &str = ".env";

/// Build the ordered candidate list for a load, lowest priority first.
pub fn candidate_files(
    base: &Path,
    environment: Option<&str>,
    include_local: bool,
) -> Vec<Candidate> {
    let mut candidates = vec![Candidate {
        kind: CandidateKind::Base,
        path: base.to_path_buf(),
    }];

    if let Some(env) = environment {
        candidates.push(Candidate {
            kind: CandidateKind::Environment,
            path: derive_variant(base, &format!("{SUFFIX_TOKEN}.{env}")),
        });
    }

    if include_local {
        candidates.push(Candidate {
            kind: CandidateKind::Local,
            path: derive_variant(base, &format!("{SUFFIX_TOKEN}.local")),
        });

        if let Some(env) = environment {
            candidates.push(Candidate {
                kind: CandidateKind::EnvironmentLocal,
                path: derive_variant(base, &format!("{SUFFIX_TOKEN}.{env}.local")),
            });
        }
    }

    candidates
}

/// Derive a sibling of `base` whose file name has [`SUFFIX_TOKEN`] replaced
/// by `replacement`.
///
/// Falls back to appending `replacement` to the file name when the name does
/// not contain the token or is not valid UTF-8.
pub fn derive_variant(base: &Path, replacement: &str) -> PathBuf {
    let mut name = match base.file_name() {
        Some(name) => {
            if let Some(s) = name.to_str()
                && s.contains(SUFFIX_TOKEN)
            {
                return base.with_file_name(s.replace(SUFFIX_TOKEN, replacement));
            }
            name.to_os_string()
        }
        None => OsString::new(),
    };
    name.push(replacement);
    base.with_file_name(name)
}
