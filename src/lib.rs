//! Layered `.env` loading for Rust applications. Point at a base file, name
//! your deployment environment, and go.
//!
//! ```ignore
//! envlayer::EnvLayer::builder()
//!     .path("config/.env")
//!     .environment("dev")
//!     .load();
//!
//! let url = envlayer::get_or("DATABASE_URL", "postgres://localhost/dev");
//! ```
//!
//! That call reads up to four files, lowest priority first, and writes their
//! values into the process environment without disturbing anything that was
//! already set.
//!
//! # Layer precedence
//!
//! ```text
//! config/.env              base
//!        ↑ overridden by
//! config/.env.dev          environment-specific       (with .environment())
//!        ↑ overridden by
//! config/.env.local        developer override         (local overrides on)
//!        ↑ overridden by
//! config/.env.dev.local    environment + developer    (both)
//!        ↑ never overrides
//! variables already set in the process environment
//! ```
//!
//! Every layer is **sparse**, and missing files are silently skipped. Files
//! that exist but cannot be read are logged through `tracing` and skipped as
//! well, so loading never fails.
//!
//! Variant names come from a literal replace of `.env` in the base file name
//! (see [`resolve`]). `app.env` becomes `app.env.dev`; a name without `.env`
//! gets the suffix appended instead.
//!
//! # File format
//!
//! ```text
//! # comment line
//! KEY=value
//! KEY2="quoted value with spaces"
//! KEY3='single quoted'
//! KEY4=
//! ```
//!
//! One entry per line, split on the first `=`. Keys and values are trimmed;
//! one matching pair of surrounding quotes is removed. There are no escapes,
//! no multi-line values, and no `${VAR}` interpolation. Lines that don't fit
//! are dropped. See [`parse`].
//!
//! # Two override policies
//!
//! - [`load()`](EnvLayerBuilder::load) writes into the process environment.
//!   Keys that existed before the call are protected; among the files, later
//!   ones win.
//! - [`load_and_return()`](EnvLayerBuilder::load_and_return) returns the
//!   merged map and touches nothing. Later files always win, whatever the
//!   environment holds.
//!
//! # Testing without global state
//!
//! [`load_into()`](EnvLayerBuilder::load_into) targets any [`EnvStore`].
//! Pass a [`MemoryEnv`] to exercise the exact `load` policy in isolation.
//!
//! # Threads
//!
//! Process-environment loads hold a crate-wide lock from snapshot to last
//! write ([`ProcessEnv::lock`]), so two concurrent `load` calls cannot
//! clobber each other's pre-existing keys. Code that mutates the environment
//! outside this crate is not covered by that lock.

pub mod error;
pub mod parse;
pub mod resolve;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod env;
mod file;
pub(crate) mod merge;

#[cfg(test)]
mod fixtures;

use std::collections::BTreeMap;
use std::path::Path;

pub use builder::{DEFAULT_FILE, EnvLayer, EnvLayerBuilder};
#[cfg(feature = "clap")]
pub use cli::EnvArgs;
pub use env::{
    EnvSnapshot, EnvStore, MemoryEnv, ProcessEnv, ProcessEnvGuard, get, get_or, has,
};
pub use error::EnvLayerError;
pub use file::{read_entries, read_entry_map, read_file};
pub use types::{Candidate, CandidateKind, Entry, LoadReport};

/// Merged key-value pairs, ordered by key.
pub type EnvMap = BTreeMap<String, String>;

/// Load `path` and its variants into the process environment.
///
/// Returns `true` if at least one candidate file was read. Variables set
/// before the call are never overwritten.
pub fn load(path: impl AsRef<Path>, environment: Option<&str>, include_local: bool) -> bool {
    EnvLayer::builder()
        .path(path.as_ref())
        .maybe_environment(environment)
        .local_overrides(include_local)
        .load()
}

/// Read and merge `path` and its variants without touching the environment.
pub fn load_and_return(
    path: impl AsRef<Path>,
    environment: Option<&str>,
    include_local: bool,
) -> EnvMap {
    EnvLayer::builder()
        .path(path.as_ref())
        .maybe_environment(environment)
        .local_overrides(include_local)
        .load_and_return()
}
