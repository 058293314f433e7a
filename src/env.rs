//! Environment stores: the target a load writes into.
//!
//! [`EnvStore`] abstracts the process environment so load logic can run
//! against the real OS environment ([`ProcessEnv`]) or an isolated
//! [`MemoryEnv`]. Tests use the latter and never need to reset global state.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::warn;

/// Keys present in a store at one point in time.
///
/// Taken at the start of a load; keys in the snapshot are never overwritten
/// by that load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    keys: HashSet<String>,
}

impl EnvSnapshot {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Into<String>> FromIterator<K> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A mutable key-value environment.
pub trait EnvStore {
    /// Raw lookup: the stored value, empty or not.
    fn var(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. Returns `false` if the store refused it.
    fn set_var(&mut self, key: &str, value: &str) -> bool;

    /// Capture the set of keys currently present.
    fn snapshot(&self) -> EnvSnapshot;

    /// True if `key` is present, even with an empty value.
    fn has(&self, key: &str) -> bool {
        self.var(key).is_some()
    }

    /// The value for `key`, treating an empty value as unset.
    fn get(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }

    /// Like [`get`](Self::get), falling back to `default`.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

// ---------------------------------------------------------------------------
// Process environment
// ---------------------------------------------------------------------------

static PROCESS_ENV_LOCK: Mutex<()> = Mutex::new(());

/// Handle to the real process environment.
pub struct ProcessEnv;

impl ProcessEnv {
    /// Acquire exclusive write access to the process environment.
    ///
    /// The guard must be held across a whole snapshot-then-write sequence so
    /// that concurrent loads cannot overwrite each other's pre-existing keys.
    /// Do not call this again on the same thread while a guard is alive.
    pub fn lock() -> ProcessEnvGuard {
        ProcessEnvGuard {
            _guard: PROCESS_ENV_LOCK
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }
}

/// Exclusive access to the process environment. See [`ProcessEnv::lock`].
pub struct ProcessEnvGuard {
    _guard: MutexGuard<'static, ()>,
}

impl EnvStore for ProcessEnvGuard {
    fn var(&self, key: &str) -> Option<String> {
        process_var(key)
    }

    fn has(&self, key: &str) -> bool {
        process_has(key)
    }

    fn set_var(&mut self, key: &str, value: &str) -> bool {
        if !is_valid_key(key) || value.contains('\0') {
            warn!(key, "environment rejects key or value, not setting");
            return false;
        }
        // SAFETY: all writes made through this crate hold PROCESS_ENV_LOCK.
        // Code outside the crate must not mutate or read the environment via
        // libc on other threads while a load is running.
        unsafe { std::env::set_var(key, value) };
        true
    }

    fn snapshot(&self) -> EnvSnapshot {
        std::env::vars_os()
            .map(|(k, _)| k.to_string_lossy().into_owned())
            .collect()
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

/// Values that are not valid Unicode count as absent.
fn process_var(key: &str) -> Option<String> {
    if !is_valid_key(key) {
        return None;
    }
    std::env::var_os(key)?.into_string().ok()
}

fn process_has(key: &str) -> bool {
    is_valid_key(key) && std::env::var_os(key).is_some()
}

/// Read `key` from the process environment, treating an empty value as unset.
pub fn get(key: &str) -> Option<String> {
    process_var(key).filter(|v| !v.is_empty())
}

/// Read `key` from the process environment, falling back to `default`.
pub fn get_or(key: &str, default: &str) -> String {
    get(key).unwrap_or_else(|| default.to_string())
}

/// True if `key` is present in the process environment, even if empty.
pub fn has(key: &str) -> bool {
    process_has(key)
}

// ---------------------------------------------------------------------------
// In-memory environment
// ---------------------------------------------------------------------------

/// An isolated environment backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// Consume the store and return its variables.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) -> bool {
        self.vars.insert(key.to_string(), value.to_string());
        true
    }

    fn snapshot(&self) -> EnvSnapshot {
        self.vars.keys().cloned().collect()
    }
}
