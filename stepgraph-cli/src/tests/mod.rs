//! Unit tests for stepgraph-cli, organized by module.
//!
//! Each submodule documents the behaviour under test.


use std::sync::{Mutex, MutexGuard, OnceLock};

/// Lock used by tests that set/remove `STEPGRAPH_*` vars so they run serially and do not race.
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

pub(crate) const ENV_KEYS: [&str; 5] = [
    "STEPGRAPH_DEMO",
    "STEPGRAPH_SEED",
    "STEPGRAPH_RECURSION_LIMIT",
    "STEPGRAPH_QUESTION",
    "STEPGRAPH_MAX_REWRITES",
];

/// Runs `f` with the given `STEPGRAPH_*` vars set and all others removed, then restores the env.
pub(crate) fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = env_lock();
    let saved: Vec<(&str, Option<String>)> =
        ENV_KEYS.iter().map(|k| (*k, std::env::var(k).ok())).collect();
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f();

    for (key, value) in saved {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
    result
}
