//! Environment configuration for the `chartable` binary.
//!
//! Reads `SYMCHAR_BASE_PATH` and `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`).

use std::path::PathBuf;

use tracing::{info, warn};

use crate::constants::DEFAULT_NUM_THREADS;
use crate::error::Result;

/// Read `SYMCHAR_BASE_PATH` (default `"."`) and chdir into it.
pub fn init_base_path() -> Result<PathBuf> {
    let base_path = std::env::var("SYMCHAR_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    std::env::set_current_dir(&base_path)?;
    let cwd = std::env::current_dir()?;
    info!(base_path = %base_path, cwd = %cwd.display(), "working directory set");
    Ok(cwd)
}

/// Thread count from `RAYON_NUM_THREADS`, then `OMP_NUM_THREADS`, then the default.
pub fn num_threads() -> usize {
    std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n: &usize| n > 0)
        .unwrap_or(DEFAULT_NUM_THREADS)
}

/// Build the rayon global pool with [`num_threads`] workers.
/// Tolerates an already-initialized pool. Returns the thread count.
pub fn init_rayon_threads() -> usize {
    let num_threads = num_threads();
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        warn!(error = %e, "rayon global pool already initialized");
    }
    info!(threads = num_threads, "rayon pool configured");
    num_threads
}
