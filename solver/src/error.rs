//! Errors for the layers around the core recursion: file I/O, JSON, input parsing.
//!
//! The recursion itself has no failure mode; its preconditions are debug-asserted.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid partition {input:?}: {reason}")]
    InvalidPartition { input: String, reason: String },

    #[error("Degree mismatch: λ has {lambda} cells, ρ has {rho}")]
    DegreeMismatch { lambda: usize, rho: usize },

    #[error("Malformed table in {path}: {reason}")]
    MalformedTable { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
