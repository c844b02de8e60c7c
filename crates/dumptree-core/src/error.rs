//! Error types for rendering parsed dump trees.
//!
//! Parsing never fails; only serialization of a finished tree can.

use thiserror::Error;

/// Errors that can occur while rendering a parsed tree.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The tree could not be serialized to JSON.
    #[error("JSON render error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout dumptree-core.
pub type Result<T> = std::result::Result<T, DumpError>;
