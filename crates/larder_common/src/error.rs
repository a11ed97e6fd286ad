//! Error types for larder.
//!
//! The matching core itself is total and never fails; errors only arise at
//! the edges (loading recipe data from disk).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LarderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
