//! Scene-level error types

use thiserror::Error;

/// Errors produced by the scene layer and render engines
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("{0} is not supported by this engine")]
    Unsupported(&'static str),

    #[error("export failed: {0}")]
    Export(String),

    #[error("import failed: {0}")]
    Import(String),

    #[error("snapshot failed: {0}")]
    Snapshot(String),
}
