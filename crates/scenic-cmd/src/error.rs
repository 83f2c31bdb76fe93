//! Command error types

use thiserror::Error;

use scenic_scene::SceneError;

/// Result type for command handlers; the `Ok` payload is the user-facing
/// success message
pub type CmdResult<T = String> = Result<T, CmdError>;

#[derive(Debug, Error)]
pub enum CmdError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Object '{0}' not found")]
    EntityNotFound(String),

    #[error("Object '{0}' not found or has no material")]
    NoMaterial(String),

    #[error("Group '{0}' not found")]
    GroupNotFound(String),

    #[error("Clipboard is empty")]
    EmptyClipboard,

    #[error("Unknown config key: {0}")]
    InvalidConfigKey(String),

    #[error("{0} not implemented yet")]
    Unimplemented(&'static str),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Engine(#[from] SceneError),
}
