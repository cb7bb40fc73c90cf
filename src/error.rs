//! Crate error types

use thiserror::Error;

/// Errors raised by Growl backends.
///
/// A daemon that is not running is never an error; facade operations degrade
/// to no-ops in that case.
#[derive(Debug, Clone, Error)]
pub enum GrowlError {
    /// AppleScript support (`osascript`) is missing on this host.
    #[error("AppleScript support (osascript) is not available on this host")]
    EngineUnavailable,

    /// A generated script failed to launch or evaluate.
    #[error("AppleScript evaluation failed: {0}")]
    ScriptFailed(String),
}
