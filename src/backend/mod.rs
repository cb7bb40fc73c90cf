//! Growl backend adapters
//!
//! [`Growl`] is the capability surface the facade drives. The default adapter
//! talks to the daemon through AppleScript; a no-op stub is available for
//! hosts without Growl and for tests.

mod applescript;
mod noop;

pub use applescript::AppleScriptGrowl;
pub use noop::NoopGrowl;

use crate::error::GrowlError;

/// Capability surface of a Growl integration.
///
/// Any concrete delivery mechanism (script-driven, native binding, network)
/// implements these three operations.
pub trait Growl {
    /// Check whether the notification daemon is running.
    fn is_running(&self) -> bool;

    /// Register the application with the daemon, declaring every notification
    /// it may emit (`notifications`) and the subset enabled by default
    /// (`enabled`).
    fn register(&self, notifications: &[String], enabled: &[String]) -> Result<(), GrowlError>;

    /// Deliver a single notification.
    fn notify(&self, notification: &str, title: &str, description: &str)
        -> Result<(), GrowlError>;
}

/// Create the default backend for the current host.
///
/// Fails with [`GrowlError::EngineUnavailable`] when the host has no
/// AppleScript support. There is no silent fallback; callers that want a
/// no-op on unsupported hosts inject [`NoopGrowl`] explicitly.
pub fn create_growl(app_name: &str) -> Result<Box<dyn Growl>, GrowlError> {
    Ok(Box::new(AppleScriptGrowl::new(app_name)?))
}
