//! No-op Growl adapter

use crate::backend::Growl;
use crate::error::GrowlError;

/// Backend that reports the daemon as not running and drops everything else.
///
/// Useful on hosts without Growl and as a stand-in under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGrowl;

impl NoopGrowl {
    /// Create a new no-op backend.
    pub fn new() -> Self {
        Self
    }
}

impl Growl for NoopGrowl {
    fn is_running(&self) -> bool {
        false
    }

    fn register(&self, _notifications: &[String], _enabled: &[String]) -> Result<(), GrowlError> {
        Ok(())
    }

    fn notify(
        &self,
        _notification: &str,
        _title: &str,
        _description: &str,
    ) -> Result<(), GrowlError> {
        Ok(())
    }
}
