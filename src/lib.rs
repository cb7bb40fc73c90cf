//! Growl desktop notification client driven by AppleScript.
//!
//! [`Growler`] accumulates the catalog of notification names an application
//! may emit, registers the application with the Growl daemon, and delivers
//! notifications. All daemon contact goes through the [`Growl`] capability
//! trait; the default backend renders AppleScript snippets and evaluates
//! them with `osascript`.
//!
//! When the daemon is not running, registration and delivery degrade to
//! silent no-ops, so applications can growl unconditionally.
//!
//! # Example
//!
//! ```no_run
//! use growler::Growler;
//!
//! # fn main() -> Result<(), growler::GrowlError> {
//! let mut growler = Growler::new("My App");
//! growler
//!     .add(["Build Started", "Build Failed"])
//!     .enable(["Build Failed"]);
//! growler.register()?;
//! growler.growl("Build Failed", "Build", "It broke")?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
mod error;
mod growler;
mod notification;

pub use backend::{create_growl, AppleScriptGrowl, Growl, NoopGrowl};
pub use error::GrowlError;
pub use growler::Growler;
pub use notification::{Notification, NotificationSet};
