//! Growl notification facade

use tracing::debug;

use crate::backend::{self, Growl};
use crate::error::GrowlError;
use crate::notification::{Notification, NotificationSet};

/// A helper that accumulates notification configuration for an application
/// and drives a [`Growl`] backend.
///
/// Callers declare the catalog of notification names the application may
/// emit with [`add`](Self::add), mark a subset enabled by default with
/// [`enable`](Self::enable), then [`register`](Self::register) and
/// [`growl`](Self::growl). Registration happens implicitly on the first
/// `growl` call if it was never requested explicitly.
///
/// When the daemon is not running, `register` and `growl` degrade to silent
/// no-ops rather than errors.
pub struct Growler {
    app_name: String,
    backend: Option<Box<dyn Growl>>,
    notifications: Vec<String>,
    enabled: Vec<String>,
    registered: bool,
}

impl Growler {
    /// Create a facade for the given application name.
    ///
    /// The default backend is constructed lazily on first daemon contact.
    ///
    /// # Panics
    ///
    /// Panics if `app_name` is empty.
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        assert!(!app_name.is_empty(), "application name must not be empty");
        Self {
            app_name,
            backend: None,
            notifications: Vec::new(),
            enabled: Vec::new(),
            registered: false,
        }
    }

    /// Create a facade bound to the given backend instead of the host
    /// default.
    ///
    /// # Panics
    ///
    /// Panics if `app_name` is empty.
    pub fn with_backend(app_name: impl Into<String>, backend: Box<dyn Growl>) -> Self {
        let mut growler = Self::new(app_name);
        growler.backend = Some(backend);
        growler
    }

    /// The application name used for every registration and notification.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Every notification name declared so far, in first-insertion order.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// The notification names enabled by default, in first-insertion order.
    pub fn enabled(&self) -> &[String] {
        &self.enabled
    }

    /// Whether a registration has completed against a running daemon.
    ///
    /// Monotonic: once true it never reverts.
    pub fn registered(&self) -> bool {
        self.registered
    }

    /// Declare notification names the application may emit.
    ///
    /// Duplicates are dropped; first-insertion order is kept.
    ///
    /// # Panics
    ///
    /// Panics if any name is empty.
    pub fn add<I>(&mut self, notifications: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Notification,
    {
        for notification in notifications {
            insert_unique(&mut self.notifications, notification.name());
        }
        self
    }

    /// Declare every name of a [`NotificationSet`].
    pub fn add_set<S: NotificationSet>(&mut self) -> &mut Self {
        self.add(S::NAMES)
    }

    /// Mark notification names as enabled by default.
    ///
    /// Does not require a prior [`add`](Self::add) of the same names.
    ///
    /// # Panics
    ///
    /// Panics if any name is empty.
    pub fn enable<I>(&mut self, notifications: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Notification,
    {
        for notification in notifications {
            insert_unique(&mut self.enabled, notification.name());
        }
        self
    }

    /// Mark every name of a [`NotificationSet`] as enabled by default.
    pub fn enable_set<S: NotificationSet>(&mut self) -> &mut Self {
        self.enable(S::NAMES)
    }

    /// Enable every currently declared notification.
    ///
    /// Snapshot semantics: names added after this call are not enabled
    /// automatically. Idempotent.
    pub fn enable_all(&mut self) -> &mut Self {
        for name in &self.notifications {
            insert_unique(&mut self.enabled, name);
        }
        self
    }

    /// Check whether the notification daemon is running.
    ///
    /// Constructs the backend on first use; fails only when the host has no
    /// AppleScript support.
    pub fn is_running(&mut self) -> Result<bool, GrowlError> {
        self.ensure_backend()?;
        Ok(self.backend.as_deref().is_some_and(|b| b.is_running()))
    }

    /// Register the application with the daemon, enabling every declared
    /// notification first.
    ///
    /// Silent no-op when the daemon is not running. May be called again
    /// later to push updated configuration.
    pub fn register(&mut self) -> Result<(), GrowlError> {
        self.register_with(true)
    }

    /// Register the application with the daemon.
    ///
    /// With `enable_all` false the enabled set is pushed as-is instead of
    /// being widened to the full catalog first. Silent no-op when the daemon
    /// is not running.
    pub fn register_with(&mut self, enable_all: bool) -> Result<(), GrowlError> {
        if !self.is_running()? {
            debug!("Growl is not running, skipping registration of {}", self.app_name);
            return Ok(());
        }

        if enable_all {
            self.enable_all();
        }

        if let Some(backend) = self.backend.as_deref() {
            backend.register(&self.notifications, &self.enabled)?;
            self.registered = true;
        }

        Ok(())
    }

    /// Deliver a notification.
    ///
    /// Registers first (enabling every declared notification, as
    /// [`register`](Self::register) does) if no registration has happened
    /// yet. Silent no-op when the daemon is not running.
    pub fn growl(
        &mut self,
        notification: impl Notification,
        title: &str,
        description: &str,
    ) -> Result<(), GrowlError> {
        if !self.is_running()? {
            debug!("Growl is not running, dropping notification from {}", self.app_name);
            return Ok(());
        }

        if !self.registered {
            self.register()?;
        }

        if let Some(backend) = self.backend.as_deref() {
            backend.notify(notification.name(), title, description)?;
        }

        Ok(())
    }

    fn ensure_backend(&mut self) -> Result<(), GrowlError> {
        if self.backend.is_none() {
            self.backend = Some(backend::create_growl(&self.app_name)?);
        }
        Ok(())
    }
}

/// Insert into an insertion-ordered set, dropping duplicates.
fn insert_unique(set: &mut Vec<String>, name: &str) {
    assert!(!name.is_empty(), "notification name must not be empty");
    if !set.iter().any(|existing| existing == name) {
        set.push(name.to_string());
    }
}
