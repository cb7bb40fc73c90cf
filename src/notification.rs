//! Symbolic notification names
//!
//! The facade accepts notification identifiers either as free-form strings or
//! as symbols from a closed, application-defined set. Both forms go through
//! the [`Notification`] trait.

/// A notification identifier carrying a stable string name.
///
/// Implemented for `str` and `String` so plain strings work everywhere the
/// facade takes a notification. Applications with a fixed catalog implement
/// it for their own enum, by convention returning the variant name:
///
/// ```
/// use growler::Notification;
///
/// enum BuildEvent {
///     Started,
///     Failed,
/// }
///
/// impl Notification for BuildEvent {
///     fn name(&self) -> &str {
///         match self {
///             BuildEvent::Started => "Started",
///             BuildEvent::Failed => "Failed",
///         }
///     }
/// }
///
/// assert_eq!(BuildEvent::Failed.name(), "Failed");
/// ```
pub trait Notification {
    /// The stable string identifier of this notification.
    fn name(&self) -> &str;
}

impl Notification for str {
    fn name(&self) -> &str {
        self
    }
}

impl Notification for String {
    fn name(&self) -> &str {
        self
    }
}

impl<N: Notification + ?Sized> Notification for &N {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A closed group of notification names.
///
/// The group lists every member's identifier in declaration order, which lets
/// callers declare or enable a whole catalog in one call
/// ([`Growler::add_set`](crate::Growler::add_set),
/// [`Growler::enable_set`](crate::Growler::enable_set)).
pub trait NotificationSet {
    /// Every name in the group, in declaration order.
    const NAMES: &'static [&'static str];
}
