//! AppleScript-driven Growl adapter
//!
//! Renders each operation as a small AppleScript snippet against the daemon's
//! scripting dictionary and evaluates it through `osascript`.

use std::process::Command;

use tracing::{trace, warn};

use crate::backend::Growl;
use crate::error::GrowlError;

const GROWL_HELPER_APP: &str = "GrowlHelperApp";
const OSASCRIPT: &str = "osascript";

/// Growl adapter that drives the daemon through its AppleScript dictionary.
pub struct AppleScriptGrowl {
    app_name: String,
}

impl AppleScriptGrowl {
    /// Create an adapter for the given application name.
    ///
    /// Fails with [`GrowlError::EngineUnavailable`] when `osascript` cannot
    /// be resolved on `PATH`.
    pub fn new(app_name: impl Into<String>) -> Result<Self, GrowlError> {
        which::which(OSASCRIPT).map_err(|_| GrowlError::EngineUnavailable)?;
        Ok(Self {
            app_name: app_name.into(),
        })
    }

    /// Evaluate a script, returning its trimmed stdout.
    fn eval(&self, script: &str) -> Result<String, GrowlError> {
        let output = Command::new(OSASCRIPT)
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|e| GrowlError::ScriptFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GrowlError::ScriptFailed(format!(
                "osascript exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Growl for AppleScriptGrowl {
    fn is_running(&self) -> bool {
        let script = format!(
            "tell application \"System Events\" to (name of processes) contains {}",
            quoted(GROWL_HELPER_APP)
        );
        match self.eval(&script) {
            Ok(out) => out == "true",
            Err(e) => {
                warn!("Daemon probe failed, treating Growl as not running: {}", e);
                false
            }
        }
    }

    fn register(&self, notifications: &[String], enabled: &[String]) -> Result<(), GrowlError> {
        let script = register_script(&self.app_name, notifications, enabled);
        trace!("Register script:\n{}", script);
        self.eval(&script).map(|_| ())
    }

    fn notify(
        &self,
        notification: &str,
        title: &str,
        description: &str,
    ) -> Result<(), GrowlError> {
        let script = notify_script(&self.app_name, notification, title, description);
        trace!("Notify script:\n{}", script);
        self.eval(&script).map(|_| ())
    }
}

/// Render a string as an AppleScript literal, escaping `\` and `"` so a
/// value cannot break out of its quotes and corrupt the script.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Render a list of names as an AppleScript list literal.
fn list_literal(names: &[String]) -> String {
    let items: Vec<String> = names.iter().map(|n| quoted(n)).collect();
    format!("{{{}}}", items.join(","))
}

fn register_script(app_name: &str, notifications: &[String], enabled: &[String]) -> String {
    format!(
        "tell application {helper}\n\
         set the allNotificationsList to {all}\n\
         set the enabledNotificationsList to {enabled}\n\
         register as application {app} all notifications allNotificationsList \
         default notifications enabledNotificationsList\n\
         end tell",
        helper = quoted(GROWL_HELPER_APP),
        all = list_literal(notifications),
        enabled = list_literal(enabled),
        app = quoted(app_name),
    )
}

fn notify_script(app_name: &str, notification: &str, title: &str, description: &str) -> String {
    format!(
        "tell application {helper}\n\
         notify with name {name} title {title} description {description} \
         application name {app}\n\
         end tell",
        helper = quoted(GROWL_HELPER_APP),
        name = quoted(notification),
        title = quoted(title),
        description = quoted(description),
        app = quoted(app_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn quoted_wraps_plain_strings() {
        assert_eq!(quoted("Build Failed"), "\"Build Failed\"");
    }

    #[test]
    fn quoted_escapes_quotes_and_backslashes() {
        assert_eq!(quoted(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quoted(r"a\b"), r#""a\\b""#);
    }

    #[test]
    fn list_literal_renders_quoted_items() {
        assert_eq!(
            list_literal(&names(&["Build Started", "Build Failed"])),
            r#"{"Build Started","Build Failed"}"#
        );
        assert_eq!(list_literal(&[]), "{}");
    }

    #[test]
    fn register_script_shape() {
        let script = register_script(
            "My App",
            &names(&["Build Started", "Build Failed"]),
            &names(&["Build Failed"]),
        );
        assert_eq!(
            script,
            "tell application \"GrowlHelperApp\"\n\
             set the allNotificationsList to {\"Build Started\",\"Build Failed\"}\n\
             set the enabledNotificationsList to {\"Build Failed\"}\n\
             register as application \"My App\" all notifications allNotificationsList \
             default notifications enabledNotificationsList\n\
             end tell"
        );
    }

    #[test]
    fn notify_script_shape() {
        let script = notify_script("My App", "Build Failed", "Build", "It broke");
        assert_eq!(
            script,
            "tell application \"GrowlHelperApp\"\n\
             notify with name \"Build Failed\" title \"Build\" description \"It broke\" \
             application name \"My App\"\n\
             end tell"
        );
    }

    #[test]
    fn notify_script_escapes_interpolated_values() {
        let script = notify_script("My App", "Build Failed", "Build", r#"the "fast" one broke"#);
        assert!(script.contains(r#"description "the \"fast\" one broke""#));
    }
}
