//! Display name resolution
//!
//! Resolves the name a handle reports for itself the way Xlib's
//! `XDisplayName` does: an explicit non-empty name wins, then the `DISPLAY`
//! environment variable, then the empty string.

/// Environment variable naming the default X display
pub const DISPLAY_ENV: &str = "DISPLAY";

/// Resolve the display name a connection to `requested` would use
///
/// # Arguments
/// * `requested` - Optional display name given by the caller, e.g. `":0"`
///
/// # Returns
/// The requested name if non-empty, else `$DISPLAY`, else `""`
pub fn resolve_display_name(requested: Option<&str>) -> String {
    match requested {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => std::env::var(DISPLAY_ENV).unwrap_or_default(),
    }
}

/// Sets `DISPLAY` for the duration of a test and restores the previous value
#[cfg(test)]
pub(crate) struct DisplayEnvGuard {
    saved: Option<std::ffi::OsString>,
}

#[cfg(test)]
impl DisplayEnvGuard {
    /// `None` removes the variable
    pub(crate) fn set(value: Option<&str>) -> Self {
        let saved = std::env::var_os(DISPLAY_ENV);
        // SAFETY: callers are #[serial] with every other test touching DISPLAY
        unsafe {
            match value {
                Some(v) => std::env::set_var(DISPLAY_ENV, v),
                None => std::env::remove_var(DISPLAY_ENV),
            }
        }
        Self { saved }
    }
}

#[cfg(test)]
impl Drop for DisplayEnvGuard {
    fn drop(&mut self) {
        // SAFETY: callers are #[serial] with every other test touching DISPLAY
        unsafe {
            match &self.saved {
                Some(v) => std::env::set_var(DISPLAY_ENV, v),
                None => std::env::remove_var(DISPLAY_ENV),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn explicit_name_wins_over_env() {
        let _env = DisplayEnvGuard::set(Some(":7"));
        assert_eq!(resolve_display_name(Some("host:0.0")), "host:0.0");
    }

    #[test]
    #[serial]
    fn absent_name_uses_env() {
        let _env = DisplayEnvGuard::set(Some(":3"));
        assert_eq!(resolve_display_name(None), ":3");
    }

    #[test]
    #[serial]
    fn empty_name_is_treated_as_absent() {
        let _env = DisplayEnvGuard::set(Some(":1"));
        assert_eq!(resolve_display_name(Some("")), ":1");
    }

    #[test]
    #[serial]
    fn no_name_and_no_env_is_empty() {
        let _env = DisplayEnvGuard::set(None);
        assert_eq!(resolve_display_name(None), "");
    }

    #[test]
    #[serial]
    fn guard_restores_previous_value() {
        let outer = DisplayEnvGuard::set(Some(":4"));
        {
            let _inner = DisplayEnvGuard::set(None);
            assert_eq!(std::env::var_os(DISPLAY_ENV), None);
        }
        assert_eq!(resolve_display_name(None), ":4");
        drop(outer);
    }
}
