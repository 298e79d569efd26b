//! Error types for the fallible edges of the game.
//!
//! The simulation itself never fails: bad captures and out-of-phase inputs are
//! ignored. Only loading [`Settings`](crate::Settings) from JSON can go wrong.

use std::fmt;

/// Failure to load or validate round settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings text was not valid JSON for [`Settings`](crate::Settings).
    Parse(serde_json::Error),

    /// A field parsed but holds a value the game cannot run with.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of what is allowed.
        reason: &'static str,
    },

    /// The settings file could not be read (native demo only).
    Io(std::io::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(err) => write!(f, "settings parse error: {err}"),
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
            SettingsError::Io(err) => write!(f, "could not read settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(err) => Some(err),
            SettingsError::Io(err) => Some(err),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_display_names_field() {
        let err = SettingsError::Invalid {
            field: "round_seconds",
            reason: "must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid setting `round_seconds`: must be at least 1"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = SettingsError::from(json_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("settings parse error"));
    }
}
