//! Error types for widget construction
//!
//! Construction either fully succeeds or fails before anything is attached,
//! so every variant describes a rejected call rather than a partial state.

/// Errors raised while building a widget.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// Required joystick parameters were missing or empty.
    #[error(
        "unable to create joystick, missing one or more required parameters: [{}]",
        .missing.join(", ")
    )]
    Configuration {
        /// Names of the missing fields, in declaration order
        missing: Vec<&'static str>,
    },

    /// The named parent container was not present when attaching.
    #[error("parent container {0} does not exist")]
    MissingContainer(String),

    /// An arrow was requested for a direction with no default image.
    #[error("unknown arrow direction: {0} (expected up, down, left or right)")]
    UnknownDirection(String),
}

impl WidgetError {
    /// Check if this is a configuration failure
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, WidgetError::Configuration { .. })
    }

    /// Check if this is a missing-container failure
    #[inline]
    pub fn is_missing_container(&self) -> bool {
        matches!(self, WidgetError::MissingContainer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_lists_fields() {
        let err = WidgetError::Configuration {
            missing: vec!["baseSize", "stickSize"],
        };
        assert_eq!(
            err.to_string(),
            "unable to create joystick, missing one or more required parameters: [baseSize, stickSize]"
        );
        assert!(err.is_configuration());
        assert!(!err.is_missing_container());
    }

    #[test]
    fn test_missing_container_message() {
        let err = WidgetError::MissingContainer("missing-panel".to_string());
        assert_eq!(err.to_string(), "parent container missing-panel does not exist");
        assert!(err.is_missing_container());
    }
}
