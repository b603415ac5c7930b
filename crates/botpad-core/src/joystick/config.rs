//! Joystick configuration
//!
//! Mirrors the options object accepted by `createJoyStick` on the JS side,
//! hence the camelCase field names on the wire.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Base color used when the caller doesn't pick one (light blue)
pub const DEFAULT_BASE_COLOR: &str = "#03A9F4";

/// Stick color used when the caller doesn't pick one (white)
pub const DEFAULT_STICK_COLOR: &str = "#FFFFFF";

/// Drop shadow applied to the stick
pub const STICK_SHADOW: &str = "0 0 20px 1px #000000";

/// Border radius that fully rounds an element regardless of its size
pub const ROUND_RADIUS: &str = "100vw";

/// Options for creating a joystick
///
/// Sizes and colors are CSS values (`"192px"`, `"aqua"`) applied verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoystickConfig {
    /// Width and height of the base (required)
    #[serde(default)]
    pub base_size: Option<String>,
    /// Width and height of the stick (required)
    #[serde(default)]
    pub stick_size: Option<String>,
    /// Background of the base
    #[serde(default)]
    pub base_color: Option<String>,
    /// Background of the stick
    #[serde(default)]
    pub stick_color: Option<String>,
}

impl JoystickConfig {
    /// Config with the two required sizes and default colors
    pub fn new(base_size: impl Into<String>, stick_size: impl Into<String>) -> Self {
        Self {
            base_size: Some(base_size.into()),
            stick_size: Some(stick_size.into()),
            ..Default::default()
        }
    }

    /// Set the base color
    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = Some(color.into());
        self
    }

    /// Set the stick color
    pub fn with_stick_color(mut self, color: impl Into<String>) -> Self {
        self.stick_color = Some(color.into());
        self
    }

    /// Check that both sizes are present and non-empty.
    ///
    /// The error lists every missing field, base first.
    pub fn validate(&self) -> Result<(), WidgetError> {
        let mut missing = Vec::new();
        if non_empty(&self.base_size).is_none() {
            missing.push("baseSize");
        }
        if non_empty(&self.stick_size).is_none() {
            missing.push("stickSize");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WidgetError::Configuration { missing })
        }
    }

    /// Base size, empty if unset
    pub fn base_size(&self) -> &str {
        non_empty(&self.base_size).unwrap_or_default()
    }

    /// Stick size, empty if unset
    pub fn stick_size(&self) -> &str {
        non_empty(&self.stick_size).unwrap_or_default()
    }

    /// Base color, falling back to [`DEFAULT_BASE_COLOR`]
    pub fn base_color(&self) -> &str {
        non_empty(&self.base_color).unwrap_or(DEFAULT_BASE_COLOR)
    }

    /// Stick color, falling back to [`DEFAULT_STICK_COLOR`]
    pub fn stick_color(&self) -> &str {
        non_empty(&self.stick_color).unwrap_or(DEFAULT_STICK_COLOR)
    }

    /// Inline style declarations for the base element.
    ///
    /// The base is a flex container that centers the stick, so clearing the
    /// stick's `top`/`left` puts it back in the middle.
    pub fn base_styles(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("height", self.base_size()),
            ("width", self.base_size()),
            ("background-color", self.base_color()),
            ("display", "flex"),
            ("justify-content", "center"),
            ("align-items", "center"),
            ("position", "absolute"),
        ]
    }

    /// Inline style declarations for the stick element
    pub fn stick_styles(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("height", self.stick_size()),
            ("width", self.stick_size()),
            ("background-color", self.stick_color()),
            ("box-shadow", STICK_SHADOW),
            ("touch-action", "none"),
            ("position", "absolute"),
            ("border-radius", ROUND_RADIUS),
        ]
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style<'a>(styles: &[(&'static str, &'a str)], name: &str) -> Option<&'a str> {
        styles.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    #[test]
    fn test_validate_accepts_required_sizes() {
        let config = JoystickConfig::new("192px", "128px");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let cases = [
            (JoystickConfig::default(), vec!["baseSize", "stickSize"]),
            (
                JoystickConfig {
                    stick_size: Some("128px".to_string()),
                    ..Default::default()
                },
                vec!["baseSize"],
            ),
            (
                JoystickConfig {
                    base_size: Some("192px".to_string()),
                    ..Default::default()
                },
                vec!["stickSize"],
            ),
            (JoystickConfig::new("", "128px"), vec!["baseSize"]),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(WidgetError::Configuration { missing }) => assert_eq!(missing, expected),
                other => panic!("expected configuration error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_default_colors() {
        let config = JoystickConfig::new("192px", "128px");
        assert_eq!(config.base_color(), DEFAULT_BASE_COLOR);
        assert_eq!(config.stick_color(), DEFAULT_STICK_COLOR);

        let blank = JoystickConfig::new("192px", "128px").with_base_color("");
        assert_eq!(blank.base_color(), DEFAULT_BASE_COLOR);
    }

    #[test]
    fn test_custom_colors_win() {
        let config = JoystickConfig::new("192px", "128px")
            .with_base_color("aqua")
            .with_stick_color("#000");
        assert_eq!(style(&config.base_styles(), "background-color"), Some("aqua"));
        assert_eq!(style(&config.stick_styles(), "background-color"), Some("#000"));
    }

    #[test]
    fn test_styles_carry_sizes_and_shape() {
        let config = JoystickConfig::new("192px", "128px");

        let base = config.base_styles();
        assert_eq!(style(&base, "width"), Some("192px"));
        assert_eq!(style(&base, "height"), Some("192px"));
        assert_eq!(style(&base, "display"), Some("flex"));
        assert_eq!(style(&base, "position"), Some("absolute"));

        let stick = config.stick_styles();
        assert_eq!(style(&stick, "width"), Some("128px"));
        assert_eq!(style(&stick, "box-shadow"), Some(STICK_SHADOW));
        assert_eq!(style(&stick, "border-radius"), Some(ROUND_RADIUS));
        assert_eq!(style(&stick, "touch-action"), Some("none"));
        assert!(style(&stick, "top").is_none());
        assert!(style(&stick, "left").is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let config: JoystickConfig = serde_json::from_str(
            r#"{"baseSize":"192px","stickSize":"128px","stickColor":"red"}"#,
        )
        .unwrap();
        assert_eq!(config.base_size(), "192px");
        assert_eq!(config.stick_color(), "red");
        assert_eq!(config.base_color(), DEFAULT_BASE_COLOR);
    }

    #[test]
    fn test_deserialize_null_size_is_missing() {
        let config: JoystickConfig =
            serde_json::from_str(r#"{"baseSize":null,"stickSize":"128px"}"#).unwrap();
        assert!(config.validate().unwrap_err().is_configuration());
    }
}
