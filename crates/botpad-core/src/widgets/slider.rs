//! Range slider with a live value display

/// Lower bound when the caller gives none
pub const DEFAULT_SLIDER_MIN: f64 = 0.0;

/// Upper bound when the caller gives none
pub const DEFAULT_SLIDER_MAX: f64 = 100.0;

/// Resolved ids and attributes for a slider and its value display
#[derive(Clone, Debug, PartialEq)]
pub struct SliderSpec {
    /// Id of the `<input type="range">`
    pub id: String,
    pub min: f64,
    pub max: f64,
}

impl SliderSpec {
    /// Value the input starts at
    pub const INITIAL_VALUE: &'static str = "0";

    /// Text in front of the live value
    pub const VALUE_LABEL: &'static str = "Value: ";

    pub fn new(id: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            id: id.into(),
            min,
            max,
        }
    }

    /// Id of the paragraph holding the value display
    pub fn value_id(&self) -> String {
        format!("{}-value", self.id)
    }

    /// Id of the span whose text tracks the input value
    pub fn value_span_id(&self) -> String {
        format!("{}-value-span", self.id)
    }

    /// `min` as an attribute value (`0.0` renders as `"0"`)
    pub fn min_attr(&self) -> String {
        self.min.to_string()
    }

    /// `max` as an attribute value
    pub fn max_attr(&self) -> String {
        self.max.to_string()
    }
}

impl Default for SliderSpec {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_SLIDER_MIN, DEFAULT_SLIDER_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_derive_from_slider_id() {
        let spec = SliderSpec::new("vol", 0.0, 10.0);
        assert_eq!(spec.value_id(), "vol-value");
        assert_eq!(spec.value_span_id(), "vol-value-span");
    }

    #[test]
    fn test_attributes_format_without_fraction() {
        let spec = SliderSpec::new("vol", 0.0, 10.0);
        assert_eq!(spec.min_attr(), "0");
        assert_eq!(spec.max_attr(), "10");

        let fine = SliderSpec::new("gain", -0.5, 1.5);
        assert_eq!(fine.min_attr(), "-0.5");
        assert_eq!(fine.max_attr(), "1.5");
    }

    #[test]
    fn test_default_range() {
        let spec = SliderSpec::default();
        assert!((spec.min - DEFAULT_SLIDER_MIN).abs() < f64::EPSILON);
        assert!((spec.max - DEFAULT_SLIDER_MAX).abs() < f64::EPSILON);
    }
}
