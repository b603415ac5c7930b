//! Labeled checkbox

/// Resolved id and caption of a labeled checkbox
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxSpec {
    /// Id of the wrapping `<label>`
    pub id: String,
    /// Caption shown next to the box
    pub text: String,
}

impl CheckboxSpec {
    /// Resolve the caption, falling back to the id when `text` is absent or empty
    pub fn new(id: impl Into<String>, text: Option<&str>) -> Self {
        let id = id.into();
        let text = match text.filter(|t| !t.is_empty()) {
            Some(t) => t.to_string(),
            None => id.clone(),
        };
        Self { id, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults_to_id() {
        assert_eq!(CheckboxSpec::new("agree", None).text, "agree");
        assert_eq!(CheckboxSpec::new("agree", Some("")).text, "agree");
    }

    #[test]
    fn test_explicit_text() {
        let spec = CheckboxSpec::new("agree", Some("I agree"));
        assert_eq!(spec.id, "agree");
        assert_eq!(spec.text, "I agree");
    }
}
