use crate::engine::error::OperatorError;

/// Structured error information with details and suggestions
#[derive(Debug, Clone)]
pub struct StructuredError {
    /// Main error message
    pub message: String,
    /// Document location of the failing call site
    pub location: Option<String>,
    /// Error type/category (e.g., "ParseError", "BoundsError")
    pub error_type: Option<String>,
    /// Optional hint on how to fix the call
    pub suggestion: Option<String>,
    /// Extra context lines (offending argument, operator name, ...)
    pub context: Vec<String>,
}

impl StructuredError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            error_type: None,
            suggestion: None,
            context: Vec::new(),
        }
    }

    /// Set document location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set error type
    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    /// Set suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn add_context(mut self, entry: impl Into<String>) -> Self {
        self.context.push(entry.into());
        self
    }

    /// Build a structured error from an operator failure
    pub fn from_operator_error(operator: &str, error: &OperatorError) -> Self {
        let mut structured = StructuredError::new(error.to_string())
            .with_type(error.kind().code())
            .add_context(format!("operator: (( {} ... ))", operator));

        if let Some(index) = error.argument_index() {
            structured = structured.add_context(format!("argument: #{}", index));
        }
        if let Some(help) = error.kind().help() {
            structured = structured.with_suggestion(help);
        }

        structured
    }

    /// Build the formatted error details for plain display
    pub fn build_details(&self) -> Vec<String> {
        self.build_colored_details()
            .into_iter()
            .map(|(label, content)| format!("{label}: {content}"))
            .collect()
    }

    /// Build the formatted error details for colored display
    /// Returns tuples of (label, content) for the logger to format with colors
    pub fn build_colored_details(&self) -> Vec<(String, String)> {
        let mut details = Vec::new();

        if let Some(ref location) = self.location {
            details.push(("at".to_string(), format!("$.{location}")));
        }

        if let Some(ref error_type) = self.error_type {
            details.push(("code".to_string(), error_type.clone()));
        }

        for entry in &self.context {
            details.push(("context".to_string(), entry.clone()));
        }

        if let Some(ref suggestion) = self.suggestion {
            details.push(("help".to_string(), suggestion.clone()));
        }

        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::RangeError;

    #[test]
    fn test_structured_error_builder() {
        let error = StructuredError::new("Start index too large")
            .with_location("meta.gateway")
            .with_type("BoundsError")
            .with_suggestion("Use an index inside the block");

        assert_eq!(error.message, "Start index too large");
        assert_eq!(error.location, Some("meta.gateway".to_string()));
        assert_eq!(error.error_type, Some("BoundsError".to_string()));
        assert!(error.context.is_empty());
    }

    #[test]
    fn test_build_details() {
        let error = StructuredError::new("Test error")
            .with_location("a.b")
            .with_type("ParseError")
            .add_context("argument: #0")
            .with_suggestion("Check the address");

        let details = error.build_details();
        assert_eq!(
            details,
            vec![
                "at: $.a.b",
                "code: ParseError",
                "context: argument: #0",
                "help: Check the address",
            ]
        );
    }

    #[test]
    fn test_from_operator_error() {
        let err = OperatorError::from_range(RangeError::Parse {
            input: "nope".to_string(),
        });
        let structured = StructuredError::from_operator_error("ips", &err).with_location("x");

        let details = structured.build_colored_details();
        assert_eq!(details[0], ("at".to_string(), "$.x".to_string()));
        assert_eq!(details[1], ("code".to_string(), "ParseError".to_string()));
        assert!(details.iter().any(|(_, c)| c == "argument: #0"));
        assert!(details.iter().any(|(label, _)| label == "help"));
    }
}
