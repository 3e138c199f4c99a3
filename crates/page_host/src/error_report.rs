//! Diagnostic text for errors surfaced to users and logs.

use std::fmt;

/// Message used when a thrown value carries no usable error information.
pub const UNDEFINED_ERROR_MESSAGE: &str = "undefined error type";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Name, message, and optional stack of a failure, independent of where it came from.
pub struct ErrorReport {
    /// Error class name (`TypeError`, `Error`, ...).
    pub name: String,
    /// Human-readable message.
    pub message: String,
    /// Stack trace text when the source provided one.
    pub stack: Option<String>,
}

impl ErrorReport {
    /// Builds a report without a stack.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    /// Attaches stack text. Blank stacks are ignored.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        let stack = stack.into();
        self.stack = (!stack.trim().is_empty()).then_some(stack);
        self
    }

    /// Report substituted for values that are not errors.
    pub fn undefined() -> Self {
        Self::new("Error", UNDEFINED_ERROR_MESSAGE)
    }

    /// Passes a report through, or substitutes [`ErrorReport::undefined`].
    pub fn normalize(report: Option<Self>) -> Self {
        report.unwrap_or_else(Self::undefined)
    }

    /// Captures a Rust error. Its `source()` chain becomes the stack text.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut report = Self::new("Error", err.to_string());
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(format!("    caused by: {cause}"));
            source = cause.source();
        }
        if !chain.is_empty() {
            let stack = format!("{}\n{}", report.summary(), chain.join("\n"));
            report = report.with_stack(stack);
        }
        report
    }

    /// `"<name>: <message>"`.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.name, self.message)
    }

    /// Preferred diagnostic text: the stack verbatim when present, otherwise [`Self::summary`].
    pub fn describe(&self) -> String {
        match &self.stack {
            Some(stack) => stack.clone(),
            None => self.summary(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("disk offline")]
    struct Inner;

    #[derive(Debug, Error)]
    #[error("save failed")]
    struct Outer(#[source] Inner);

    #[test]
    fn describe_prefers_stack_verbatim() {
        let stack = "TypeError: x is undefined\n    at main (app.js:1:1)";
        let report = ErrorReport::new("TypeError", "x is undefined").with_stack(stack);
        assert_eq!(report.describe(), stack);
    }

    #[test]
    fn describe_falls_back_to_name_and_message() {
        let report = ErrorReport::new("RangeError", "index 9 out of bounds").with_stack("  ");
        assert_eq!(report.stack, None);
        assert_eq!(report.describe(), "RangeError: index 9 out of bounds");
        assert_eq!(report.to_string(), report.describe());
    }

    #[test]
    fn normalize_substitutes_undefined_error() {
        assert_eq!(
            ErrorReport::normalize(None).describe(),
            "Error: undefined error type"
        );
        let kept = ErrorReport::new("Error", "kept");
        assert_eq!(ErrorReport::normalize(Some(kept.clone())), kept);
    }

    #[test]
    fn from_error_renders_source_chain() {
        let report = ErrorReport::from_error(&Outer(Inner));
        assert_eq!(report.message, "save failed");
        assert_eq!(
            report.describe(),
            "Error: save failed\n    caused by: disk offline"
        );

        let plain = ErrorReport::from_error(&Inner);
        assert_eq!(plain.describe(), "Error: disk offline");
    }
}
