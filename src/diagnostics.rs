//! Advisory diagnostics
//!
//! Findings that do not stop generation. They accumulate in a
//! [`ValidationResult`] and are left to the reporting layer.

use serde::Serialize;
use std::fmt;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Output is produced but may surprise consumers
    Warning,
    /// Output for the affected binding cannot be produced as is
    Error,
}

impl Severity {
    /// Get the severity as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding about a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity
    pub severity: Severity,
    /// What the finding is about (e.g. `Person.friends`)
    pub subject: String,
    /// Message
    pub message: String,
}

impl Diagnostic {
    /// Create a warning
    pub fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Create an error
    pub fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.subject, self.message)
    }
}

/// Accumulated diagnostics, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning
    pub fn add_warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(subject, message));
    }

    /// Record an error
    pub fn add_error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(subject, message));
    }

    /// Append all diagnostics of another result
    pub fn aggregate(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// All diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Warnings only
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of_severity(Severity::Warning)
    }

    /// Errors only
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of_severity(Severity::Error)
    }

    fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Whether any error was recorded
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
