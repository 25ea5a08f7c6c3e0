//! Error types for enunciate
//!
//! Structural problems (bad package-level configuration, annotations missing
//! a mandatory attribute) are reported through [`Error`]. Advisory findings
//! are never errors; see [`crate::diagnostics`].

use std::fmt;
use thiserror::Error;

/// Result type alias using the enunciate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for enunciate operations
#[derive(Error, Debug)]
pub enum Error {
    /// Package-level type override is misconfigured
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A recognized annotation carries unusable data
    #[error("annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    /// Type model error (e.g. a restriction without facets)
    #[error("type error: {0}")]
    Type(String),

    /// Name error (invalid XML or Java name)
    #[error("name error: {0}")]
    Name(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML writing error
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

/// An annotation that could not be turned into a constraint or type
#[derive(Debug, Clone)]
pub struct AnnotationError {
    /// Error message
    pub message: String,
    /// Qualified name of the offending annotation type
    pub annotation: Option<String>,
    /// Attribute that was missing or malformed
    pub attribute: Option<String>,
    /// Declaration carrying the annotation
    pub declaration: Option<String>,
}

impl AnnotationError {
    /// Create a new annotation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            annotation: None,
            attribute: None,
            declaration: None,
        }
    }

    /// Set the annotation type
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Set the attribute name
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Set the declaration name
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }
}

impl fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref annotation) = self.annotation {
            write!(f, " (@{}", annotation)?;
            if let Some(ref attribute) = self.attribute {
                write!(f, ".{}", attribute)?;
            }
            write!(f, ")")?;
        }

        if let Some(ref declaration) = self.declaration {
            write!(f, " on {}", declaration)?;
        }

        Ok(())
    }
}

impl std::error::Error for AnnotationError {}
