//! # enunciate
//!
//! The constraint core of the Enunciate documentation and client-code
//! generator.
//!
//! Bean Validation annotations found on Java declarations are turned into
//! an ordered list of [`Constraint`]s, which are then projected onto XML
//! Schema restriction facets of the accessor's type. Client binding
//! validators (currently Objective-C) report the bindings that a target
//! language cannot represent faithfully.
//!
//! ## Features
//!
//! - Constraint extraction with validation-group filtering
//! - Facet projection with a configurable length-bound policy
//! - Package-level `@XmlSchemaType` resolution, cached per package
//! - Objective-C compatibility advice
//! - `xs:simpleType` fragment rendering
//!
//! ## Example
//!
//! ```rust
//! use enunciate::declarations::{AnnotationMirror, AnnotationValue, Declaration};
//! use enunciate::types::{decorate_with_restrictions, KnownXmlType, XmlType};
//! use enunciate::Settings;
//! use std::sync::Arc;
//!
//! let field = Declaration::new("code").with_annotation(
//!     AnnotationMirror::new("javax.validation.constraints.Size")
//!         .with_value("max", AnnotationValue::Int(8)),
//! );
//!
//! let base = Arc::new(XmlType::from(KnownXmlType::String));
//! let decorated = decorate_with_restrictions(base, &field, &Settings::default()).unwrap();
//! assert_eq!(decorated.restrictions()[0].to_string(), "maxLength=8");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod names;
pub mod namespaces;
pub mod settings;

// Declaration model
pub mod declarations;
pub mod ignore;

// Constraint extraction
pub mod validation;

// Type model and facet projection
pub mod types;
pub mod exports;

// Client binding checks
pub mod definitions;
pub mod diagnostics;
pub mod objc;

// Re-exports for convenience
pub use declarations::{AnnotatedDeclaration, AnnotationMirror, AnnotationValue, Declaration};
pub use diagnostics::{Diagnostic, Severity, ValidationResult};
pub use error::{AnnotationError, Error, Result};
pub use settings::{LengthBoundPolicy, Settings};
pub use types::{Facet, KnownXmlType, Restriction, XmlType};
pub use validation::{Constraint, ConstraintKind, GroupFilter};

/// Version of the enunciate library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
