//! Annotated declarations
//!
//! The processor never talks to a compiler directly. A host adapts its own
//! symbol model to [`AnnotatedDeclaration`]; the in-memory [`Declaration`]
//! type implements it for snapshots loaded from JSON and for tests.

use crate::names;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A declaration (class, field, property, package) carrying annotations
pub trait AnnotatedDeclaration {
    /// Name of the declaration; qualified for packages and annotation types
    fn name(&self) -> &str;

    /// Annotations applied to the declaration, in source order
    fn annotations(&self) -> &[AnnotationMirror];

    /// Qualified name of the enclosing package, if known
    fn package_name(&self) -> Option<&str> {
        None
    }

    /// Names of the doc-comment block tags on the declaration (without `@`)
    fn doc_tags(&self) -> &[String] {
        &[]
    }

    /// First annotation of the given qualified type
    fn find_annotation(&self, type_name: &str) -> Option<&AnnotationMirror> {
        self.annotations()
            .iter()
            .find(|mirror| mirror.annotation_type == type_name)
    }

    /// Whether the doc comment carries the given block tag
    fn has_doc_tag(&self, tag: &str) -> bool {
        self.doc_tags().iter().any(|t| t == tag)
    }
}

/// A value of an annotation attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnnotationValue {
    /// Boolean literal
    Bool(bool),
    /// Integral literal
    Int(i64),
    /// String literal
    String(String),
    /// Class literal, by qualified name
    Class(String),
    /// Enum constant, by name
    Enum(String),
    /// Array of values
    Array(Vec<AnnotationValue>),
    /// Nested annotation
    Annotation(Box<AnnotationMirror>),
}

impl AnnotationValue {
    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnnotationValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as class literal
    pub fn as_class(&self) -> Option<&str> {
        match self {
            AnnotationValue::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Get as a nested annotation
    pub fn as_annotation(&self) -> Option<&AnnotationMirror> {
        match self {
            AnnotationValue::Annotation(a) => Some(a),
            _ => None,
        }
    }

    /// View as a list; a single value is a one-element list
    ///
    /// Mirrors the source-level shorthand `groups = Foo.class` for
    /// `groups = {Foo.class}`.
    pub fn as_list(&self) -> Vec<&AnnotationValue> {
        match self {
            AnnotationValue::Array(values) => values.iter().collect(),
            other => vec![other],
        }
    }
}

/// An annotation applied to a declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMirror {
    /// Qualified name of the annotation type
    #[serde(rename = "type")]
    pub annotation_type: String,
    /// Explicitly given attribute values
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub values: IndexMap<String, AnnotationValue>,
    /// Declaration of the annotation type itself, when resolvable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Box<AnnotationTypeDeclaration>>,
}

impl AnnotationMirror {
    /// Create an annotation of the given type with no attributes
    pub fn new(annotation_type: impl Into<String>) -> Self {
        Self {
            annotation_type: annotation_type.into(),
            values: IndexMap::new(),
            definition: None,
        }
    }

    /// Set an attribute value
    pub fn with_value(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Attach the declaration of the annotation type
    pub fn with_definition(mut self, definition: AnnotationTypeDeclaration) -> Self {
        self.definition = Some(Box::new(definition));
        self
    }

    /// Get an attribute value
    pub fn value(&self, name: &str) -> Option<&AnnotationValue> {
        self.values.get(name)
    }

    /// Package the annotation type belongs to
    pub fn package_name(&self) -> Option<&str> {
        match self.definition {
            Some(ref definition) => definition.package_name(),
            None => names::package_of(&self.annotation_type),
        }
    }
}

/// Declaration of an annotation type (the target of meta-annotations)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTypeDeclaration {
    /// Qualified name of the annotation type
    pub qualified_name: String,
    /// Meta-annotations applied to the annotation type
    #[serde(default)]
    pub annotations: Vec<AnnotationMirror>,
}

impl AnnotationTypeDeclaration {
    /// Create an annotation type declaration
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: Vec::new(),
        }
    }

    /// Add a meta-annotation
    pub fn with_annotation(mut self, annotation: AnnotationMirror) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl AnnotatedDeclaration for AnnotationTypeDeclaration {
    fn name(&self) -> &str {
        &self.qualified_name
    }

    fn annotations(&self) -> &[AnnotationMirror] {
        &self.annotations
    }

    fn package_name(&self) -> Option<&str> {
        names::package_of(&self.qualified_name)
    }
}

/// A plain declaration snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Declaration name
    pub name: String,
    /// Enclosing package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Applied annotations
    #[serde(default)]
    pub annotations: Vec<AnnotationMirror>,
    /// Doc-comment block tag names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_tags: Vec<String>,
}

impl Declaration {
    /// Create a declaration with no annotations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a package declaration; it is its own enclosing package
    pub fn package(qualified_name: impl Into<String>) -> Self {
        let name = qualified_name.into();
        Self {
            package: Some(name.clone()),
            name,
            ..Default::default()
        }
    }

    /// Set the enclosing package
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Add an annotation
    pub fn with_annotation(mut self, annotation: AnnotationMirror) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a doc-comment block tag
    pub fn with_doc_tag(mut self, tag: impl Into<String>) -> Self {
        self.doc_tags.push(tag.into());
        self
    }
}

impl AnnotatedDeclaration for Declaration {
    fn name(&self) -> &str {
        &self.name
    }

    fn annotations(&self) -> &[AnnotationMirror] {
        &self.annotations
    }

    fn package_name(&self) -> Option<&str> {
        self.package.as_deref()
    }

    fn doc_tags(&self) -> &[String] {
        &self.doc_tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_annotation_returns_first() {
        let decl = Declaration::new("field")
            .with_annotation(
                AnnotationMirror::new("a.B").with_value("value", AnnotationValue::Int(1)),
            )
            .with_annotation(
                AnnotationMirror::new("a.B").with_value("value", AnnotationValue::Int(2)),
            );

        let found = decl.find_annotation("a.B").unwrap();
        assert_eq!(found.value("value").and_then(AnnotationValue::as_int), Some(1));
        assert!(decl.find_annotation("a.C").is_none());
    }

    #[test]
    fn test_annotation_package() {
        let plain = AnnotationMirror::new("javax.validation.constraints.Size");
        assert_eq!(plain.package_name(), Some("javax.validation.constraints"));

        let resolved = AnnotationMirror::new("Size")
            .with_definition(AnnotationTypeDeclaration::new("javax.validation.constraints.Size"));
        assert_eq!(resolved.package_name(), Some("javax.validation.constraints"));
    }

    #[test]
    fn test_as_list_accepts_single_value() {
        let single = AnnotationValue::Class("com.example.Draft".to_string());
        assert_eq!(single.as_list().len(), 1);

        let many = AnnotationValue::Array(vec![
            AnnotationValue::Class("a.A".to_string()),
            AnnotationValue::Class("a.B".to_string()),
        ]);
        assert_eq!(many.as_list().len(), 2);
    }

    #[test]
    fn test_declaration_from_json() {
        let json = r#"{
            "name": "age",
            "package": "com.example",
            "annotations": [
                {"type": "javax.validation.constraints.Max", "values": {"value": {"kind": "int", "value": 120}}}
            ],
            "doc_tags": ["ignore"]
        }"#;

        let decl: Declaration = serde_json::from_str(json).unwrap();
        assert_eq!(decl.name(), "age");
        assert_eq!(decl.package_name(), Some("com.example"));
        assert!(decl.has_doc_tag("ignore"));
        let max = decl.find_annotation("javax.validation.constraints.Max").unwrap();
        assert_eq!(max.value("value"), Some(&AnnotationValue::Int(120)));
    }
}
