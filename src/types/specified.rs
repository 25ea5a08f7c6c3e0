//! Explicitly specified XML types
//!
//! `@XmlSchemaType(name = ..., namespace = ...)` names the schema type of an
//! accessor (or, at package level, of every accessor of a Java type).

use crate::declarations::{AnnotationMirror, AnnotationValue};
use crate::error::{AnnotationError, Result};
use crate::names;
use crate::namespaces::{QName, XSD_NAMESPACE};
use crate::types::facets::Facet;
use crate::types::known::KnownXmlType;

/// Qualified name of the `@XmlSchemaType` annotation
pub const XML_SCHEMA_TYPE: &str = "javax.xml.bind.annotation.XmlSchemaType";

/// Qualified name of the `@XmlSchemaTypes` container annotation
pub const XML_SCHEMA_TYPES: &str = "javax.xml.bind.annotation.XmlSchemaTypes";

/// Placeholder class of `@XmlSchemaType.type` meaning "not given"
pub const XML_SCHEMA_TYPE_DEFAULT: &str = "javax.xml.bind.annotation.XmlSchemaType.DEFAULT";

/// An XML type named by `@XmlSchemaType`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifiedXmlType {
    name: String,
    namespace: String,
}

impl SpecifiedXmlType {
    /// Create a specified type
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Result<Self> {
        let name = name.into();
        names::validate_ncname(&name)?;
        Ok(Self {
            name,
            namespace: namespace.into(),
        })
    }

    /// Read the type named by an `@XmlSchemaType` annotation
    pub fn from_annotation(mirror: &AnnotationMirror) -> Result<Self> {
        let name = mirror
            .value("name")
            .and_then(AnnotationValue::as_str)
            .ok_or_else(|| {
                AnnotationError::new("missing mandatory attribute")
                    .with_annotation(mirror.annotation_type.as_str())
                    .with_attribute("name")
            })?;

        let namespace = mirror
            .value("namespace")
            .and_then(AnnotationValue::as_str)
            .unwrap_or(XSD_NAMESPACE);

        Self::new(name, namespace)
    }

    /// Local name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Qualified name
    pub fn qname(&self) -> QName {
        QName::new(self.namespace.as_str(), self.name.as_str())
    }

    /// The known type with the same qualified name, if any
    pub fn known(&self) -> Option<KnownXmlType> {
        KnownXmlType::from_qname(&self.namespace, &self.name)
    }

    /// Facet applicability follows the matching known type; an unknown
    /// specified type admits no facets.
    pub fn is_facet_applicable(&self, facet: Facet) -> bool {
        self.known()
            .map(|known| known.is_facet_applicable(facet))
            .unwrap_or(false)
    }
}
