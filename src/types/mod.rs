//! XML type model
//!
//! [`XmlType`] is one of a known built-in type, a type named by
//! `@XmlSchemaType`, or a restriction of another type. Types are immutable
//! and shared through `Arc`.

pub mod facets;
pub mod factory;
pub mod known;
pub mod restricted;
pub mod specified;

pub use facets::{Facet, Restriction};
pub use factory::{
    decorate_with_restrictions, find_explicit_schema_type, inapplicable_restrictions,
    load_package_explicit_types, project_restrictions, restrict, ExplicitTypes, PackageTypeCache,
};
pub use known::KnownXmlType;
pub use restricted::RestrictedXmlType;
pub use specified::SpecifiedXmlType;

use crate::namespaces::QName;

/// A semantic XML type
#[derive(Debug, Clone, PartialEq)]
pub enum XmlType {
    /// Built-in type
    Known(KnownXmlType),
    /// Type named by `@XmlSchemaType`
    Specified(SpecifiedXmlType),
    /// Restriction of another type
    Restricted(RestrictedXmlType),
}

impl XmlType {
    /// Local name
    pub fn name(&self) -> &str {
        match self {
            XmlType::Known(known) => known.name(),
            XmlType::Specified(specified) => specified.name(),
            XmlType::Restricted(restricted) => restricted.base().name(),
        }
    }

    /// Namespace
    pub fn namespace(&self) -> &str {
        match self {
            XmlType::Known(known) => known.namespace(),
            XmlType::Specified(specified) => specified.namespace(),
            XmlType::Restricted(restricted) => restricted.base().namespace(),
        }
    }

    /// Qualified name
    pub fn qname(&self) -> QName {
        QName::new(self.namespace(), self.name())
    }

    /// Whether the type definition is anonymous
    pub fn is_anonymous(&self) -> bool {
        match self {
            XmlType::Known(known) => known.is_anonymous(),
            XmlType::Specified(_) => false,
            XmlType::Restricted(restricted) => restricted.base().is_anonymous(),
        }
    }

    /// Whether this is a simple type
    pub fn is_simple(&self) -> bool {
        match self {
            XmlType::Known(known) => known.is_simple(),
            XmlType::Specified(_) => true,
            XmlType::Restricted(restricted) => restricted.base().is_simple(),
        }
    }

    /// Whether this type carries restrictions
    pub fn is_restricted(&self) -> bool {
        matches!(self, XmlType::Restricted(_))
    }

    /// Whether a facet applies to this type
    pub fn is_facet_applicable(&self, facet: Facet) -> bool {
        match self {
            XmlType::Known(known) => known.is_facet_applicable(facet),
            XmlType::Specified(specified) => specified.is_facet_applicable(facet),
            XmlType::Restricted(restricted) => restricted.base().is_facet_applicable(facet),
        }
    }

    /// The known type, if this is one (restrictions are not unwrapped)
    pub fn as_known(&self) -> Option<KnownXmlType> {
        match self {
            XmlType::Known(known) => Some(*known),
            _ => None,
        }
    }

    /// Restrictions directly on this type
    pub fn restrictions(&self) -> &[Restriction] {
        match self {
            XmlType::Restricted(restricted) => restricted.restrictions(),
            _ => &[],
        }
    }

    /// Restrictions along the whole base chain, innermost first
    pub fn all_restrictions(&self) -> Vec<&Restriction> {
        match self {
            XmlType::Restricted(restricted) => {
                let mut all = restricted.base().all_restrictions();
                all.extend(restricted.restrictions());
                all
            }
            _ => Vec::new(),
        }
    }
}

impl From<KnownXmlType> for XmlType {
    fn from(known: KnownXmlType) -> Self {
        XmlType::Known(known)
    }
}

impl From<SpecifiedXmlType> for XmlType {
    fn from(specified: SpecifiedXmlType) -> Self {
        XmlType::Specified(specified)
    }
}
