//! Restricted XML types
//!
//! A base type narrowed by an ordered list of facets. Identity queries go to
//! the base type.

use crate::error::{Error, Result};
use crate::types::facets::Restriction;
use crate::types::XmlType;
use std::sync::Arc;

/// A base type plus a non-empty list of restrictions
#[derive(Debug, Clone, PartialEq)]
pub struct RestrictedXmlType {
    base: Arc<XmlType>,
    restrictions: Vec<Restriction>,
}

impl RestrictedXmlType {
    /// Wrap a base type; at least one restriction is required
    pub fn new(base: Arc<XmlType>, restrictions: Vec<Restriction>) -> Result<Self> {
        if restrictions.is_empty() {
            return Err(Error::Type(format!(
                "a restriction of {} needs at least one facet",
                base.qname()
            )));
        }

        Ok(Self { base, restrictions })
    }

    /// Wrap a base type with restrictions the caller has already checked
    /// to be non-empty
    pub(super) fn from_projection(base: Arc<XmlType>, restrictions: Vec<Restriction>) -> Self {
        debug_assert!(!restrictions.is_empty());
        Self { base, restrictions }
    }

    /// The type being restricted
    pub fn base(&self) -> &Arc<XmlType> {
        &self.base
    }

    /// The facets, in projection order
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }
}
