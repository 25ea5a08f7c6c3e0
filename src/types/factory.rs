//! XML type factory
//!
//! Projects constraints onto restriction facets, decorates base types with
//! them, and resolves types named explicitly through `@XmlSchemaType`.

use crate::declarations::{AnnotatedDeclaration, AnnotationValue};
use crate::error::{Error, Result};
use crate::names;
use crate::settings::{LengthBoundPolicy, Settings};
use crate::types::facets::{Facet, Restriction};
use crate::types::restricted::RestrictedXmlType;
use crate::types::specified::{
    SpecifiedXmlType, XML_SCHEMA_TYPE, XML_SCHEMA_TYPES, XML_SCHEMA_TYPE_DEFAULT,
};
use crate::types::XmlType;
use crate::validation::{collect_constraints, Constraint};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

// =============================================================================
// Facet projection
// =============================================================================

/// Map constraints onto restriction facets of a base type
///
/// The facets emitted are not checked against what the base type admits;
/// see [`inapplicable_restrictions`].
pub fn project_restrictions(
    base: &XmlType,
    constraints: &[Constraint],
    policy: LengthBoundPolicy,
) -> Vec<Restriction> {
    let length_bounds = policy.uses_length_facets(base);
    let mut restrictions = Vec::with_capacity(constraints.len());

    for constraint in constraints {
        match constraint {
            Constraint::False => restrictions.push(Restriction::new(Facet::Pattern, "false")),
            Constraint::True => restrictions.push(Restriction::new(Facet::Pattern, "true")),
            Constraint::DecimalMax { value, inclusive } => {
                let facet = if *inclusive {
                    Facet::MaxInclusive
                } else {
                    Facet::MaxExclusive
                };
                restrictions.push(Restriction::new(facet, value.as_str()));
            }
            Constraint::DecimalMin { value, inclusive } => {
                let facet = if *inclusive {
                    Facet::MinInclusive
                } else {
                    Facet::MinExclusive
                };
                restrictions.push(Restriction::new(facet, value.as_str()));
            }
            Constraint::Digits { integer, fraction } => {
                let total = i64::from(*integer) + i64::from(*fraction);
                restrictions.push(Restriction::new(Facet::TotalDigits, total.to_string()));
                restrictions.push(Restriction::new(Facet::FractionDigits, fraction.to_string()));
            }
            Constraint::Max { value } => {
                let facet = if length_bounds {
                    Facet::MaxLength
                } else {
                    Facet::MaxInclusive
                };
                restrictions.push(Restriction::new(facet, value.to_string()));
            }
            Constraint::Min { value } => {
                let facet = if length_bounds {
                    Facet::MinLength
                } else {
                    Facet::MinInclusive
                };
                restrictions.push(Restriction::new(facet, value.to_string()));
            }
            Constraint::Regexp { pattern } => {
                restrictions.push(Restriction::new(Facet::Pattern, pattern.as_str()));
            }
            Constraint::Size { max, min } => {
                restrictions.push(Restriction::new(Facet::MaxLength, max.to_string()));
                if *min > 0 {
                    restrictions.push(Restriction::new(Facet::MinLength, min.to_string()));
                }
            }
            // presence and temporal constraints have no facet
            Constraint::Null | Constraint::NotNull | Constraint::Future | Constraint::Past => {}
        }
    }

    restrictions
}

/// Restrict a base type by a constraint list
///
/// Returns the base itself (same `Arc`) when no facet results.
pub fn restrict(
    base: Arc<XmlType>,
    constraints: &[Constraint],
    policy: LengthBoundPolicy,
) -> Arc<XmlType> {
    let restrictions = project_restrictions(&base, constraints, policy);
    if restrictions.is_empty() {
        return base;
    }

    Arc::new(XmlType::Restricted(RestrictedXmlType::from_projection(
        base,
        restrictions,
    )))
}

/// Restrict a base type by the constraints of an accessor
pub fn decorate_with_restrictions<D>(
    base: Arc<XmlType>,
    accessor: &D,
    settings: &Settings,
) -> Result<Arc<XmlType>>
where
    D: AnnotatedDeclaration + ?Sized,
{
    let constraints = collect_constraints(accessor, &settings.group_filter())?;
    let decorated = restrict(base, &constraints, settings.length_bound_policy);

    if settings.report_inapplicable_facets {
        for restriction in inapplicable_restrictions(&decorated) {
            debug!(
                accessor = accessor.name(),
                facet = %restriction.facet,
                base = %decorated.qname(),
                "facet not admitted by base type"
            );
        }
    }

    Ok(decorated)
}

/// Restrictions on a type whose facet the base type does not admit
pub fn inapplicable_restrictions(xml_type: &XmlType) -> Vec<&Restriction> {
    xml_type
        .restrictions()
        .iter()
        .filter(|restriction| !xml_type.is_facet_applicable(restriction.facet))
        .collect()
}

// =============================================================================
// Explicit schema types
// =============================================================================

/// Specified types of a package, keyed by qualified Java type name
pub type ExplicitTypes = HashMap<String, SpecifiedXmlType>;

/// Read the `@XmlSchemaType` overrides declared on a package
///
/// Both a lone `@XmlSchemaType` and the entries of `@XmlSchemaTypes` count.
pub fn load_package_explicit_types<P>(package: &P) -> Result<ExplicitTypes>
where
    P: AnnotatedDeclaration + ?Sized,
{
    let mut specified = Vec::new();

    if let Some(single) = package.find_annotation(XML_SCHEMA_TYPE) {
        specified.push(single);
    }

    if let Some(container) = package.find_annotation(XML_SCHEMA_TYPES) {
        if let Some(entries) = container.value("value") {
            specified.extend(
                entries
                    .as_list()
                    .into_iter()
                    .filter_map(AnnotationValue::as_annotation),
            );
        }
    }

    let mut explicit_types = ExplicitTypes::new();
    for mirror in specified {
        let type_name = mirror
            .value("type")
            .and_then(AnnotationValue::as_class)
            .filter(|name| *name != XML_SCHEMA_TYPE_DEFAULT)
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "{}: a type must be specified in {} at the package-level.",
                    package.name(),
                    XML_SCHEMA_TYPE
                ))
            })?;

        if !names::is_declared_type_name(type_name) {
            return Err(Error::Configuration(format!(
                "{}: only a declared type can be adapted.  Offending type: {}",
                package.name(),
                type_name
            )));
        }

        let erased = names::erase_type_arguments(type_name).to_string();
        explicit_types.insert(erased, SpecifiedXmlType::from_annotation(mirror)?);
    }

    Ok(explicit_types)
}

/// Per-run cache of package-level explicit types
///
/// Each package is loaded at most once per successful access; a racing
/// duplicate load computes the same value and is discarded.
#[derive(Debug, Default)]
pub struct PackageTypeCache {
    entries: RwLock<HashMap<String, Arc<ExplicitTypes>>>,
}

impl PackageTypeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit types of a package, loading them on first access
    pub fn get_or_load<P>(&self, package: &P) -> Result<Arc<ExplicitTypes>>
    where
        P: AnnotatedDeclaration + ?Sized,
    {
        let key = package.name();

        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            if let Some(types) = entries.get(key) {
                trace!(package = key, "explicit types cache hit");
                return Ok(types.clone());
            }
        }

        let loaded = Arc::new(load_package_explicit_types(package)?);
        debug!(package = key, count = loaded.len(), "loaded package explicit types");

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        Ok(entries.entry(key.to_string()).or_insert(loaded).clone())
    }

    /// Number of cached packages
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no package has been cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find the XML type explicitly specified for an accessor
///
/// An `@XmlSchemaType` on the accessor wins. Otherwise, when the accessor's
/// (collection item) type is a declared type, the package-level overrides of
/// the accessor's package are consulted.
pub fn find_explicit_schema_type<A, P>(
    accessor: &A,
    item_type: Option<&str>,
    package: &P,
    cache: &PackageTypeCache,
) -> Result<Option<XmlType>>
where
    A: AnnotatedDeclaration + ?Sized,
    P: AnnotatedDeclaration + ?Sized,
{
    if let Some(mirror) = accessor.find_annotation(XML_SCHEMA_TYPE) {
        return SpecifiedXmlType::from_annotation(mirror).map(|t| Some(t.into()));
    }

    let Some(item_type) = item_type.filter(|name| names::is_declared_type_name(name)) else {
        return Ok(None);
    };

    let explicit_types = cache.get_or_load(package)?;
    Ok(explicit_types
        .get(names::erase_type_arguments(item_type))
        .cloned()
        .map(XmlType::from))
}
