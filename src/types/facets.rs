//! XML Schema constraining facets
//!
//! The fixed facet vocabulary, the facet sets admitted by the known types,
//! and [`Restriction`], a single facet instance.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A constraining facet of an XML Schema simple type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    /// `length`
    Length,
    /// `minLength`
    MinLength,
    /// `maxLength`
    MaxLength,
    /// `pattern`
    Pattern,
    /// `enumeration`
    Enumeration,
    /// `whiteSpace`
    WhiteSpace,
    /// `totalDigits`
    TotalDigits,
    /// `fractionDigits`
    FractionDigits,
    /// `maxInclusive`
    MaxInclusive,
    /// `maxExclusive`
    MaxExclusive,
    /// `minInclusive`
    MinInclusive,
    /// `minExclusive`
    MinExclusive,
}

impl Facet {
    /// All facets of the vocabulary
    pub const ALL: [Facet; 12] = [
        Facet::Length,
        Facet::MinLength,
        Facet::MaxLength,
        Facet::Pattern,
        Facet::Enumeration,
        Facet::WhiteSpace,
        Facet::TotalDigits,
        Facet::FractionDigits,
        Facet::MaxInclusive,
        Facet::MaxExclusive,
        Facet::MinInclusive,
        Facet::MinExclusive,
    ];

    /// Facet name as used in schema documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Length => "length",
            Facet::MinLength => "minLength",
            Facet::MaxLength => "maxLength",
            Facet::Pattern => "pattern",
            Facet::Enumeration => "enumeration",
            Facet::WhiteSpace => "whiteSpace",
            Facet::TotalDigits => "totalDigits",
            Facet::FractionDigits => "fractionDigits",
            Facet::MaxInclusive => "maxInclusive",
            Facet::MaxExclusive => "maxExclusive",
            Facet::MinInclusive => "minInclusive",
            Facet::MinExclusive => "minExclusive",
        }
    }

    /// Parse a facet name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|facet| facet.as_str() == name)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Admitted Facets Sets
// =============================================================================

lazy_static::lazy_static! {
    /// Facets admitted by string, binary and name types
    pub static ref LENGTH_FACETS: HashSet<Facet> = [
        Facet::Length,
        Facet::MinLength,
        Facet::MaxLength,
        Facet::Pattern,
        Facet::Enumeration,
        Facet::WhiteSpace,
    ]
    .into_iter()
    .collect();

    /// Facets admitted by decimal and integer types
    pub static ref DECIMAL_FACETS: HashSet<Facet> = [
        Facet::TotalDigits,
        Facet::FractionDigits,
        Facet::Pattern,
        Facet::Enumeration,
        Facet::WhiteSpace,
        Facet::MaxInclusive,
        Facet::MaxExclusive,
        Facet::MinInclusive,
        Facet::MinExclusive,
    ]
    .into_iter()
    .collect();

    /// Facets admitted by float, double, duration and date/time types
    pub static ref ORDERED_FACETS: HashSet<Facet> = [
        Facet::Pattern,
        Facet::Enumeration,
        Facet::WhiteSpace,
        Facet::MaxInclusive,
        Facet::MaxExclusive,
        Facet::MinInclusive,
        Facet::MinExclusive,
    ]
    .into_iter()
    .collect();

    /// Facets admitted by boolean
    pub static ref BOOLEAN_FACETS: HashSet<Facet> = [Facet::Pattern].into_iter().collect();

    /// No facets (anyType, anySimpleType, swaRef)
    pub static ref NO_FACETS: HashSet<Facet> = HashSet::new();
}

/// A single facet applied to a base type
///
/// Applicability to the base type is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// The facet
    pub facet: Facet,
    /// Literal facet value
    pub value: String,
}

impl Restriction {
    /// Create a restriction
    pub fn new(facet: Facet, value: impl Into<String>) -> Self {
        Self {
            facet,
            value: value.into(),
        }
    }

    /// Facet name
    pub fn name(&self) -> &'static str {
        self.facet.as_str()
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.facet, self.value)
    }
}
