//! Known XML types
//!
//! The built-in XML Schema types (plus `swaRef`) that Java types map onto,
//! each with the fixed set of facets it admits.

use crate::namespaces::{QName, WSI_NAMESPACE, XSD_NAMESPACE};
use crate::types::facets::{
    Facet, BOOLEAN_FACETS, DECIMAL_FACETS, LENGTH_FACETS, NO_FACETS, ORDERED_FACETS,
};
use std::collections::HashSet;
use std::fmt;

/// A built-in XML type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownXmlType {
    /// `string`
    String,
    /// `normalizedString`
    NormalizedString,
    /// `token`
    Token,
    /// `base64Binary`
    Base64Binary,
    /// `hexBinary`
    HexBinary,
    /// `integer`
    Integer,
    /// `positiveInteger`
    PositiveInteger,
    /// `negativeInteger`
    NegativeInteger,
    /// `nonPositiveInteger`
    NonPositiveInteger,
    /// `nonNegativeInteger`
    NonNegativeInteger,
    /// `long`
    Long,
    /// `unsignedLong`
    UnsignedLong,
    /// `int`
    Int,
    /// `unsignedInt`
    UnsignedInt,
    /// `short`
    Short,
    /// `unsignedShort`
    UnsignedShort,
    /// `byte`
    Byte,
    /// `unsignedByte`
    UnsignedByte,
    /// `decimal`
    Decimal,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `boolean`
    Boolean,
    /// `duration`
    Duration,
    /// `dateTime`
    DateTime,
    /// `date`
    Date,
    /// `time`
    Time,
    /// `gYear`
    GYear,
    /// `gYearMonth`
    GYearMonth,
    /// `gMonth`
    GMonth,
    /// `gMonthDay`
    GMonthDay,
    /// `gDay`
    GDay,
    /// `Name`
    Name,
    /// `QName`
    QName,
    /// `NCName`
    NCName,
    /// `anyURI`
    AnyUri,
    /// `anySimpleType`
    AnySimpleType,
    /// `anyType`
    AnyType,
    /// `language`
    Language,
    /// `ID`
    Id,
    /// `IDREF`
    IdRef,
    /// `IDREFS`
    IdRefs,
    /// `ENTITY`
    Entity,
    /// `ENTITIES`
    Entities,
    /// `NOTATION`
    Notation,
    /// `NMTOKEN`
    NmToken,
    /// `NMTOKENS`
    NmTokens,
    /// `swaRef`
    SwaRef,
}

impl KnownXmlType {
    /// All known types
    pub const ALL: [KnownXmlType; 47] = [
        KnownXmlType::String,
        KnownXmlType::NormalizedString,
        KnownXmlType::Token,
        KnownXmlType::Base64Binary,
        KnownXmlType::HexBinary,
        KnownXmlType::Integer,
        KnownXmlType::PositiveInteger,
        KnownXmlType::NegativeInteger,
        KnownXmlType::NonPositiveInteger,
        KnownXmlType::NonNegativeInteger,
        KnownXmlType::Long,
        KnownXmlType::UnsignedLong,
        KnownXmlType::Int,
        KnownXmlType::UnsignedInt,
        KnownXmlType::Short,
        KnownXmlType::UnsignedShort,
        KnownXmlType::Byte,
        KnownXmlType::UnsignedByte,
        KnownXmlType::Decimal,
        KnownXmlType::Float,
        KnownXmlType::Double,
        KnownXmlType::Boolean,
        KnownXmlType::Duration,
        KnownXmlType::DateTime,
        KnownXmlType::Date,
        KnownXmlType::Time,
        KnownXmlType::GYear,
        KnownXmlType::GYearMonth,
        KnownXmlType::GMonth,
        KnownXmlType::GMonthDay,
        KnownXmlType::GDay,
        KnownXmlType::Name,
        KnownXmlType::QName,
        KnownXmlType::NCName,
        KnownXmlType::AnyUri,
        KnownXmlType::AnySimpleType,
        KnownXmlType::AnyType,
        KnownXmlType::Language,
        KnownXmlType::Id,
        KnownXmlType::IdRef,
        KnownXmlType::IdRefs,
        KnownXmlType::Entity,
        KnownXmlType::Entities,
        KnownXmlType::Notation,
        KnownXmlType::NmToken,
        KnownXmlType::NmTokens,
        KnownXmlType::SwaRef,
    ];

    /// Local name of the type
    pub fn name(&self) -> &'static str {
        match self {
            KnownXmlType::String => "string",
            KnownXmlType::NormalizedString => "normalizedString",
            KnownXmlType::Token => "token",
            KnownXmlType::Base64Binary => "base64Binary",
            KnownXmlType::HexBinary => "hexBinary",
            KnownXmlType::Integer => "integer",
            KnownXmlType::PositiveInteger => "positiveInteger",
            KnownXmlType::NegativeInteger => "negativeInteger",
            KnownXmlType::NonPositiveInteger => "nonPositiveInteger",
            KnownXmlType::NonNegativeInteger => "nonNegativeInteger",
            KnownXmlType::Long => "long",
            KnownXmlType::UnsignedLong => "unsignedLong",
            KnownXmlType::Int => "int",
            KnownXmlType::UnsignedInt => "unsignedInt",
            KnownXmlType::Short => "short",
            KnownXmlType::UnsignedShort => "unsignedShort",
            KnownXmlType::Byte => "byte",
            KnownXmlType::UnsignedByte => "unsignedByte",
            KnownXmlType::Decimal => "decimal",
            KnownXmlType::Float => "float",
            KnownXmlType::Double => "double",
            KnownXmlType::Boolean => "boolean",
            KnownXmlType::Duration => "duration",
            KnownXmlType::DateTime => "dateTime",
            KnownXmlType::Date => "date",
            KnownXmlType::Time => "time",
            KnownXmlType::GYear => "gYear",
            KnownXmlType::GYearMonth => "gYearMonth",
            KnownXmlType::GMonth => "gMonth",
            KnownXmlType::GMonthDay => "gMonthDay",
            KnownXmlType::GDay => "gDay",
            KnownXmlType::Name => "Name",
            KnownXmlType::QName => "QName",
            KnownXmlType::NCName => "NCName",
            KnownXmlType::AnyUri => "anyURI",
            KnownXmlType::AnySimpleType => "anySimpleType",
            KnownXmlType::AnyType => "anyType",
            KnownXmlType::Language => "language",
            KnownXmlType::Id => "ID",
            KnownXmlType::IdRef => "IDREF",
            KnownXmlType::IdRefs => "IDREFS",
            KnownXmlType::Entity => "ENTITY",
            KnownXmlType::Entities => "ENTITIES",
            KnownXmlType::Notation => "NOTATION",
            KnownXmlType::NmToken => "NMTOKEN",
            KnownXmlType::NmTokens => "NMTOKENS",
            KnownXmlType::SwaRef => "swaRef",
        }
    }

    /// Namespace of the type
    pub fn namespace(&self) -> &'static str {
        match self {
            KnownXmlType::SwaRef => WSI_NAMESPACE,
            _ => XSD_NAMESPACE,
        }
    }

    /// Qualified name of the type
    pub fn qname(&self) -> QName {
        QName::new(self.namespace(), self.name())
    }

    /// Known types are never anonymous
    pub fn is_anonymous(&self) -> bool {
        false
    }

    /// Every known type but `anyType` is simple
    pub fn is_simple(&self) -> bool {
        *self != KnownXmlType::AnyType
    }

    /// Known types are never restricted
    pub fn is_restricted(&self) -> bool {
        false
    }

    /// Facets admitted by the type
    pub fn facets(&self) -> &'static HashSet<Facet> {
        match self {
            KnownXmlType::String
            | KnownXmlType::NormalizedString
            | KnownXmlType::Token
            | KnownXmlType::Base64Binary
            | KnownXmlType::HexBinary
            | KnownXmlType::Name
            | KnownXmlType::QName
            | KnownXmlType::NCName
            | KnownXmlType::AnyUri
            | KnownXmlType::Language
            | KnownXmlType::Id
            | KnownXmlType::IdRef
            | KnownXmlType::IdRefs
            | KnownXmlType::Entity
            | KnownXmlType::Entities
            | KnownXmlType::Notation
            | KnownXmlType::NmToken
            | KnownXmlType::NmTokens => &*LENGTH_FACETS,
            KnownXmlType::Integer
            | KnownXmlType::PositiveInteger
            | KnownXmlType::NegativeInteger
            | KnownXmlType::NonPositiveInteger
            | KnownXmlType::NonNegativeInteger
            | KnownXmlType::Long
            | KnownXmlType::UnsignedLong
            | KnownXmlType::Int
            | KnownXmlType::UnsignedInt
            | KnownXmlType::Short
            | KnownXmlType::UnsignedShort
            | KnownXmlType::Byte
            | KnownXmlType::UnsignedByte
            | KnownXmlType::Decimal => &*DECIMAL_FACETS,
            KnownXmlType::Float
            | KnownXmlType::Double
            | KnownXmlType::Duration
            | KnownXmlType::DateTime
            | KnownXmlType::Date
            | KnownXmlType::Time
            | KnownXmlType::GYear
            | KnownXmlType::GYearMonth
            | KnownXmlType::GMonth
            | KnownXmlType::GMonthDay
            | KnownXmlType::GDay => &*ORDERED_FACETS,
            KnownXmlType::Boolean => &*BOOLEAN_FACETS,
            KnownXmlType::AnySimpleType
            | KnownXmlType::AnyType
            | KnownXmlType::SwaRef => &*NO_FACETS,
        }
    }

    /// Whether a facet applies to the type
    pub fn is_facet_applicable(&self, facet: Facet) -> bool {
        self.facets().contains(&facet)
    }

    /// Whether the type is `xs:string` or derived from it by whitespace or
    /// lexical restriction (token, Name, NCName, ID, ...)
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            KnownXmlType::String
                | KnownXmlType::NormalizedString
                | KnownXmlType::Token
                | KnownXmlType::Language
                | KnownXmlType::Name
                | KnownXmlType::NCName
                | KnownXmlType::Id
                | KnownXmlType::IdRef
                | KnownXmlType::Entity
                | KnownXmlType::NmToken
        )
    }

    /// Look up a known type by qualified name
    pub fn from_qname(namespace: &str, local_name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.namespace() == namespace && t.name() == local_name)
    }

    /// Look up a known type by local name, or by `xs:`-style prefixed name
    pub fn from_name(name: &str) -> Option<Self> {
        let local = name.rsplit_once(':').map(|(_, local)| local).unwrap_or(name);
        Self::ALL.iter().copied().find(|t| t.name() == local)
    }
}

impl fmt::Display for KnownXmlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qname())
    }
}
