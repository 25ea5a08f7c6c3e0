//! XML namespace handling
//!
//! Qualified names identify XML types; the well-known namespaces below are
//! the ones the known type table draws from.

use std::fmt;

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// WS-I attachment profile namespace (home of `swaRef`)
pub const WSI_NAMESPACE: &str = "http://ws-i.org/profiles/basic/1.1/xsd";

/// Qualified name (QName) - combination of namespace and local name
///
/// An empty namespace means "no namespace".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    /// Namespace URI
    pub namespace: String,
    /// Local name
    pub local_name: String,
}

impl QName {
    /// Create a new QName
    pub fn new(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Create a QName in the XML Schema namespace
    pub fn xsd(local_name: impl Into<String>) -> Self {
        Self::new(XSD_NAMESPACE, local_name)
    }

    /// Whether the name has no namespace
    pub fn is_unqualified(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Render with the conventional prefix of its namespace, if there is one
    pub fn prefixed(&self) -> Option<String> {
        default_prefix(&self.namespace).map(|prefix| format!("{}:{}", prefix, self.local_name))
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unqualified() {
            write!(f, "{}", self.local_name)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local_name)
        }
    }
}

/// Conventional prefix for a well-known namespace
pub fn default_prefix(namespace: &str) -> Option<&'static str> {
    match namespace {
        XSD_NAMESPACE => Some("xs"),
        WSI_NAMESPACE => Some("swa"),
        _ => None,
    }
}
