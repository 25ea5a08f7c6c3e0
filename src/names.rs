//! Name classification utilities
//!
//! Java type names arrive as strings (annotation class values, accessor item
//! types). This module decides whether such a name denotes a declared
//! (nominal) type, and validates the XML names used for specified schema
//! types.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static JAVA_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

static NCNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}][A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\-\.0-9]*$")
        .unwrap()
});

/// Java primitive type keywords
pub const PRIMITIVE_TYPES: [&str; 9] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Check if a string is a valid Java identifier
pub fn is_valid_java_identifier(name: &str) -> bool {
    JAVA_IDENTIFIER.is_match(name)
}

/// Check if a type name is a Java primitive
pub fn is_primitive_type(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name.trim())
}

/// Check if a type name denotes an array type
pub fn is_array_type(name: &str) -> bool {
    name.trim_end().ends_with("[]")
}

/// Check if a type name denotes a declared (class, interface, enum) type
///
/// Generic arguments are ignored; `java.util.List<String>` is declared.
pub fn is_declared_type_name(name: &str) -> bool {
    let raw = erase_type_arguments(name.trim());
    if raw.is_empty() || is_primitive_type(raw) || is_array_type(raw) {
        return false;
    }

    raw.split('.').all(is_valid_java_identifier)
}

/// Validate that a type name denotes a declared type
pub fn validate_declared_type_name(name: &str) -> Result<()> {
    if is_declared_type_name(name) {
        Ok(())
    } else {
        Err(Error::Name(format!("Not a declared type: '{}'", name)))
    }
}

/// Strip generic arguments from a type name
pub fn erase_type_arguments(name: &str) -> &str {
    match name.find('<') {
        Some(idx) => name[..idx].trim_end(),
        None => name,
    }
}

/// Package portion of a qualified name
pub fn package_of(qualified_name: &str) -> Option<&str> {
    qualified_name.rsplit_once('.').map(|(pkg, _)| pkg)
}

/// Simple (unqualified) portion of a qualified name
pub fn simple_name_of(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map(|(_, simple)| simple)
        .unwrap_or(qualified_name)
}

/// Check if a string is a valid NCName (non-colonized XML name)
pub fn is_valid_ncname(name: &str) -> bool {
    NCNAME.is_match(name)
}

/// Validate an NCName and return an error if invalid
pub fn validate_ncname(name: &str) -> Result<()> {
    if is_valid_ncname(name) {
        Ok(())
    } else {
        Err(Error::Name(format!("Invalid NCName: '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_java_identifier() {
        assert!(is_valid_java_identifier("Person"));
        assert!(is_valid_java_identifier("_field"));
        assert!(is_valid_java_identifier("$proxy1"));

        assert!(!is_valid_java_identifier(""));
        assert!(!is_valid_java_identifier("1abc"));
        assert!(!is_valid_java_identifier("a-b"));
    }

    #[test]
    fn test_is_declared_type_name() {
        assert!(is_declared_type_name("java.lang.String"));
        assert!(is_declared_type_name("org.joda.time.DateTime"));
        assert!(is_declared_type_name("java.util.List<java.lang.String>"));
        assert!(is_declared_type_name("Person"));

        assert!(!is_declared_type_name("int"));
        assert!(!is_declared_type_name("byte[]"));
        assert!(!is_declared_type_name("java.lang.String[]"));
        assert!(!is_declared_type_name(""));
        assert!(!is_declared_type_name("java..String"));
    }

    #[test]
    fn test_validate_declared_type_name() {
        assert!(validate_declared_type_name("java.util.Date").is_ok());
        assert!(matches!(
            validate_declared_type_name("long"),
            Err(Error::Name(_))
        ));
    }

    #[test]
    fn test_qualified_name_parts() {
        assert_eq!(package_of("javax.validation.constraints.Max"), Some("javax.validation.constraints"));
        assert_eq!(package_of("Max"), None);
        assert_eq!(simple_name_of("javax.validation.constraints.Max"), "Max");
        assert_eq!(simple_name_of("Max"), "Max");
    }

    #[test]
    fn test_is_valid_ncname() {
        assert!(is_valid_ncname("dateTime"));
        assert!(is_valid_ncname("my-type.v2"));

        assert!(!is_valid_ncname(""));
        assert!(!is_valid_ncname("xs:string"));
        assert!(!is_valid_ncname("1type"));
    }
}
