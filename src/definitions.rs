//! Type definitions as seen by client binding validators
//!
//! A light descriptor of the schema type definitions a binding generator
//! consumes: simple and complex types, their accessors, and nested
//! anonymous definitions. [`DefinitionValidator`] walks the tree.

use crate::diagnostics::ValidationResult;
use serde::{Deserialize, Serialize};

/// A field or property serialized under a binding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accessor {
    /// Accessor name
    pub name: String,
    /// `@XmlIDREF`: only the referenced object's id is serialized
    pub xml_idref: bool,
    /// `@XmlList`: serialized as a whitespace-delimited list
    pub xml_list: bool,
    /// Accessor type is a collection or array
    pub collection: bool,
    /// Accessor type is binary data
    pub binary_data: bool,
    /// Accessor type is a map
    pub map_type: bool,
    /// Accessor has a custom adapter attached
    pub adapted: bool,
}

impl Accessor {
    /// Create a plain accessor
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the IDREF flag
    pub fn with_xml_idref(mut self, idref: bool) -> Self {
        self.xml_idref = idref;
        self
    }

    /// Set the list flag
    pub fn with_xml_list(mut self, list: bool) -> Self {
        self.xml_list = list;
        self
    }

    /// Set the collection flag
    pub fn with_collection(mut self, collection: bool) -> Self {
        self.collection = collection;
        self
    }

    /// Set the binary data flag
    pub fn with_binary_data(mut self, binary: bool) -> Self {
        self.binary_data = binary;
        self
    }

    /// Set the map flag
    pub fn with_map_type(mut self, map: bool) -> Self {
        self.map_type = map;
        self
    }

    /// Set the adapted flag
    pub fn with_adapted(mut self, adapted: bool) -> Self {
        self.adapted = adapted;
        self
    }
}

/// A simple type definition, optionally backed by a value accessor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTypeDefinition {
    /// Type name
    pub name: String,
    /// The `@XmlValue` accessor
    #[serde(default)]
    pub value: Option<Accessor>,
}

/// A complex type definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexTypeDefinition {
    /// Type name
    pub name: String,
    /// The `@XmlValue` accessor
    #[serde(default)]
    pub value: Option<Accessor>,
    /// Attribute accessors
    #[serde(default)]
    pub attributes: Vec<Accessor>,
    /// Element accessors
    #[serde(default)]
    pub elements: Vec<Accessor>,
    /// Nested (anonymous) type definitions
    #[serde(default)]
    pub nested_types: Vec<TypeDefinition>,
}

impl ComplexTypeDefinition {
    /// Create an empty complex type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the value accessor
    pub fn with_value(mut self, value: Accessor) -> Self {
        self.value = Some(value);
        self
    }

    /// Add an attribute accessor
    pub fn with_attribute(mut self, attribute: Accessor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add an element accessor
    pub fn with_element(mut self, element: Accessor) -> Self {
        self.elements.push(element);
        self
    }

    /// Add a nested type definition
    pub fn with_nested(mut self, nested: TypeDefinition) -> Self {
        self.nested_types.push(nested);
        self
    }
}

/// A schema type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDefinition {
    /// Simple type
    Simple(SimpleTypeDefinition),
    /// Complex type
    Complex(ComplexTypeDefinition),
}

impl TypeDefinition {
    /// Type name
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Simple(simple) => &simple.name,
            TypeDefinition::Complex(complex) => &complex.name,
        }
    }
}

/// Checks type definitions against what a binding supports
///
/// Implementors override the per-kind hooks; [`validate`](Self::validate)
/// dispatches and descends into nested definitions.
pub trait DefinitionValidator {
    /// Check a simple type
    fn validate_simple_type(&self, _simple_type: &SimpleTypeDefinition) -> ValidationResult {
        ValidationResult::new()
    }

    /// Check a complex type (nested definitions are handled by `validate`)
    fn validate_complex_type(&self, _complex_type: &ComplexTypeDefinition) -> ValidationResult {
        ValidationResult::new()
    }

    /// Check a definition and everything nested in it
    fn validate(&self, definition: &TypeDefinition) -> ValidationResult {
        match definition {
            TypeDefinition::Simple(simple) => self.validate_simple_type(simple),
            TypeDefinition::Complex(complex) => {
                let mut result = self.validate_complex_type(complex);
                for nested in &complex.nested_types {
                    result.aggregate(self.validate(nested));
                }
                result
            }
        }
    }

    /// Check a list of definitions
    fn validate_all(&self, definitions: &[TypeDefinition]) -> ValidationResult {
        let mut result = ValidationResult::new();
        for definition in definitions {
            result.aggregate(self.validate(definition));
        }
        result
    }
}
