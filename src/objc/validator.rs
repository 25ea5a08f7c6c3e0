//! Objective-C binding validator

use crate::definitions::{
    Accessor, ComplexTypeDefinition, DefinitionValidator, SimpleTypeDefinition,
};
use crate::diagnostics::ValidationResult;
use tracing::trace;

/// IDREF accessors lose their object graph
pub const IDREF_WARNING: &str = "The Objective-C client code doesn't support strict IDREF object references, so only the IDs of these objects will be (de)serialized from Objective-C. This may cause confusion to Objective-C consumers.";

/// XML lists become plain strings
pub const XML_LIST_WARNING: &str = "The Objective-C client code won't serialize xml lists as an array, instead passing the list as a string that will need to be parsed. This may cause confusion to Objective-C consumers.";

/// Collections of binary data cannot be represented
pub const BINARY_COLLECTION_ERROR: &str = "The Objective-C client code doesn't support a collection of items that are binary data. You'll have to define separate accessors for each item or disable the Objective-C module.";

/// Maps need an adapter
pub const MAP_ERROR: &str = "The Objective-C client doesn't have a built-in way of serializing a Map. So you're going to have to use @XmlJavaTypeAdapter to supply your own adapter for the Map, or disable the Objective-C module.";

/// Flags type definitions the Objective-C client code cannot faithfully
/// (de)serialize
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjCValidator;

impl ObjCValidator {
    /// Create the validator
    pub fn new() -> Self {
        Self
    }

    /// Checks shared by value and attribute accessors
    fn check_value_or_attribute(&self, owner: &str, accessor: &Accessor, result: &mut ValidationResult) {
        let subject = subject(owner, accessor);

        if accessor.xml_idref {
            result.add_warning(subject.as_str(), IDREF_WARNING);
        }

        if accessor.xml_list {
            result.add_warning(subject.as_str(), XML_LIST_WARNING);
        }

        if accessor.collection && accessor.binary_data {
            result.add_error(subject, BINARY_COLLECTION_ERROR);
        }
    }

    fn check_element(&self, owner: &str, element: &Accessor, result: &mut ValidationResult) {
        let subject = subject(owner, element);

        if element.xml_idref {
            result.add_warning(subject.as_str(), IDREF_WARNING);
        }

        if element.xml_list {
            result.add_warning(subject.as_str(), XML_LIST_WARNING);
        }

        if element.map_type && !element.adapted {
            result.add_error(subject, MAP_ERROR);
        }
    }
}

fn subject(owner: &str, accessor: &Accessor) -> String {
    format!("{}.{}", owner, accessor.name)
}

impl DefinitionValidator for ObjCValidator {
    fn validate_simple_type(&self, simple_type: &SimpleTypeDefinition) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(ref value) = simple_type.value {
            if value.xml_idref {
                result.add_warning(subject(&simple_type.name, value), IDREF_WARNING);
            }
        }

        result
    }

    fn validate_complex_type(&self, complex_type: &ComplexTypeDefinition) -> ValidationResult {
        trace!(type_name = complex_type.name.as_str(), "checking Objective-C compatibility");
        let mut result = ValidationResult::new();

        for attribute in &complex_type.attributes {
            self.check_value_or_attribute(&complex_type.name, attribute, &mut result);
        }

        if let Some(ref value) = complex_type.value {
            self.check_value_or_attribute(&complex_type.name, value, &mut result);
        }

        for element in &complex_type.elements {
            self.check_element(&complex_type.name, element, &mut result);
        }

        result
    }
}
