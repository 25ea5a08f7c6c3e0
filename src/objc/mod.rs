//! Objective-C client binding
//!
//! Only the compatibility checks live here; code generation is done
//! elsewhere.

pub mod validator;

pub use validator::{
    ObjCValidator, BINARY_COLLECTION_ERROR, IDREF_WARNING, MAP_ERROR, XML_LIST_WARNING,
};
