//! Bean Validation support
//!
//! Extracts `javax.validation.constraints` annotations from declarations
//! into an ordered constraint list, honoring ignored validation groups.

pub mod constraints;
pub mod extractor;
pub mod groups;

pub use constraints::{Constraint, ConstraintKind, CONSTRAINTS_PACKAGE};
pub use extractor::{
    collect_constraints, describe_constraints, has_constraints, is_required,
    META_ANNOTATION_DEPTH,
};
pub use groups::{validation_groups, GroupFilter};
