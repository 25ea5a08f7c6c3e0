//! Ignore markers
//!
//! A declaration is left out of generated artifacts when its doc comment
//! carries an `@ignore` tag or it is annotated with the Enunciate `Ignore`
//! annotation.

use crate::declarations::AnnotatedDeclaration;

/// Qualified name of the ignore annotation
pub const IGNORE_ANNOTATION: &str = "com.webcohesion.enunciate.metadata.Ignore";

/// Doc-comment block tag marking a declaration as ignored
pub const IGNORE_TAG: &str = "ignore";

/// Whether a declaration is marked as ignored
pub fn is_ignored<D>(decl: &D) -> bool
where
    D: AnnotatedDeclaration + ?Sized,
{
    decl.has_doc_tag(IGNORE_TAG) || decl.find_annotation(IGNORE_ANNOTATION).is_some()
}
