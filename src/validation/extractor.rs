//! Constraint extraction
//!
//! Walks the annotations of a declaration and classifies the active Bean
//! Validation annotations into [`Constraint`]s. Nothing is cached: every
//! call re-reads the declaration.

use crate::declarations::{AnnotatedDeclaration, AnnotationMirror, AnnotationValue};
use crate::error::{AnnotationError, Result};
use crate::validation::constraints::{Constraint, ConstraintKind, CONSTRAINTS_PACKAGE};
use crate::validation::groups::GroupFilter;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Lexical form of a `BigDecimal` literal: sign, digits with an optional
/// fraction, optional exponent. No magnitude or precision limit.
static DECIMAL_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap());

/// How many annotation-type hops below the declaration `@NotNull` is looked
/// for, beyond the annotation types applied directly.
pub const META_ANNOTATION_DEPTH: usize = 1;

/// `@Size.max` when not given
pub const DEFAULT_SIZE_MAX: i32 = i32::MAX;

/// `@Size.min` when not given
pub const DEFAULT_SIZE_MIN: i32 = 0;

/// Collect the active constraints of a declaration, in priority order
///
/// An active `@Null` excludes every other constraint.
pub fn collect_constraints<D>(decl: &D, groups: &GroupFilter) -> Result<Vec<Constraint>>
where
    D: AnnotatedDeclaration + ?Sized,
{
    let mut constraints = Vec::new();

    for kind in ConstraintKind::ALL {
        let Some(mirror) = active_annotation(decl, kind, groups) else {
            continue;
        };

        if kind == ConstraintKind::Null {
            debug!(declaration = decl.name(), "@Null supersedes all other constraints");
            return Ok(vec![Constraint::Null]);
        }

        constraints.push(read_constraint(decl, kind, mirror)?);
    }

    Ok(constraints)
}

/// Whether a declaration is required (`@NotNull`)
///
/// `@NotNull` counts when applied to the declaration or to the annotation
/// types reachable through its annotations, down to
/// [`META_ANNOTATION_DEPTH`] levels of recursion.
pub fn is_required<D>(decl: &D, groups: &GroupFilter) -> bool
where
    D: AnnotatedDeclaration + ?Sized,
{
    is_not_null(decl, META_ANNOTATION_DEPTH, groups)
}

fn is_not_null<D>(decl: &D, remaining_depth: usize, groups: &GroupFilter) -> bool
where
    D: AnnotatedDeclaration + ?Sized,
{
    if active_annotation(decl, ConstraintKind::NotNull, groups).is_some() {
        return true;
    }

    decl.annotations()
        .iter()
        .filter_map(|mirror| mirror.definition.as_deref())
        .any(|definition| {
            if remaining_depth > 0 {
                is_not_null(definition, remaining_depth - 1, groups)
            } else {
                active_annotation(definition, ConstraintKind::NotNull, groups).is_some()
            }
        })
}

/// Whether a declaration carries any constraint
///
/// True straight away if the caller already knows it is required.
pub fn has_constraints<D>(decl: &D, required: bool, groups: &GroupFilter) -> bool
where
    D: AnnotatedDeclaration + ?Sized,
{
    if required {
        return true;
    }

    decl.annotations().iter().any(|mirror| {
        mirror.package_name() == Some(CONSTRAINTS_PACKAGE) && groups.is_active(mirror)
    })
}

/// Describe the constraints of a declaration, comma separated
///
/// With `required`, a leading "required" is added unless `@NotNull` is
/// already among the constraints. Returns `None` when nothing applies.
pub fn describe_constraints<D>(
    decl: &D,
    required: bool,
    groups: &GroupFilter,
) -> Result<Option<String>>
where
    D: AnnotatedDeclaration + ?Sized,
{
    let mut constraints = collect_constraints(decl, groups)?;

    if required && !constraints.iter().any(|c| c.kind() == ConstraintKind::NotNull) {
        constraints.insert(0, Constraint::NotNull);
    }

    if constraints.is_empty() {
        return Ok(None);
    }

    let description = constraints
        .iter()
        .map(Constraint::description)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Some(description))
}

/// The annotation of the given kind, if present and active
///
/// Only the first annotation of the kind is considered.
fn active_annotation<'a, D>(
    decl: &'a D,
    kind: ConstraintKind,
    groups: &GroupFilter,
) -> Option<&'a AnnotationMirror>
where
    D: AnnotatedDeclaration + ?Sized,
{
    let mirror = decl.find_annotation(kind.annotation_name())?;
    if groups.is_active(mirror) {
        Some(mirror)
    } else {
        trace!(declaration = decl.name(), %kind, "constraint suppressed by ignored group");
        None
    }
}

fn read_constraint<D>(decl: &D, kind: ConstraintKind, mirror: &AnnotationMirror) -> Result<Constraint>
where
    D: AnnotatedDeclaration + ?Sized,
{
    let reader = AttributeReader { decl: decl.name(), mirror };

    let constraint = match kind {
        ConstraintKind::Null => Constraint::Null,
        ConstraintKind::NotNull => Constraint::NotNull,
        ConstraintKind::False => Constraint::False,
        ConstraintKind::True => Constraint::True,
        ConstraintKind::DecimalMax => Constraint::DecimalMax {
            value: reader.decimal("value")?,
            inclusive: reader.optional_bool("inclusive")?.unwrap_or(true),
        },
        ConstraintKind::DecimalMin => Constraint::DecimalMin {
            value: reader.decimal("value")?,
            inclusive: reader.optional_bool("inclusive")?.unwrap_or(true),
        },
        ConstraintKind::Digits => Constraint::Digits {
            integer: reader.int32("integer")?,
            fraction: reader.int32("fraction")?,
        },
        ConstraintKind::Future => Constraint::Future,
        ConstraintKind::Max => Constraint::Max {
            value: reader.int("value")?,
        },
        ConstraintKind::Min => Constraint::Min {
            value: reader.int("value")?,
        },
        ConstraintKind::Past => Constraint::Past,
        ConstraintKind::Regexp => Constraint::Regexp {
            pattern: reader.string("regexp")?,
        },
        ConstraintKind::Size => Constraint::Size {
            max: reader.optional_int32("max")?.unwrap_or(DEFAULT_SIZE_MAX),
            min: reader.optional_int32("min")?.unwrap_or(DEFAULT_SIZE_MIN),
        },
    };

    Ok(constraint)
}

struct AttributeReader<'a> {
    decl: &'a str,
    mirror: &'a AnnotationMirror,
}

impl AttributeReader<'_> {
    fn error(&self, attribute: &str, message: &str) -> AnnotationError {
        AnnotationError::new(message)
            .with_annotation(self.mirror.annotation_type.as_str())
            .with_attribute(attribute)
            .with_declaration(self.decl)
    }

    fn required(&self, attribute: &str) -> Result<&AnnotationValue> {
        self.mirror
            .value(attribute)
            .ok_or_else(|| self.error(attribute, "missing mandatory attribute").into())
    }

    fn int(&self, attribute: &str) -> Result<i64> {
        self.required(attribute)?
            .as_int()
            .ok_or_else(|| self.error(attribute, "expected an integer").into())
    }

    fn optional_int32(&self, attribute: &str) -> Result<Option<i32>> {
        match self.mirror.value(attribute) {
            Some(_) => self.int32(attribute).map(Some),
            None => Ok(None),
        }
    }

    fn int32(&self, attribute: &str) -> Result<i32> {
        let value = self.int(attribute)?;
        i32::try_from(value).map_err(|_| self.error(attribute, "integer out of range").into())
    }

    fn optional_bool(&self, attribute: &str) -> Result<Option<bool>> {
        match self.mirror.value(attribute) {
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| self.error(attribute, "expected a boolean").into()),
            None => Ok(None),
        }
    }

    fn string(&self, attribute: &str) -> Result<String> {
        self.required(attribute)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.error(attribute, "expected a string").into())
    }

    /// Decimal bounds are kept verbatim once they are known to be decimal
    /// literals; surrounding whitespace is rejected.
    fn decimal(&self, attribute: &str) -> Result<String> {
        let value = self.string(attribute)?;
        if DECIMAL_LITERAL.is_match(&value) {
            Ok(value)
        } else {
            Err(self.error(attribute, "not a decimal number").into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::{AnnotationTypeDeclaration, Declaration};
    use crate::error::Error;

    fn constraint(kind: ConstraintKind) -> AnnotationMirror {
        AnnotationMirror::new(kind.annotation_name())
    }

    fn int(value: i64) -> AnnotationValue {
        AnnotationValue::Int(value)
    }

    fn string(value: &str) -> AnnotationValue {
        AnnotationValue::String(value.to_string())
    }

    fn grouped(mirror: AnnotationMirror, group: &str) -> AnnotationMirror {
        mirror.with_value(
            "groups",
            AnnotationValue::Array(vec![AnnotationValue::Class(group.to_string())]),
        )
    }

    #[test]
    fn test_collects_in_priority_order() {
        let decl = Declaration::new("code")
            .with_annotation(constraint(ConstraintKind::Size).with_value("max", int(8)))
            .with_annotation(constraint(ConstraintKind::Regexp).with_value("regexp", string("[A-Z]+")))
            .with_annotation(constraint(ConstraintKind::NotNull));

        let constraints = collect_constraints(&decl, &GroupFilter::none()).unwrap();
        assert_eq!(
            constraints,
            vec![
                Constraint::NotNull,
                Constraint::Regexp { pattern: "[A-Z]+".to_string() },
                Constraint::Size { max: 8, min: 0 },
            ]
        );
    }

    #[test]
    fn test_null_short_circuits() {
        let decl = Declaration::new("legacy")
            .with_annotation(constraint(ConstraintKind::NotNull))
            .with_annotation(constraint(ConstraintKind::Max).with_value("value", int(3)))
            .with_annotation(constraint(ConstraintKind::Null));

        let constraints = collect_constraints(&decl, &GroupFilter::none()).unwrap();
        assert_eq!(constraints, vec![Constraint::Null]);
    }

    #[test]
    fn test_suppressed_null_does_not_short_circuit() {
        let decl = Declaration::new("legacy")
            .with_annotation(grouped(constraint(ConstraintKind::Null), "com.example.Create"))
            .with_annotation(constraint(ConstraintKind::NotNull));

        let groups = GroupFilter::ignoring(["com.example.Create"]);
        let constraints = collect_constraints(&decl, &groups).unwrap();
        assert_eq!(constraints, vec![Constraint::NotNull]);
    }

    #[test]
    fn test_first_annotation_of_a_kind_decides() {
        let decl = Declaration::new("n")
            .with_annotation(grouped(
                constraint(ConstraintKind::Max).with_value("value", int(1)),
                "com.example.Draft",
            ))
            .with_annotation(constraint(ConstraintKind::Max).with_value("value", int(2)));

        let groups = GroupFilter::ignoring(["com.example.Draft"]);
        assert!(collect_constraints(&decl, &groups).unwrap().is_empty());
    }

    #[test]
    fn test_attribute_defaults() {
        let decl = Declaration::new("price")
            .with_annotation(constraint(ConstraintKind::DecimalMax).with_value("value", string("99.99")))
            .with_annotation(
                constraint(ConstraintKind::DecimalMin)
                    .with_value("value", string("0"))
                    .with_value("inclusive", AnnotationValue::Bool(false)),
            )
            .with_annotation(constraint(ConstraintKind::Size));

        let constraints = collect_constraints(&decl, &GroupFilter::none()).unwrap();
        assert_eq!(
            constraints,
            vec![
                Constraint::DecimalMax { value: "99.99".to_string(), inclusive: true },
                Constraint::DecimalMin { value: "0".to_string(), inclusive: false },
                Constraint::Size { max: i32::MAX, min: 0 },
            ]
        );
    }

    #[test]
    fn test_missing_mandatory_attribute_is_an_error() {
        let decl = Declaration::new("age").with_annotation(constraint(ConstraintKind::Max));
        let err = collect_constraints(&decl, &GroupFilter::none()).unwrap_err();
        assert!(matches!(err, Error::Annotation(ref e) if e.attribute.as_deref() == Some("value")));
    }

    #[test]
    fn test_bad_decimal_is_an_error() {
        let decl = Declaration::new("price")
            .with_annotation(constraint(ConstraintKind::DecimalMax).with_value("value", string("lots")));
        assert!(collect_constraints(&decl, &GroupFilter::none()).is_err());

        let scientific = Declaration::new("price")
            .with_annotation(constraint(ConstraintKind::DecimalMax).with_value("value", string("1e3")));
        assert!(collect_constraints(&scientific, &GroupFilter::none()).is_ok());

        for malformed in [" 5 ", "5 ", "", "+", ".", "1e", "1.2.3", "0x10"] {
            let decl = Declaration::new("price").with_annotation(
                constraint(ConstraintKind::DecimalMin).with_value("value", string(malformed)),
            );
            assert!(
                collect_constraints(&decl, &GroupFilter::none()).is_err(),
                "{:?} should be rejected",
                malformed
            );
        }
    }

    #[test]
    fn test_unbounded_decimals_are_kept_verbatim() {
        let literals = [
            "100000000000000000000000000000",
            "1E+40",
            "1e40",
            "-0.000000000000000000000000000000001",
            "+1.0",
            ".5",
            "7.",
            "123456789012345678901234567890.123456789E-400",
        ];

        for literal in literals {
            let decl = Declaration::new("amount").with_annotation(
                constraint(ConstraintKind::DecimalMax).with_value("value", string(literal)),
            );
            let constraints = collect_constraints(&decl, &GroupFilter::none()).unwrap();
            assert_eq!(
                constraints,
                vec![Constraint::DecimalMax { value: literal.to_string(), inclusive: true }]
            );
        }
    }

    #[test]
    fn test_is_required_direct_and_grouped() {
        let direct = Declaration::new("id").with_annotation(constraint(ConstraintKind::NotNull));
        assert!(is_required(&direct, &GroupFilter::none()));

        let grouped_decl = Declaration::new("id")
            .with_annotation(grouped(constraint(ConstraintKind::NotNull), "com.example.Draft"));
        assert!(!is_required(&grouped_decl, &GroupFilter::ignoring(["com.example.Draft"])));
        assert!(is_required(&grouped_decl, &GroupFilter::none()));
    }

    #[test]
    fn test_is_required_through_meta_annotations() {
        // @Email is itself annotated @NotNull
        let email = AnnotationTypeDeclaration::new("com.example.Email")
            .with_annotation(constraint(ConstraintKind::NotNull));
        let decl = Declaration::new("email")
            .with_annotation(AnnotationMirror::new("com.example.Email").with_definition(email));
        assert!(is_required(&decl, &GroupFilter::none()));
    }

    #[test]
    fn test_is_required_depth_limit() {
        let not_null_at = |hops: usize| {
            let mut definition = AnnotationTypeDeclaration::new(format!("com.example.Level{}", hops))
                .with_annotation(constraint(ConstraintKind::NotNull));
            for level in (1..hops).rev() {
                let name = format!("com.example.Level{}", level);
                definition = AnnotationTypeDeclaration::new(name.clone()).with_annotation(
                    AnnotationMirror::new(definition.qualified_name.clone()).with_definition(definition),
                );
            }
            Declaration::new("field").with_annotation(
                AnnotationMirror::new(definition.qualified_name.clone()).with_definition(definition),
            )
        };

        assert!(is_required(&not_null_at(1), &GroupFilter::none()));
        assert!(is_required(&not_null_at(2), &GroupFilter::none()));
        assert!(!is_required(&not_null_at(3), &GroupFilter::none()));
    }

    #[test]
    fn test_has_constraints() {
        let none = GroupFilter::none();
        let plain = Declaration::new("name")
            .with_annotation(AnnotationMirror::new("javax.xml.bind.annotation.XmlElement"));
        assert!(!has_constraints(&plain, false, &none));
        assert!(has_constraints(&plain, true, &none));

        let constrained = plain.clone().with_annotation(
            grouped(constraint(ConstraintKind::Past), "com.example.Draft"),
        );
        assert!(has_constraints(&constrained, false, &none));
        assert!(!has_constraints(&constrained, false, &GroupFilter::ignoring(["com.example.Draft"])));
    }

    #[test]
    fn test_describe_constraints() {
        let none = GroupFilter::none();
        let decl = Declaration::new("age")
            .with_annotation(constraint(ConstraintKind::Min).with_value("value", int(0)))
            .with_annotation(constraint(ConstraintKind::Max).with_value("value", int(150)));

        assert_eq!(
            describe_constraints(&decl, false, &none).unwrap().as_deref(),
            Some("max: 150, min: 0")
        );
        assert_eq!(
            describe_constraints(&decl, true, &none).unwrap().as_deref(),
            Some("required, max: 150, min: 0")
        );
        assert_eq!(describe_constraints(&Declaration::new("x"), false, &none).unwrap(), None);
        assert_eq!(
            describe_constraints(&Declaration::new("x"), true, &none).unwrap().as_deref(),
            Some("required")
        );
    }

    #[test]
    fn test_describe_does_not_duplicate_required() {
        let decl = Declaration::new("id")
            .with_annotation(constraint(ConstraintKind::NotNull))
            .with_annotation(constraint(ConstraintKind::Size).with_value("max", int(36)));

        let description = describe_constraints(&decl, true, &GroupFilter::none())
            .unwrap()
            .unwrap();
        assert_eq!(description, "required, max size: 36, min size: 0");
        assert_eq!(description.matches("required").count(), 1);
    }
}
