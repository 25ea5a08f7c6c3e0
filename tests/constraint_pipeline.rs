//! Constraint pipeline integration tests
//!
//! Declarations go through extraction and facet projection the way a
//! schema generator drives them.

use enunciate::declarations::{AnnotationTypeDeclaration, AnnotationValue};
use enunciate::types::{
    decorate_with_restrictions, find_explicit_schema_type, restrict, PackageTypeCache,
};
use enunciate::validation::{
    collect_constraints, describe_constraints, has_constraints, is_required,
};
use enunciate::{
    AnnotationMirror, Constraint, ConstraintKind, Declaration, Error, GroupFilter, KnownXmlType,
    LengthBoundPolicy, Settings, XmlType,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

const DRAFT: &str = "com.example.Draft";

fn constraint_annotation(kind: ConstraintKind) -> AnnotationMirror {
    let mirror = AnnotationMirror::new(kind.annotation_name());
    match kind {
        ConstraintKind::DecimalMax | ConstraintKind::DecimalMin => {
            mirror.with_value("value", AnnotationValue::String("10.5".to_string()))
        }
        ConstraintKind::Digits => mirror
            .with_value("integer", AnnotationValue::Int(5))
            .with_value("fraction", AnnotationValue::Int(2)),
        ConstraintKind::Max | ConstraintKind::Min => mirror.with_value("value", AnnotationValue::Int(7)),
        ConstraintKind::Regexp => {
            mirror.with_value("regexp", AnnotationValue::String("[0-9]+".to_string()))
        }
        _ => mirror,
    }
}

fn in_group(mirror: AnnotationMirror, group: &str) -> AnnotationMirror {
    mirror.with_value(
        "groups",
        AnnotationValue::Array(vec![AnnotationValue::Class(group.to_string())]),
    )
}

fn declaration_with(kinds: &[ConstraintKind]) -> Declaration {
    kinds
        .iter()
        .fold(Declaration::new("field"), |decl, kind| {
            decl.with_annotation(constraint_annotation(*kind))
        })
}

fn facets_of(xml_type: &XmlType) -> Vec<String> {
    xml_type.restrictions().iter().map(ToString::to_string).collect()
}

fn kind_subset() -> impl Strategy<Value = Vec<ConstraintKind>> {
    proptest::sample::subsequence(ConstraintKind::ALL.to_vec(), 0..=ConstraintKind::ALL.len())
}

proptest! {
    #[test]
    fn prop_active_null_excludes_everything(kinds in kind_subset()) {
        let decl = declaration_with(&kinds)
            .with_annotation(constraint_annotation(ConstraintKind::Null));

        let constraints = collect_constraints(&decl, &GroupFilter::none()).unwrap();
        prop_assert_eq!(constraints, vec![Constraint::Null]);
    }

    #[test]
    fn prop_constraints_follow_priority_order(kinds in kind_subset()) {
        let mut shuffled = kinds.clone();
        shuffled.reverse();
        let decl = declaration_with(&shuffled);

        let extracted: Vec<_> = collect_constraints(&decl, &GroupFilter::none())
            .unwrap()
            .iter()
            .map(Constraint::kind)
            .collect();

        if kinds.contains(&ConstraintKind::Null) {
            prop_assert_eq!(extracted, vec![ConstraintKind::Null]);
        } else {
            prop_assert_eq!(extracted, kinds);
        }
    }

    #[test]
    fn prop_ignored_group_suppresses_constraint(kinds in kind_subset()) {
        let decl = kinds.iter().fold(Declaration::new("field"), |decl, kind| {
            decl.with_annotation(in_group(constraint_annotation(*kind), DRAFT))
        });
        let groups = GroupFilter::ignoring([DRAFT]);

        prop_assert!(collect_constraints(&decl, &groups).unwrap().is_empty());
        prop_assert!(!has_constraints(&decl, false, &groups));
        prop_assert!(!is_required(&decl, &groups));
    }
}

#[test]
fn test_null_suppressed_by_group_lets_others_through() {
    let decl = Declaration::new("field")
        .with_annotation(in_group(constraint_annotation(ConstraintKind::Null), DRAFT))
        .with_annotation(constraint_annotation(ConstraintKind::NotNull));

    let constraints = collect_constraints(&decl, &GroupFilter::ignoring([DRAFT])).unwrap();
    assert_eq!(constraints, vec![Constraint::NotNull]);

    let constraints = collect_constraints(&decl, &GroupFilter::none()).unwrap();
    assert_eq!(constraints, vec![Constraint::Null]);
}

#[test]
fn test_max_min_depend_on_base_type() {
    let decl = declaration_with(&[ConstraintKind::Max, ConstraintKind::Min]);
    let settings = Settings::default();

    let string = decorate_with_restrictions(Arc::new(KnownXmlType::String.into()), &decl, &settings).unwrap();
    assert_eq!(facets_of(&string), vec!["maxLength=7", "minLength=7"]);

    let int = decorate_with_restrictions(Arc::new(KnownXmlType::Int.into()), &decl, &settings).unwrap();
    assert_eq!(facets_of(&int), vec!["maxInclusive=7", "minInclusive=7"]);

    let token = decorate_with_restrictions(Arc::new(KnownXmlType::Token.into()), &decl, &settings).unwrap();
    assert_eq!(facets_of(&token), vec!["maxInclusive=7", "minInclusive=7"]);

    let string_like = settings.with_length_bound_policy(LengthBoundPolicy::StringLike);
    let token = decorate_with_restrictions(Arc::new(KnownXmlType::Token.into()), &decl, &string_like).unwrap();
    assert_eq!(facets_of(&token), vec!["maxLength=7", "minLength=7"]);
}

#[test]
fn test_size_zero_min_is_elided() {
    let base = Arc::new(XmlType::from(KnownXmlType::String));

    let zero_min = restrict(
        base.clone(),
        &[Constraint::Size { max: 20, min: 0 }],
        LengthBoundPolicy::Strict,
    );
    assert_eq!(facets_of(&zero_min), vec!["maxLength=20"]);

    let with_min = restrict(base, &[Constraint::Size { max: 20, min: 3 }], LengthBoundPolicy::Strict);
    assert_eq!(facets_of(&with_min), vec!["maxLength=20", "minLength=3"]);
}

#[test]
fn test_size_defaults_when_attributes_missing() {
    let decl = declaration_with(&[ConstraintKind::Size]);
    let constraints = collect_constraints(&decl, &GroupFilter::none()).unwrap();
    assert_eq!(constraints, vec![Constraint::Size { max: i32::MAX, min: 0 }]);
}

#[test]
fn test_no_facets_returns_the_base_itself() {
    let base = Arc::new(XmlType::from(KnownXmlType::DateTime));
    let decl = declaration_with(&[ConstraintKind::NotNull, ConstraintKind::Past]);

    let decorated = decorate_with_restrictions(base.clone(), &decl, &Settings::default()).unwrap();
    assert!(Arc::ptr_eq(&base, &decorated));
    assert!(!decorated.is_restricted());
}

#[test]
fn test_required_is_not_duplicated() {
    let groups = GroupFilter::none();

    let not_null = declaration_with(&[ConstraintKind::NotNull, ConstraintKind::Max]);
    assert_eq!(
        describe_constraints(&not_null, true, &groups).unwrap().as_deref(),
        Some("required, max: 7")
    );
    assert_eq!(
        describe_constraints(&not_null, false, &groups).unwrap(),
        describe_constraints(&not_null, true, &groups).unwrap()
    );

    let plain = declaration_with(&[ConstraintKind::Max]);
    assert_eq!(
        describe_constraints(&plain, true, &groups).unwrap().as_deref(),
        Some("required, max: 7")
    );
    assert_eq!(describe_constraints(&Declaration::new("bare"), false, &groups).unwrap(), None);
}

#[test]
fn test_description_of_every_kind() {
    let decl = declaration_with(&[
        ConstraintKind::False,
        ConstraintKind::DecimalMax,
        ConstraintKind::Digits,
        ConstraintKind::Future,
        ConstraintKind::Regexp,
        ConstraintKind::Size,
    ]);

    let description = describe_constraints(&decl, false, &GroupFilter::none()).unwrap().unwrap();
    assert_eq!(
        description,
        format!(
            "must be \"false\", max: 10.5, max digits: 5 (integer), 2 (fraction), future date, regex: [0-9]+, max size: {}, min size: 0",
            i32::MAX
        )
    );
}

#[test]
fn test_required_through_meta_annotation() {
    let not_null = AnnotationMirror::new("javax.validation.constraints.NotNull");
    let composed = AnnotationMirror::new("com.example.Mandatory")
        .with_definition(AnnotationTypeDeclaration::new("com.example.Mandatory").with_annotation(not_null));
    let decl = Declaration::new("field").with_annotation(composed);

    assert!(is_required(&decl, &GroupFilter::none()));
    assert!(collect_constraints(&decl, &GroupFilter::none()).unwrap().is_empty());
}

#[test]
fn test_malformed_constraint_attribute_is_an_error() {
    let decl = Declaration::new("amount").with_annotation(
        AnnotationMirror::new("javax.validation.constraints.DecimalMax")
            .with_value("value", AnnotationValue::String("ten".to_string())),
    );

    match collect_constraints(&decl, &GroupFilter::none()) {
        Err(Error::Annotation(e)) => {
            assert_eq!(e.attribute.as_deref(), Some("value"));
        }
        other => panic!("expected annotation error, got {:?}", other),
    }
}

#[test]
fn test_package_schema_type_resolves_accessor_type() {
    let package = Declaration::package("com.example.model").with_annotation(
        AnnotationMirror::new("javax.xml.bind.annotation.XmlSchemaType")
            .with_value("name", AnnotationValue::String("date".to_string()))
            .with_value("type", AnnotationValue::Class("org.joda.time.LocalDate".to_string())),
    );
    let accessor = Declaration::new("birthday")
        .in_package("com.example.model")
        .with_annotation(constraint_annotation(ConstraintKind::Past));
    let cache = PackageTypeCache::new();

    let resolved = find_explicit_schema_type(&accessor, Some("org.joda.time.LocalDate"), &package, &cache)
        .unwrap()
        .unwrap();
    assert_eq!(resolved.name(), "date");
    assert_eq!(resolved.as_known(), None);
    assert_eq!(cache.len(), 1);

    let again = find_explicit_schema_type(&accessor, Some("org.joda.time.LocalDate"), &package, &cache).unwrap();
    assert_eq!(again, Some(resolved));
    assert_eq!(cache.len(), 1);

    let primitive = find_explicit_schema_type(&accessor, Some("int"), &package, &cache).unwrap();
    assert_eq!(primitive, None);
}

#[test]
fn test_unbounded_decimal_bounds_reach_the_facets() {
    let decl = Declaration::new("balance")
        .with_annotation(
            AnnotationMirror::new("javax.validation.constraints.DecimalMax")
                .with_value("value", AnnotationValue::String("100000000000000000000000000000".to_string())),
        )
        .with_annotation(
            AnnotationMirror::new("javax.validation.constraints.DecimalMin")
                .with_value("value", AnnotationValue::String("-1E+40".to_string()))
                .with_value("inclusive", AnnotationValue::Bool(false)),
        );

    let decorated =
        decorate_with_restrictions(Arc::new(KnownXmlType::Decimal.into()), &decl, &Settings::default()).unwrap();
    assert_eq!(
        facets_of(&decorated),
        vec!["maxInclusive=100000000000000000000000000000", "minExclusive=-1E+40"]
    );
    assert_eq!(
        describe_constraints(&decl, false, &GroupFilter::none()).unwrap().as_deref(),
        Some("max: 100000000000000000000000000000, min: -1E+40 (exclusive)")
    );
}

#[test]
fn test_package_cache_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PackageTypeCache>();

    let package = Declaration::package("com.example.shared").with_annotation(
        AnnotationMirror::new("javax.xml.bind.annotation.XmlSchemaType")
            .with_value("name", AnnotationValue::String("date".to_string()))
            .with_value("type", AnnotationValue::Class("org.joda.time.LocalDate".to_string())),
    );
    let cache = PackageTypeCache::new();

    let loaded: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| cache.get_or_load(&package).unwrap()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(cache.len(), 1);
    for types in &loaded {
        assert_eq!(types, &loaded[0]);
        assert_eq!(types["org.joda.time.LocalDate"].name(), "date");
    }

    let after = cache.get_or_load(&package).unwrap();
    assert!(loaded.iter().any(|types| Arc::ptr_eq(types, &after)));
}

#[test]
fn test_package_schema_type_without_type_is_fatal() {
    let package = Declaration::package("com.example.broken").with_annotation(
        AnnotationMirror::new("javax.xml.bind.annotation.XmlSchemaType")
            .with_value("name", AnnotationValue::String("date".to_string())),
    );
    let cache = PackageTypeCache::new();

    let result = find_explicit_schema_type(
        &Declaration::new("when"),
        Some("java.util.Date"),
        &package,
        &cache,
    );
    match result {
        Err(Error::Configuration(message)) => assert_eq!(
            message,
            "com.example.broken: a type must be specified in javax.xml.bind.annotation.XmlSchemaType at the package-level."
        ),
        other => panic!("expected configuration error, got {:?}", other),
    }
    assert!(cache.is_empty());
}
