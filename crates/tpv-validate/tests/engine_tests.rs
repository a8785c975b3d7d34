use proptest::prelude::*;
use tpv_core::{
    AnnotationRef, BeanNaming, Member, PathSensitivity, RuleCode, Unit, UnitKind, Violation,
};
use tpv_validate::{check_unit, rules::builtin_rules, RuleSet};

fn codes(unit: &Unit) -> Vec<RuleCode> {
    check_unit(unit, &BeanNaming::default(), &RuleSet::standard())
        .unwrap()
        .into_iter()
        .map(|v| v.rule_code)
        .collect()
}

fn a(name: &str) -> AnnotationRef {
    AnnotationRef::named(name)
}

#[test]
fn test_task_with_cacheable_transform_annotation() {
    let unit = Unit::new("org.example.Zip", UnitKind::Task)
        .annotated(a("CacheableTransform"))
        .member(Member::getter("getSource").annotated(a("InputFiles")))
        .member(Member::getter("getArchive").annotated(a("OutputFile")));
    let found = codes(&unit);
    assert_eq!(
        found.iter().filter(|c| **c == RuleCode::InvalidCacheableTransformAnnotation).count(),
        1
    );
}

#[test]
fn test_missing_normalization_and_path_sensitive_fix() {
    let unit = Unit::new("Compile", UnitKind::Task)
        .cacheable(true)
        .member(Member::getter("getSources").annotated(a("InputFiles")));
    assert_eq!(codes(&unit), vec![RuleCode::MissingNormalization]);

    let fixed = Unit::new("Compile", UnitKind::Task).cacheable(true).member(
        Member::getter("getSources")
            .annotated(a("InputFiles"))
            .annotated(AnnotationRef::path_sensitive(PathSensitivity::Relative)),
    );
    assert!(codes(&fixed).is_empty());
}

#[test]
fn test_input_and_output_conflict_hides_missing_normalization() {
    let unit = Unit::new("Copy", UnitKind::Task)
        .cacheable(true)
        .member(Member::getter("getTarget").annotated(a("InputFile")).annotated(a("OutputFile")));
    let found = codes(&unit);
    assert!(found.contains(&RuleCode::ConflictingAnnotations));
    assert!(!found.contains(&RuleCode::MissingNormalization));
}

#[test]
fn test_field_annotations_need_a_getter() {
    let unit = Unit::new("T", UnitKind::Task).member(Member::field("level").annotated(a("Input")));
    assert_eq!(codes(&unit), vec![RuleCode::IgnoredAnnotationsOnField]);

    let with_getter = unit.clone().member(Member::getter("getLevel").annotated(a("Input")));
    assert!(codes(&with_getter).is_empty());
}

#[test]
fn test_transform_absolute_path_sensitivity_scenario() {
    let build = |sensitivity| {
        Unit::new("Unzip", UnitKind::Transform).cacheable(true).member(
            Member::getter("getClasspath")
                .annotated(a("InputFiles"))
                .annotated(AnnotationRef::path_sensitive(sensitivity)),
        )
    };
    let absolute = check_unit(&build(PathSensitivity::Absolute), &BeanNaming::default(), &RuleSet::standard()).unwrap();
    assert_eq!(absolute.len(), 1);
    assert_eq!(absolute[0].rule_code, RuleCode::TransformAbsolutePathSensitivity);
    assert_eq!(absolute[0].property_name.as_deref(), Some("classpath"));

    assert!(codes(&build(PathSensitivity::NameOnly)).is_empty());
}

#[test]
fn test_mutable_type_with_setter_scenario() {
    let build = |mutable| {
        Unit::new("T", UnitKind::Task)
            .member(Member::getter("getX").annotated(a("Input")).mutable(mutable))
            .member(Member::setter("setX"))
    };
    assert_eq!(codes(&build(true)), vec![RuleCode::MutableTypeWithSetter]);
    assert!(codes(&build(false)).is_empty());
}

#[test]
fn test_redundant_boolean_getters() {
    let unit = Unit::new("T", UnitKind::Task)
        .member(Member::getter("isVerbose").annotated(a("Input")))
        .member(Member::getter("getVerbose").annotated(a("Input")));
    assert_eq!(codes(&unit), vec![RuleCode::RedundantGetters]);
}

#[test]
fn test_unannotated_private_getter_beside_public_one_is_only_redundant() {
    let unit = Unit::new("T", UnitKind::Task)
        .member(Member::getter("getVerbose").annotated(a("Input")))
        .member(Member::getter("isVerbose").private());
    assert_eq!(codes(&unit), vec![RuleCode::RedundantGetters]);
}

#[test]
fn test_report_order_is_code_then_property() {
    let unit = Unit::new("T", UnitKind::Task)
        .member(Member::field("zeta").annotated(a("Input")))
        .member(Member::field("alpha").annotated(a("Input")))
        .member(Member::getter("getBeta").private().annotated(a("Input")));
    let out = check_unit(&unit, &BeanNaming::default(), &RuleSet::standard()).unwrap();
    let keys: Vec<_> = out.iter().map(|v| (v.rule_code, v.property_name.clone().unwrap())).collect();
    assert_eq!(
        keys,
        vec![
            (RuleCode::IgnoredAnnotationsOnField, "alpha".to_string()),
            (RuleCode::IgnoredAnnotationsOnField, "zeta".to_string()),
            (RuleCode::PrivateGetterAnnotated, "beta".to_string()),
        ]
    );
}

const ANNOTATIONS: &[&str] = &[
    "Input",
    "InputFile",
    "InputFiles",
    "Classpath",
    "OutputFile",
    "OutputDirectory",
    "PathSensitive",
    "Optional",
    "Internal",
    "ReplacedBy",
    "Inject",
];

const MEMBER_NAMES: &[&str] = &["getX", "isX", "setX", "x", "getY", "setY", "y", "execute"];

fn arb_annotation() -> impl Strategy<Value = AnnotationRef> {
    prop::sample::select(ANNOTATIONS.to_vec()).prop_map(AnnotationRef::named)
}

fn arb_member() -> impl Strategy<Value = Member> {
    (
        prop::sample::select(MEMBER_NAMES.to_vec()),
        0..4u8,
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(arb_annotation(), 0..3),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(name, kind, private, mutable, annotations, has_value)| {
            let mut m = match kind {
                0 => Member::field(name),
                1 => Member::getter(name),
                2 => Member::setter(name),
                _ => Member::method(name),
            };
            if private {
                m = m.private();
            }
            m.returns_mutable_type = mutable;
            m.annotations = annotations;
            m.has_value = has_value;
            m
        })
}

fn arb_unit() -> impl Strategy<Value = Unit> {
    (any::<bool>(), any::<bool>(), any::<bool>(), prop::collection::vec(arb_member(), 0..8)).prop_map(
        |(transform, cacheable, cacheable_transform, members)| {
            let kind = if transform { UnitKind::Transform } else { UnitKind::Task };
            let mut unit = Unit::new("Generated", kind).cacheable(cacheable);
            if cacheable_transform {
                unit = unit.annotated(a("CacheableTransform"));
            }
            unit.members = members;
            unit
        },
    )
}

fn run(unit: &Unit, rules: &RuleSet) -> Vec<Violation> {
    check_unit(unit, &BeanNaming::default(), rules).unwrap()
}

proptest! {
    /// Same input, same ordered output.
    #[test]
    fn prop_validation_is_deterministic(unit in arb_unit()) {
        let rules = RuleSet::standard();
        prop_assert_eq!(run(&unit, &rules), run(&unit, &rules));
    }

    /// Rule table order does not leak into the report.
    #[test]
    fn prop_rule_order_does_not_matter(unit in arb_unit()) {
        let mut reversed = builtin_rules();
        reversed.reverse();
        prop_assert_eq!(run(&unit, &RuleSet::standard()), run(&unit, &RuleSet::from_rules(reversed)));
    }

    #[test]
    fn prop_no_duplicate_findings_and_no_suppressed_pairs(unit in arb_unit()) {
        let out = run(&unit, &RuleSet::standard());
        for (i, v) in out.iter().enumerate() {
            for w in &out[i + 1..] {
                prop_assert!(!(v.rule_code == w.rule_code && v.property_name == w.property_name));
                let same_property = v.property_name == w.property_name;
                let pair = [v.rule_code, w.rule_code];
                prop_assert!(!(same_property
                    && pair.contains(&RuleCode::ConflictingAnnotations)
                    && pair.contains(&RuleCode::MissingNormalization)));
            }
        }
    }

    #[test]
    fn prop_cacheable_transform_on_task_always_reported_once(unit in arb_unit()) {
        let mut unit = unit;
        unit.kind = UnitKind::Task;
        unit.annotations = vec![a("CacheableTransform")];
        let count = run(&unit, &RuleSet::standard())
            .iter()
            .filter(|v| v.rule_code == RuleCode::InvalidCacheableTransformAnnotation)
            .count();
        prop_assert_eq!(count, 1);
    }
}
