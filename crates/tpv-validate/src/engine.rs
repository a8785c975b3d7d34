use tpv_core::{build_properties, MalformedUnitError, PropertyModel, PropertyNaming, Unit, Violation};
use tracing::debug;

use crate::{exclusivity::apply_precedence, registry::RuleSet, rule::RuleScope};

/// Run every rule in `rules` against the unit and its properties.
///
/// Output is deduplicated and sorted by rule code, then property name
/// (unit-level findings first), so identical input always gives an
/// identical list.
pub fn validate(unit: &Unit, properties: &[PropertyModel], rules: &RuleSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    for entry in rules.iter() {
        let code = entry.rule.code();
        match entry.rule.scope() {
            RuleScope::Unit => {
                if let Some(detail) = entry.rule.check_unit(unit) {
                    violations.push(Violation::new(code, &unit.name, None, detail, entry.severity));
                }
            }
            RuleScope::Property => {
                for property in properties {
                    if let Some(detail) = entry.rule.check_property(unit, property) {
                        violations.push(Violation::new(
                            code,
                            &unit.name,
                            Some(property.name.clone()),
                            detail,
                            entry.severity,
                        ));
                    }
                }
            }
        }
    }

    apply_precedence(&mut violations);
    violations.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    violations.dedup_by(|a, b| a.rule_code == b.rule_code && a.property_name == b.property_name);

    debug!(unit = %unit.name, violations = violations.len(), "validated unit");
    violations
}

/// Build the property models for `unit` and validate them in one go.
pub fn check_unit(unit: &Unit, naming: &dyn PropertyNaming, rules: &RuleSet) -> Result<Vec<Violation>, MalformedUnitError> {
    let properties = build_properties(unit, naming)?;
    Ok(validate(unit, &properties, rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpv_core::{AnnotationRef, BeanNaming, Member, RuleCode, Severity, UnitKind};

    #[test]
    fn empty_unit_has_no_violations() {
        let unit = Unit::new("Empty", UnitKind::Task);
        assert!(check_unit(&unit, &BeanNaming::default(), &RuleSet::standard()).unwrap().is_empty());
    }

    #[test]
    fn one_property_can_break_several_rules() {
        let unit = Unit::new("T", UnitKind::Task).member(
            Member::getter("getX")
                .private()
                .annotated(AnnotationRef::named("Input"))
                .annotated(AnnotationRef::named("OutputFile")),
        );
        let codes: Vec<_> = check_unit(&unit, &BeanNaming::default(), &RuleSet::standard())
            .unwrap()
            .into_iter()
            .map(|v| v.rule_code)
            .collect();
        assert_eq!(codes, vec![RuleCode::ConflictingAnnotations, RuleCode::PrivateGetterAnnotated]);
    }

    #[test]
    fn duplicate_properties_are_reported_once() {
        let unit = Unit::new("T", UnitKind::Task);
        let property = PropertyModel {
            name: "x".into(),
            getter: Some(Member::getter("getX").private().annotated(AnnotationRef::named("Input"))),
            annotations: vec![AnnotationRef::named("Input")],
            ..Default::default()
        };
        let out = validate(&unit, &[property.clone(), property], &RuleSet::standard());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn severity_comes_from_the_rule_table() {
        let unit = Unit::new("T", UnitKind::Task).member(Member::field("x").annotated(AnnotationRef::named("Input")));
        let rules = RuleSet::standard().with_severity(RuleCode::IgnoredAnnotationsOnField, Severity::Error);
        let out = check_unit(&unit, &BeanNaming::default(), &rules).unwrap();
        assert_eq!(out[0].severity, Severity::Error);
    }

    #[test]
    fn cacheable_transform_on_task_is_a_unit_level_finding() {
        let unit = Unit::new("T", UnitKind::Task).annotated(AnnotationRef::named("CacheableTransform"));
        let out = check_unit(&unit, &BeanNaming::default(), &RuleSet::standard()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].property_name, None);
    }
}
