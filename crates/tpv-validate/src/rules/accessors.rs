use tpv_core::{AnnotationCategory, AnnotationRef, Member, PropertyModel, RuleCode, Unit, Visibility};

use crate::rule::{list, Rule, RuleScope};

/// Required property with nothing configured. Relies on the `has_value`
/// signal from the configuration stage; properties without it are skipped.
pub struct ValueNotSet;

impl Rule for ValueNotSet {
    fn code(&self) -> RuleCode {
        RuleCode::ValueNotSet
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        let required = property.has_input_or_output()
            && !property.has(AnnotationCategory::Optional)
            && !property.has(AnnotationCategory::Ignoring);
        if required && property.has_value() == Some(false) {
            return Some("property is required but no value has been configured".to_string());
        }
        None
    }
}

pub struct MutableTypeWithSetter;

impl Rule for MutableTypeWithSetter {
    fn code(&self) -> RuleCode {
        RuleCode::MutableTypeWithSetter
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        let setter = property.setter.as_ref()?;
        let getter = property.getters().find(|g| g.returns_mutable_type)?;
        Some(format!(
            "{} returns a mutable type but {} also allows replacing it",
            getter.name, setter.name
        ))
    }
}

pub struct RedundantGetters;

impl Rule for RedundantGetters {
    fn code(&self) -> RuleCode {
        RuleCode::RedundantGetters
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        if !property.has_redundant_getters() {
            return None;
        }
        let names: Vec<&str> = property.getters().map(|g| g.name.as_str()).collect();
        Some(format!("getters {} all define the same property", names.join(", ")))
    }
}

pub struct PrivateGetterAnnotated;

impl Rule for PrivateGetterAnnotated {
    fn code(&self) -> RuleCode {
        RuleCode::PrivateGetterAnnotated
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        property
            .getters()
            .filter(|g| g.visibility == Visibility::Private)
            .find_map(|getter| {
                let annotated = own_input_or_output(property, getter);
                (!annotated.is_empty())
                    .then(|| format!("private getter {} is annotated with {}", getter.name, list(annotated)))
            })
    }
}

/// Input/output annotations a getter carries itself. The field only
/// contributes through the primary getter.
fn own_input_or_output<'a>(property: &'a PropertyModel, getter: &'a Member) -> Vec<&'a AnnotationRef> {
    let primary = property.getter.as_ref().is_some_and(|p| std::ptr::eq(p, getter));
    let field = primary.then_some(property.field.as_ref()).flatten();

    let mut annotated: Vec<&AnnotationRef> = Vec::new();
    for a in getter.annotations.iter().chain(field.into_iter().flat_map(|f| f.annotations.iter())) {
        if a.is_input_or_output() && !annotated.contains(&a) {
            annotated.push(a);
        }
    }
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpv_core::{build_properties, BeanNaming, BooleanKind, UnitKind};

    fn only(unit: &Unit) -> PropertyModel {
        build_properties(unit, &BeanNaming::default()).unwrap().remove(0)
    }

    #[test]
    fn value_not_set_only_for_required_properties_with_a_signal() {
        let base = Member::getter("getLevel").annotated(AnnotationRef::named("Input"));

        let unset = Unit::new("T", UnitKind::Task).member(base.clone().with_value(false));
        assert!(ValueNotSet.check_property(&unset, &only(&unset)).is_some());

        let unknown = Unit::new("T", UnitKind::Task).member(base.clone());
        assert!(ValueNotSet.check_property(&unknown, &only(&unknown)).is_none());

        let optional = Unit::new("T", UnitKind::Task)
            .member(base.annotated(AnnotationRef::named("Optional")).with_value(false));
        assert!(ValueNotSet.check_property(&optional, &only(&optional)).is_none());
    }

    #[test]
    fn mutable_getter_with_setter() {
        let unit = Unit::new("T", UnitKind::Task)
            .member(Member::getter("getFiles").mutable(true))
            .member(Member::setter("setFiles"));
        let detail = MutableTypeWithSetter.check_property(&unit, &only(&unit)).unwrap();
        assert!(detail.contains("setFiles"));

        let no_setter = Unit::new("T", UnitKind::Task).member(Member::getter("getFiles").mutable(true));
        assert!(MutableTypeWithSetter.check_property(&no_setter, &only(&no_setter)).is_none());
    }

    #[test]
    fn private_getter_needs_input_or_output_annotation() {
        let plain = Unit::new("T", UnitKind::Task).member(Member::getter("getX").private());
        assert!(PrivateGetterAnnotated.check_property(&plain, &only(&plain)).is_none());

        let annotated = Unit::new("T", UnitKind::Task)
            .member(Member::getter("getX").private().annotated(AnnotationRef::named("Input")));
        assert!(PrivateGetterAnnotated.check_property(&annotated, &only(&annotated)).is_some());
    }

    #[test]
    fn private_getter_is_judged_by_its_own_annotations() {
        let unit = Unit::new("T", UnitKind::Task)
            .member(Member::getter("getVerbose").boolean(BooleanKind::Get).annotated(AnnotationRef::named("Input")))
            .member(Member::getter("isVerbose").boolean(BooleanKind::Is).private());
        assert!(PrivateGetterAnnotated.check_property(&unit, &only(&unit)).is_none());

        let redundant_annotated = Unit::new("T", UnitKind::Task)
            .member(Member::getter("getVerbose").boolean(BooleanKind::Get))
            .member(Member::getter("isVerbose").boolean(BooleanKind::Is).private().annotated(AnnotationRef::named("Input")));
        let detail = PrivateGetterAnnotated
            .check_property(&redundant_annotated, &only(&redundant_annotated))
            .unwrap();
        assert_eq!(detail, "private getter isVerbose is annotated with @Input");
    }

    #[test]
    fn field_annotations_count_for_a_private_primary_getter() {
        let unit = Unit::new("T", UnitKind::Task)
            .member(Member::getter("getLevel").private())
            .member(Member::field("level").annotated(AnnotationRef::named("Input")));
        let detail = PrivateGetterAnnotated.check_property(&unit, &only(&unit)).unwrap();
        assert_eq!(detail, "private getter getLevel is annotated with @Input");
    }
}
