use tpv_core::{AnnotationCategory, AnnotationRef, PropertyModel, RuleCode, Severity, Unit};

use crate::{
    exclusivity::EXCLUSIVE_CATEGORIES,
    rule::{list, Rule, RuleScope},
};

/// Annotations on a field only count when a getter picks them up.
pub struct IgnoredAnnotationsOnField;

impl Rule for IgnoredAnnotationsOnField {
    fn code(&self) -> RuleCode {
        RuleCode::IgnoredAnnotationsOnField
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        if property.getter.is_some() {
            return None;
        }
        let field = property.field.as_ref()?;
        // framework annotations such as @Inject are not property annotations
        let ignored: Vec<_> = field
            .annotations
            .iter()
            .filter(|a| !a.has(AnnotationCategory::Other))
            .collect();
        if ignored.is_empty() {
            return None;
        }
        Some(format!("field {} has {} but no getter", field.name, list(ignored)))
    }
}

pub struct IgnoredAnnotationsOnMethod;

impl Rule for IgnoredAnnotationsOnMethod {
    fn code(&self) -> RuleCode {
        RuleCode::IgnoredAnnotationsOnMethod
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        let method = property
            .setter
            .iter()
            .chain(property.other_methods.iter())
            .find(|m| m.has_input_or_output())?;
        let annotations = method.annotations.iter().filter(|a| a.is_input_or_output());
        Some(format!("method {} is not a getter but has {}", method.name, list(annotations)))
    }
}

pub struct IgnoredPropertyAnnotated;

impl Rule for IgnoredPropertyAnnotated {
    fn code(&self) -> RuleCode {
        RuleCode::IgnoredPropertyAnnotated
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        let ignoring = property.annotations.iter().find(|a| a.has(AnnotationCategory::Ignoring))?;
        if !property.has_input_or_output() {
            return None;
        }
        Some(format!(
            "{} marks the property as ignored but it is also annotated with {}",
            ignoring,
            list(property.input_or_output_annotations())
        ))
    }
}

pub struct ConflictingAnnotations;

impl Rule for ConflictingAnnotations {
    fn code(&self) -> RuleCode {
        RuleCode::ConflictingAnnotations
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, _unit: &Unit, property: &PropertyModel) -> Option<String> {
        let clashes: Vec<String> = EXCLUSIVE_CATEGORIES
            .iter()
            .filter_map(|&(left, right)| {
                let (l, r) = (with_category(property, left), with_category(property, right));
                (!l.is_empty() && !r.is_empty()).then(|| format!("{} conflicts with {}", list(l), list(r)))
            })
            .collect();

        if clashes.is_empty() {
            return None;
        }
        Some(clashes.join("; "))
    }
}

fn with_category(property: &PropertyModel, category: AnnotationCategory) -> Vec<&AnnotationRef> {
    property.annotations.iter().filter(|a| a.has(category)).collect()
}
