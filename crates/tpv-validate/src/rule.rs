use tpv_core::{AnnotationRef, PropertyModel, RuleCode, Severity, Unit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleScope {
    Unit,
    Property,
}

/// A single validator. Rules are pure: they look at the unit (and one
/// property, for property-scoped rules) and return the detail text of at
/// most one finding.
pub trait Rule: Send + Sync {
    fn code(&self) -> RuleCode;
    fn scope(&self) -> RuleScope;

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_unit(&self, _unit: &Unit) -> Option<String> {
        None
    }

    fn check_property(&self, _unit: &Unit, _property: &PropertyModel) -> Option<String> {
        None
    }
}

pub(crate) fn list<'a>(annotations: impl IntoIterator<Item = &'a AnnotationRef>) -> String {
    annotations.into_iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
