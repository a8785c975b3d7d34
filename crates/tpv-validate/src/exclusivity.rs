use tpv_core::{AnnotationCategory, RuleCode, Violation};

/// Category pairs that must never appear together on one property.
pub const EXCLUSIVE_CATEGORIES: &[(AnnotationCategory, AnnotationCategory)] =
    &[(AnnotationCategory::Input, AnnotationCategory::Output)];

/// `(winner, suppressed)`: when both fire on the same property only the
/// winner is reported. A property that is both input and output has no
/// meaningful normalization to ask for.
pub const PRECEDENCE: &[(RuleCode, RuleCode)] = &[(RuleCode::ConflictingAnnotations, RuleCode::MissingNormalization)];

pub fn mutually_exclusive(a: AnnotationCategory, b: AnnotationCategory) -> bool {
    EXCLUSIVE_CATEGORIES.iter().any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Drop violations that lose to another violation on the same property.
pub fn apply_precedence(violations: &mut Vec<Violation>) {
    let suppressed: Vec<(RuleCode, Option<String>, String)> = violations
        .iter()
        .flat_map(|v| {
            PRECEDENCE
                .iter()
                .filter(move |(winner, _)| *winner == v.rule_code)
                .map(move |(_, loser)| (*loser, v.property_name.clone(), v.unit_name.clone()))
        })
        .collect();

    if suppressed.is_empty() {
        return;
    }
    violations.retain(|v| {
        !suppressed
            .iter()
            .any(|(code, prop, unit)| *code == v.rule_code && *prop == v.property_name && *unit == v.unit_name)
    });
}
