//! Rules tied to cacheability and to what transform actions may declare.

use tpv_core::{AnnotationCategory, PathSensitivity, PropertyModel, RuleCode, Unit, UnitKind};

use crate::rule::{list, Rule, RuleScope};

/// `@CacheableTransform` on anything that is not a transform action.
pub struct InvalidCacheableTransformAnnotation;

impl Rule for InvalidCacheableTransformAnnotation {
    fn code(&self) -> RuleCode {
        RuleCode::InvalidCacheableTransformAnnotation
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Unit
    }

    fn check_unit(&self, unit: &Unit) -> Option<String> {
        if unit.kind != UnitKind::Transform && unit.has_annotation(AnnotationCategory::CacheableTransform) {
            return Some("@CacheableTransform is only valid on transform actions".to_string());
        }
        None
    }
}

/// File inputs of a cacheable unit must say how their paths are compared.
pub struct MissingNormalization;

impl Rule for MissingNormalization {
    fn code(&self) -> RuleCode {
        RuleCode::MissingNormalization
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, unit: &Unit, property: &PropertyModel) -> Option<String> {
        if !unit.cacheable || property.has(AnnotationCategory::Normalization) {
            return None;
        }
        let file_inputs: Vec<_> = property.annotations.iter().filter(|a| a.is_file_input()).collect();
        if file_inputs.is_empty() {
            return None;
        }
        Some(format!("{} declared without a normalization annotation", list(file_inputs)))
    }
}

pub struct TransformAbsolutePathSensitivity;

impl Rule for TransformAbsolutePathSensitivity {
    fn code(&self) -> RuleCode {
        RuleCode::TransformAbsolutePathSensitivity
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, unit: &Unit, property: &PropertyModel) -> Option<String> {
        if unit.kind != UnitKind::Transform || !unit.cacheable {
            return None;
        }
        property
            .annotations
            .iter()
            .find(|a| a.path_sensitivity == Some(PathSensitivity::Absolute))
            .map(|a| format!("{} is not allowed on a cacheable transform", a))
    }
}

pub struct TransformShouldNotDeclareOutput;

impl Rule for TransformShouldNotDeclareOutput {
    fn code(&self) -> RuleCode {
        RuleCode::TransformShouldNotDeclareOutput
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Property
    }

    fn check_property(&self, unit: &Unit, property: &PropertyModel) -> Option<String> {
        if unit.kind != UnitKind::Transform {
            return None;
        }
        let outputs: Vec<_> = property.annotations.iter().filter(|a| a.is_output()).collect();
        if outputs.is_empty() {
            return None;
        }
        Some(format!("transform action declares output {}", list(outputs)))
    }
}
