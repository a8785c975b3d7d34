use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tpv_core::{RuleCode, Severity, Violation};
use tpv_validate::RuleSet;

use crate::templates::Template;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no report template registered for rule {0}")]
    MissingTemplate(RuleCode),
}

/// Stable external form of a violation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub code: RuleCode,
    pub unit: String,
    pub property: Option<String>,
    pub severity: Severity,
    pub message: String,
    pub hint: String,
    pub docs: String,
}

pub struct ReportEmitter {
    templates: HashMap<RuleCode, Template>,
}

impl ReportEmitter {
    /// Fails when any rule in `rules` has no template, so a rule added
    /// without report text is caught before the first unit is checked.
    pub fn new(templates: &[Template], rules: &RuleSet) -> Result<Self, RegistryError> {
        let templates: HashMap<RuleCode, Template> = templates.iter().map(|t| (t.code, *t)).collect();
        if let Some(missing) = rules.codes().find(|c| !templates.contains_key(c)) {
            return Err(RegistryError::MissingTemplate(missing));
        }
        Ok(Self { templates })
    }

    pub fn template(&self, code: RuleCode) -> Option<&Template> {
        self.templates.get(&code)
    }

    pub fn emit_one(&self, violation: &Violation) -> Result<DiagnosticRecord, RegistryError> {
        let template = self
            .templates
            .get(&violation.rule_code)
            .ok_or(RegistryError::MissingTemplate(violation.rule_code))?;
        Ok(DiagnosticRecord {
            code: violation.rule_code,
            unit: violation.unit_name.clone(),
            property: violation.property_name.clone(),
            severity: violation.severity,
            message: template.render(&violation.unit_name, violation.property_name.as_deref(), &violation.message),
            hint: template.hint.to_string(),
            docs: template.docs.to_string(),
        })
    }

    pub fn emit(&self, violations: &[Violation]) -> Result<Vec<DiagnosticRecord>, RegistryError> {
        violations.iter().map(|v| self.emit_one(v)).collect()
    }
}
