use serde::{Deserialize, Serialize};

use crate::types::*;

/// One detected instance of a rule being broken. Built once, never edited.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Violation {
    pub rule_code: RuleCode,
    pub unit_name: String,
    pub property_name: Option<String>,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    pub fn new(
        rule_code: RuleCode,
        unit_name: impl Into<String>,
        property_name: Option<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            rule_code,
            unit_name: unit_name.into(),
            property_name,
            message: message.into(),
            severity,
        }
    }

    /// Ordering key used for reports: rule code text, then property
    /// (unit-level findings first).
    pub fn sort_key(&self) -> (&'static str, Option<&str>) {
        (self.rule_code.as_str(), self.property_name.as_deref())
    }
}
