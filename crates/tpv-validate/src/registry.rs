use tpv_core::{RuleCode, Severity};

use crate::{rule::Rule, rules::builtin_rules};

pub struct RuleEntry {
    pub rule: Box<dyn Rule>,
    pub severity: Severity,
}

/// Immutable table of rules the engine runs, built once at startup and
/// passed by reference. Builder methods consume and return a new table.
pub struct RuleSet {
    entries: Vec<RuleEntry>,
}

impl RuleSet {
    /// All built-in rules at their default severities.
    pub fn standard() -> Self {
        Self::from_rules(builtin_rules())
    }

    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        let entries = rules
            .into_iter()
            .map(|rule| {
                let severity = rule.default_severity();
                RuleEntry { rule, severity }
            })
            .collect();
        Self { entries }
    }

    /// Built-in rules restricted to `codes`.
    pub fn only(codes: &[RuleCode]) -> Self {
        Self::from_rules(builtin_rules().into_iter().filter(|r| codes.contains(&r.code())).collect())
    }

    pub fn without(mut self, codes: &[RuleCode]) -> Self {
        self.entries.retain(|e| !codes.contains(&e.rule.code()));
        self
    }

    pub fn with_severity(mut self, code: RuleCode, severity: Severity) -> Self {
        for e in self.entries.iter_mut().filter(|e| e.rule.code() == code) {
            e.severity = severity;
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = RuleCode> + '_ {
        self.entries.iter().map(|e| e.rule.code())
    }

    pub fn contains(&self, code: RuleCode) -> bool {
        self.codes().any(|c| c == code)
    }

    pub fn severity_of(&self, code: RuleCode) -> Option<Severity> {
        self.entries.iter().find(|e| e.rule.code() == code).map(|e| e.severity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
