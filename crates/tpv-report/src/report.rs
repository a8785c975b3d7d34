use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tpv_core::Severity;

use crate::emitter::DiagnosticRecord;

/// Records for one run plus counts and a fingerprint that only changes
/// when the findings do.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub errors: usize,
    pub warnings: usize,
    pub fingerprint: String,
    pub records: Vec<DiagnosticRecord>,
}

impl Report {
    pub fn new(records: Vec<DiagnosticRecord>) -> serde_json::Result<Self> {
        let errors = records.iter().filter(|r| r.severity == Severity::Error).count();
        let warnings = records.len() - errors;
        let fingerprint = fingerprint(&records)?;
        Ok(Self { errors, warnings, fingerprint, records })
    }

    pub fn is_clean(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest severity present, if any.
    pub fn max_severity(&self) -> Option<Severity> {
        self.records.iter().map(|r| r.severity).max()
    }
}

fn fingerprint(records: &[DiagnosticRecord]) -> serde_json::Result<String> {
    let v = sort_json(serde_json::to_value(records)?);
    let bytes = serde_json::to_vec(&v)?;
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Recursively sort object keys so the hash does not depend on field order.
fn sort_json(v: serde_json::Value) -> serde_json::Value {
    match v {
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            serde_json::Value::Object(entries.into_iter().map(|(k, child)| (k, sort_json(child))).collect())
        }
        serde_json::Value::Array(arr) => serde_json::Value::Array(arr.into_iter().map(sort_json).collect()),
        other => other,
    }
}
