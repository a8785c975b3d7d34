use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tpv_core::{MalformedUnitError, RuleCode};

use crate::Runner;

/// `expected.yaml` next to a scenario's `unit.yaml`.
#[derive(Debug, Deserialize)]
pub struct ScenarioExpected {
    pub scenario_id: String,
    #[serde(default)]
    pub expect_codes: Vec<RuleCode>,
    /// Only `malformed` is recognised.
    #[serde(default)]
    pub expect_error: Option<String>,
}

#[derive(Debug)]
pub struct ScenarioResult {
    /// Rule codes in report order.
    pub codes: Vec<RuleCode>,
    pub malformed: Option<MalformedUnitError>,
}

pub fn load_expected(dir: &Path) -> Result<ScenarioExpected> {
    let p = dir.join("expected.yaml");
    let s = std::fs::read_to_string(&p).with_context(|| format!("read expected.yaml: {}", p.display()))?;
    let exp: ScenarioExpected = serde_yaml::from_str(&s).with_context(|| "parse expected.yaml")?;
    Ok(exp)
}

/// Check `unit.yaml` with the standard rules. A malformed description is
/// captured in the result; any other failure is returned as an error.
pub fn run_scenario(dir: &Path) -> Result<ScenarioResult> {
    let runner = Runner::with_config(dir.to_path_buf(), crate::Config::default_for_repo("scenario"))?;
    match runner.check_paths(&[dir.join("unit.yaml")]) {
        Ok(summary) => Ok(ScenarioResult {
            codes: summary.report.records.iter().map(|r| r.code).collect(),
            malformed: None,
        }),
        Err(err) => match err.chain().find_map(|e| e.downcast_ref::<MalformedUnitError>()) {
            Some(malformed) => Ok(ScenarioResult { codes: Vec::new(), malformed: Some(malformed.clone()) }),
            None => Err(err),
        },
    }
}

/// Scenario directories under `root`, sorted by name.
pub fn scenario_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root).with_context(|| format!("read {}", root.display()))? {
        let path = entry?.path();
        if path.join("expected.yaml").is_file() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
