use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tpv_core::{BeanNaming, Unit, Violation};
use tpv_report::{Report, ReportEmitter, TEMPLATES};
use tpv_validate::{check_unit, RuleSet};
use tracing::{debug, info};

use crate::{discover::collect_description_files, Config};

pub struct Runner {
    pub root: PathBuf,
    pub cfg: Config,
    pub rules: RuleSet,
    pub naming: BeanNaming,
    pub emitter: ReportEmitter,
}

#[derive(Debug)]
pub struct RunSummary {
    pub files: usize,
    pub units: usize,
    pub report: Report,
}

impl Runner {
    /// Open with `.tpv/tpv.toml` when it exists, defaults otherwise.
    pub fn open(root: PathBuf) -> Result<Self> {
        let cfg_path = Config::config_path(&root);
        let cfg = if cfg_path.exists() {
            Config::load_from(&cfg_path)?
        } else {
            Config::default_for_repo(project_id(&root))
        };
        Self::with_config(root, cfg)
    }

    pub fn with_config(root: PathBuf, cfg: Config) -> Result<Self> {
        let rules = cfg.rule_set()?;
        let emitter = ReportEmitter::new(TEMPLATES, &rules).context("build report emitter")?;
        let naming = cfg.naming();
        Ok(Self { root, cfg, rules, naming, emitter })
    }

    /// Write a default config unless one exists. Returns its path.
    pub fn init_repo(root: &Path) -> Result<PathBuf> {
        let cfg_path = Config::config_path(root);
        if !cfg_path.exists() {
            Config::default_for_repo(project_id(root)).save_to(&cfg_path)?;
        }
        Ok(cfg_path)
    }

    /// Load every description under `paths` (or the configured input paths
    /// when empty) and validate the units.
    pub fn check_paths(&self, paths: &[PathBuf]) -> Result<RunSummary> {
        let paths = if paths.is_empty() { self.cfg.input_paths(&self.root) } else { paths.to_vec() };
        let files = collect_description_files(&paths)?;

        let mut units = Vec::new();
        for file in &files {
            let loaded = tpv_spec::load_units(file)?;
            debug!(file = %file.display(), units = loaded.len(), "loaded descriptions");
            units.extend(loaded);
        }

        let report = self.check_units(&units)?;
        info!(
            files = files.len(),
            units = units.len(),
            errors = report.errors,
            warnings = report.warnings,
            "check complete"
        );
        Ok(RunSummary { files: files.len(), units: units.len(), report })
    }

    /// Units are independent, so they are validated in parallel; results
    /// keep input order.
    pub fn check_units(&self, units: &[Unit]) -> Result<Report> {
        let per_unit = units
            .par_iter()
            .map(|unit| check_unit(unit, &self.naming, &self.rules))
            .collect::<Result<Vec<Vec<Violation>>, _>>()?;

        let violations: Vec<Violation> = per_unit.into_iter().flatten().collect();
        let records = self.emitter.emit(&violations)?;
        Ok(Report::new(records)?)
    }
}

fn project_id(root: &Path) -> &str {
    root.file_name().and_then(|s| s.to_str()).unwrap_or("repo")
}
