use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tpv_core::{BeanNaming, RuleCode, Severity};
use tpv_validate::RuleSet;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub project: ProjectConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    pub id: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Checked when `tpv check` is given no paths. `~` is expanded.
    #[serde(default)]
    pub paths: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    #[serde(default)]
    pub disabled: Vec<String>,
    /// rule code -> "error" | "warning"
    #[serde(default)]
    pub severity: BTreeMap<String, String>,
}

/// Each list may be overridden on its own; missing ones keep the defaults.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamingConfig {
    pub getter_prefixes: Vec<String>,
    pub boolean_getter_prefixes: Vec<String>,
    pub setter_prefixes: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        let bean = BeanNaming::default();
        Self {
            getter_prefixes: bean.getter_prefixes,
            boolean_getter_prefixes: bean.boolean_getter_prefixes,
            setter_prefixes: bean.setter_prefixes,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub fail_on: FailOn,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other} (expected text|json)")),
        }
    }
}

/// Lowest severity that makes a run fail.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    #[default]
    Error,
    Warning,
    Never,
}

impl FailOn {
    pub fn fails(self, worst: Option<Severity>) -> bool {
        match (self, worst) {
            (FailOn::Never, _) | (_, None) => false,
            (FailOn::Warning, Some(_)) => true,
            (FailOn::Error, Some(s)) => s == Severity::Error,
        }
    }
}

impl FromStr for FailOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown fail_on value: {other} (expected error|warning|never)")),
        }
    }
}

impl Config {
    pub fn default_for_repo(project_id: &str) -> Self {
        Self {
            project: ProjectConfig { id: project_id.to_string() },
            input: InputConfig::default(),
            rules: RulesConfig::default(),
            naming: NamingConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&s).with_context(|| "parse tpv.toml")?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn config_path(root: &Path) -> PathBuf {
        root.join(".tpv").join("tpv.toml")
    }

    /// Standard rules minus the disabled ones, with severity overrides
    /// applied. Unknown codes or severities are configuration errors.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let disabled = self
            .rules
            .disabled
            .iter()
            .map(|c| parse_code(c))
            .collect::<Result<Vec<_>>>()?;

        let mut rules = RuleSet::standard().without(&disabled);
        for (code, severity) in &self.rules.severity {
            let code = parse_code(code)?;
            let severity = Severity::parse(severity)
                .ok_or_else(|| anyhow!("rules.severity.{code}: unknown severity `{severity}`"))?;
            rules = rules.with_severity(code, severity);
        }
        Ok(rules)
    }

    pub fn naming(&self) -> BeanNaming {
        BeanNaming {
            getter_prefixes: self.naming.getter_prefixes.clone(),
            boolean_getter_prefixes: self.naming.boolean_getter_prefixes.clone(),
            setter_prefixes: self.naming.setter_prefixes.clone(),
        }
    }

    pub fn input_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.input
            .paths
            .iter()
            .map(|p| root.join(shellexpand::tilde(p).as_ref()))
            .collect()
    }
}

fn parse_code(s: &str) -> Result<RuleCode> {
    RuleCode::parse(s).ok_or_else(|| anyhow!("unknown rule code `{s}`"))
}
