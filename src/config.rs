use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConjugoError, Result};
use crate::lint::{Severity, ValidationConfig};

pub const PROJECT_CONFIG_FILE: &str = "conjugo.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validate: ValidateConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load defaults, then the global and project files (or only the
    /// explicit file when one is given), then environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("CONJUGO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("conjugo/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            ConjugoError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            ConjugoError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.validate {
            self.validate.merge(patch);
        }
        if let Some(patch) = patch.export {
            self.export.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        let rules = &mut self.validate.rules;
        if let Some(value) = env_bool("CONJUGO_STRICT") {
            rules.strict = value;
        }
        if let Some(value) = env_bool("CONJUGO_REQUIRE_AUX_ENDING") {
            rules.require_aux_ending = value;
        }
        if let Some(values) = env_list("CONJUGO_DISABLED_RULES") {
            rules.disabled_rules.extend(values);
        }
        if let Some(values) = env_list("CONJUGO_ENABLED_RULES") {
            rules.enabled_rules.extend(values);
        }
        if let Some(value) = env_string("CONJUGO_REPORT_SUFFIX") {
            if value.contains(['/', '\\']) {
                return Err(ConjugoError::Config(format!(
                    "invalid CONJUGO_REPORT_SUFFIX value {value}: must not contain a path separator"
                )));
            }
            self.validate.report_suffix = value;
        }

        if let Some(value) = env_string("CONJUGO_EXPORT_INPUT") {
            self.export.input = PathBuf::from(value);
        }
        if let Some(value) = env_string("CONJUGO_EXPORT_VERBS_OUTPUT") {
            self.export.verbs_output = Some(PathBuf::from(value));
        }
        if let Some(value) = env_string("CONJUGO_EXPORT_PUZZLES_OUTPUT") {
            self.export.puzzles_output = Some(PathBuf::from(value));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    #[serde(flatten)]
    pub rules: ValidationConfig,
    /// Appended to the input stem to name the report file
    pub report_suffix: String,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            rules: ValidationConfig::default(),
            report_suffix: "_report".to_string(),
        }
    }
}

impl ValidateConfig {
    fn merge(&mut self, patch: ValidatePatch) {
        if let Some(value) = patch.strict {
            self.rules.strict = value;
        }
        if let Some(value) = patch.require_aux_ending {
            self.rules.require_aux_ending = value;
        }
        if let Some(values) = patch.disabled_rules {
            self.rules.disabled_rules.extend(values);
        }
        if let Some(values) = patch.enabled_rules {
            self.rules.enabled_rules.extend(values);
        }
        if let Some(values) = patch.severity_overrides {
            self.rules.severity_overrides.extend(values);
        }
        if let Some(value) = patch.report_suffix {
            self.report_suffix = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub input: PathBuf,
    /// Defaults to `verbs_<stem>.csv` next to the input
    pub verbs_output: Option<PathBuf>,
    /// Defaults to `puzzles_<stem>.csv` next to the input
    pub puzzles_output: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/verbs/lire.json"),
            verbs_output: None,
            puzzles_output: None,
        }
    }
}

impl ExportConfig {
    fn merge(&mut self, patch: ExportPatch) {
        if let Some(value) = patch.input {
            self.input = value;
        }
        if let Some(value) = patch.verbs_output {
            self.verbs_output = Some(value);
        }
        if let Some(value) = patch.puzzles_output {
            self.puzzles_output = Some(value);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    validate: Option<ValidatePatch>,
    export: Option<ExportPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ValidatePatch {
    strict: Option<bool>,
    require_aux_ending: Option<bool>,
    disabled_rules: Option<HashSet<String>>,
    enabled_rules: Option<HashSet<String>>,
    severity_overrides: Option<HashMap<String, Severity>>,
    report_suffix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportPatch {
    input: Option<PathBuf>,
    verbs_output: Option<PathBuf>,
    puzzles_output: Option<PathBuf>,
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
}
