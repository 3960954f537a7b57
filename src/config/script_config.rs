use crate::core::script::ScriptOp;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A roster script loaded from a TOML file: a header plus an ordered list of
/// mutation steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub script: ScriptInfo,
    pub steps: Vec<ScriptOp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    pub description: Option<String>,
}

impl ScriptConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ScriptParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values, leaving
    /// unknown variables in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("script.name", &self.script.name)?;
        for step in &self.steps {
            step.validate()?;
        }
        Ok(())
    }
}
