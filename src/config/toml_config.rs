use crate::core::rules::RuleSet;
use crate::core::runner::OutputFormat;
use crate::core::Rule;
use crate::utils::error::{FizzBuzzError, Result};
use crate::utils::validation::{validate_positive_number, validate_unique, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub game: Option<GameSection>,
    pub rules: Option<Vec<Rule>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSection {
    pub limit: Option<i64>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FizzBuzzError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FizzBuzzError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable `VAR`.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FizzBuzzError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn limit(&self) -> Option<i64> {
        self.game.as_ref().and_then(|g| g.limit)
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.game.as_ref().and_then(|g| g.format)
    }

    /// The configured rule set, or `None` when the file does not define one.
    pub fn rule_set(&self) -> Result<Option<RuleSet>> {
        match &self.rules {
            Some(rules) => RuleSet::new(rules.iter().cloned()).map(Some),
            None => Ok(None),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit() {
            validate_positive_number("game.limit", limit, 1)?;
        }

        if let Some(rules) = &self.rules {
            RuleSet::new(rules.iter().cloned())?;
            validate_unique("rules.label", rules.iter().map(|r| r.label.as_str()))?;
        }

        Ok(())
    }
}
