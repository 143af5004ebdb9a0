pub mod toml_config;

use crate::core::rules::RuleSet;
use crate::core::runner::{OutputFormat, DEFAULT_LIMIT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "fizzbuzz"))]
#[cfg_attr(feature = "cli", command(about = "Play FizzBuzz from 1 up to a limit"))]
pub struct CliConfig {
    /// Highest number to classify [default: 100]
    #[cfg_attr(feature = "cli", arg(short = 'n', long, allow_negative_numbers = true))]
    pub limit: Option<i64>,

    /// TOML file with a custom rule set
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<PathBuf>,

    /// Output format [default: text]
    #[cfg_attr(feature = "cli", arg(short, long, value_enum))]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,

    /// Emit logs as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,
}

/// Everything a run needs, after merging the config file with CLI overrides.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub limit: i64,
    pub format: OutputFormat,
    /// `None` plays the classic game.
    pub rules: Option<RuleSet>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            format: OutputFormat::default(),
            rules: None,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("limit", self.limit, 1)?;
        if let Some(rules) = &self.rules {
            rules.validate()?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Loads the config file if one was given and applies CLI overrides on top.
    pub fn resolve(&self) -> Result<GameSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading rule file {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let settings = GameSettings {
            limit: self.limit.or(file.limit()).unwrap_or(DEFAULT_LIMIT),
            format: self.format.or(file.format()).unwrap_or_default(),
            rules: file.rule_set()?,
        };
        settings.validate()?;
        Ok(settings)
    }
}
