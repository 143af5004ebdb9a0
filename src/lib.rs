pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, GameSettings};
pub use crate::core::classifier::{classify, Classic};
pub use crate::core::rules::RuleSet;
pub use crate::core::runner::{OutputFormat, Runner};
pub use domain::model::{Line, Output, Rule};
pub use domain::ports::Classifier;
pub use utils::error::{FizzBuzzError, Result};
