pub mod classifier;
pub mod rules;
pub mod runner;

pub use crate::domain::model::{Line, Output, Rule};
pub use crate::domain::ports::Classifier;
pub use crate::utils::error::Result;
