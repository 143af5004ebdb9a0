use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of classifying one positive integer in the classic game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    Number(i64),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Number(n) => write!(f, "{}", n),
            Output::Fizz => f.write_str("Fizz"),
            Output::Buzz => f.write_str("Buzz"),
            Output::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}

/// A single rule of the game: numbers divisible by `divisor` contribute `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub divisor: i64,
    pub label: String,
}

impl Rule {
    pub fn new(divisor: i64, label: impl Into<String>) -> Self {
        Self {
            divisor,
            label: label.into(),
        }
    }

    /// A zero divisor never applies, nor does a remainder that would overflow.
    pub fn applies(&self, n: i64) -> bool {
        n.checked_rem(self.divisor) == Some(0)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// One rendered row of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub n: i64,
    pub output: String,
}
