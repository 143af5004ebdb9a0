use crate::core::{Classifier, Rule};
use crate::utils::error::{FizzBuzzError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_single_line, Validate,
};

/// An ordered list of rules. The output for a number is the concatenation of
/// every applying rule's label in rule order, or the number itself when no
/// rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        let rule_set = Self {
            rules: rules.into_iter().collect(),
        };
        rule_set.validate()?;
        Ok(rule_set)
    }

    pub fn classic() -> Self {
        Self {
            rules: vec![Rule::new(3, "Fizz"), Rule::new(5, "Buzz")],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules applying to `n`, in rule order.
    pub fn matching(&self, n: i64) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |rule| rule.applies(n))
    }
}

impl Validate for RuleSet {
    fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(FizzBuzzError::ConfigError {
                message: "rule set must contain at least one rule".to_string(),
            });
        }
        for rule in &self.rules {
            validate_positive_number("rules.divisor", rule.divisor, 1)?;
            validate_non_empty_string("rules.label", &rule.label)?;
            validate_single_line("rules.label", &rule.label)?;
        }
        Ok(())
    }
}

impl Classifier for RuleSet {
    fn render(&self, n: i64) -> Result<String> {
        if n < 1 {
            return Err(FizzBuzzError::invalid_input(n));
        }

        let joined: String = self.matching(n).map(|rule| rule.label.as_str()).collect();
        if joined.is_empty() {
            Ok(n.to_string())
        } else {
            Ok(joined)
        }
    }
}
