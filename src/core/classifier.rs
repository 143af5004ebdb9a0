use crate::core::{Classifier, Output};
use crate::utils::error::{FizzBuzzError, Result};

/// Classify `n` under the classic 3/5 rules.
///
/// Only positive integers are in the domain of the game; zero and negative
/// numbers are rejected with [`FizzBuzzError::InvalidInput`].
pub fn classify(n: i64) -> Result<Output> {
    if n < 1 {
        return Err(FizzBuzzError::invalid_input(n));
    }

    let output = match (n % 3 == 0, n % 5 == 0) {
        (true, true) => Output::FizzBuzz,
        (true, false) => Output::Fizz,
        (false, true) => Output::Buzz,
        (false, false) => Output::Number(n),
    };
    Ok(output)
}

/// The classic game as a [`Classifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

impl Classifier for Classic {
    fn render(&self, n: i64) -> Result<String> {
        classify(n).map(|output| output.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scenarios() {
        assert_eq!(classify(1).unwrap(), Output::Number(1));
        assert_eq!(classify(3).unwrap(), Output::Fizz);
        assert_eq!(classify(5).unwrap(), Output::Buzz);
        assert_eq!(classify(7).unwrap(), Output::Number(7));
        assert_eq!(classify(15).unwrap(), Output::FizzBuzz);
        assert_eq!(classify(30).unwrap(), Output::FizzBuzz);
    }

    #[test]
    fn test_classify_rejects_non_positive() {
        assert!(matches!(
            classify(0),
            Err(FizzBuzzError::InvalidInput { .. })
        ));
        assert!(matches!(
            classify(-15),
            Err(FizzBuzzError::InvalidInput { .. })
        ));
        assert!(matches!(
            classify(i64::MIN),
            Err(FizzBuzzError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_classify_upper_bound() {
        // i64::MAX = 2^63 - 1 is divisible by 7 but by neither 3 nor 5
        assert_eq!(classify(i64::MAX).unwrap(), Output::Number(i64::MAX));
    }

    #[test]
    fn test_classic_render() {
        assert_eq!(Classic.render(9).unwrap(), "Fizz");
        assert_eq!(Classic.render(11).unwrap(), "11");
        assert!(Classic.render(0).is_err());
    }
}
