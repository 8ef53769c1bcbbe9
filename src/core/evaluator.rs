use crate::core::{arithmetic, text};
use crate::domain::model::{
    Operation, Outcome, OverflowPolicy, DEFAULT_TRUNCATE_WIDTH, MAX_TRUNCATE_WIDTH,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};

/// Dispatches an [`Operation`] to the matching pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    policy: OverflowPolicy,
    truncate_width: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}

impl Evaluator {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self {
            policy,
            truncate_width: DEFAULT_TRUNCATE_WIDTH,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            policy: config.overflow_policy(),
            truncate_width: config.truncate_width(),
        }
    }

    pub fn with_truncate_width(mut self, width: usize) -> Self {
        self.truncate_width = width;
        self
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn evaluate(&self, operation: &Operation) -> Result<Outcome> {
        tracing::debug!(
            operation = operation.name(),
            policy = %self.policy,
            "Evaluating operation"
        );

        let outcome = match operation {
            Operation::Add { a, b } => {
                Outcome::Integer(arithmetic::add_with(*a, *b, self.policy)?)
            }
            Operation::Subtract { a, b } => {
                Outcome::Integer(arithmetic::subtract_with(*a, *b, self.policy)?)
            }
            Operation::Multiply { a, b } => {
                Outcome::Integer(arithmetic::multiply_with(*a, *b, self.policy)?)
            }
            Operation::Divide { a, b } => {
                Outcome::Integer(arithmetic::divide_with(*a, *b, self.policy)?)
            }
            Operation::Remainder { a, b } => Outcome::Integer(arithmetic::remainder(*a, *b)?),
            Operation::Factorial { n } => {
                Outcome::Unsigned(arithmetic::factorial_with(*n, self.policy)?)
            }
            Operation::Fibonacci { n } => Outcome::Unsigned(arithmetic::fibonacci(*n)?),
            Operation::Gcd { a, b } => Outcome::Unsigned(arithmetic::gcd(*a, *b)),
            Operation::IsPrime { n } => Outcome::Bool(arithmetic::is_prime(*n)),
            Operation::PrimeFactors { n } => Outcome::Factors(arithmetic::prime_factors(*n)),
            Operation::Reverse { text: input } => {
                Outcome::Text(text::reverse(input.as_str()).unwrap_or_default())
            }
            Operation::IsPalindrome { text: input } => {
                Outcome::Bool(text::is_palindrome(input.as_str()))
            }
            Operation::CountWords { text: input } => {
                Outcome::Count(text::count_words(input.as_str()))
            }
            Operation::Truncate { text: input, width } => {
                let width = match width {
                    Some(width) => check_width(*width)?,
                    None => self.truncate_width,
                };
                Outcome::Text(text::truncate(input.as_str(), width).unwrap_or_default())
            }
        };

        tracing::debug!(operation = operation.name(), result = %outcome, "Operation completed");
        Ok(outcome)
    }
}

/// Same bounds as `[text] truncate_width`.
fn check_width(width: usize) -> Result<usize> {
    if (1..=MAX_TRUNCATE_WIDTH).contains(&width) {
        return Ok(width);
    }
    Err(CalcError::invalid_argument(
        "truncate",
        format!("width must be between 1 and {}, got {}", MAX_TRUNCATE_WIDTH, width),
    ))
}
