use serde::{Deserialize, Serialize};
use std::fmt;

/// Default width used by `truncate` when none is given.
pub const DEFAULT_TRUNCATE_WIDTH: usize = 40;

/// Upper bound for any truncate width, from flags or configuration.
pub const MAX_TRUNCATE_WIDTH: usize = 10_000;

/// What to do when a fixed-width integer result is out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wrap around.
    Wrap,
    /// Clamp to the nearest representable bound.
    Saturate,
    /// Report `CalcError::Overflow`.
    #[default]
    Fail,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Saturate => "saturate",
            OverflowPolicy::Fail => "fail",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// A single utility call together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::Subcommand))]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    /// Add two integers
    Add {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        a: i64,
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        b: i64,
    },
    /// Subtract B from A
    Subtract {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        a: i64,
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        b: i64,
    },
    /// Multiply two integers
    Multiply {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        a: i64,
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        b: i64,
    },
    /// Divide A by B, truncating toward zero
    Divide {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        a: i64,
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        b: i64,
    },
    /// Remainder of truncating division (sign follows A)
    Remainder {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        a: i64,
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        b: i64,
    },
    /// N factorial
    Factorial {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        n: i64,
    },
    /// The Nth Fibonacci number, starting from F(0) = 0
    Fibonacci {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        n: i64,
    },
    /// Greatest common divisor of A and B
    Gcd {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        a: i64,
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        b: i64,
    },
    /// Check whether N is prime
    IsPrime {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        n: i64,
    },
    /// Prime factors of N in ascending order
    PrimeFactors {
        #[cfg_attr(feature = "cli", arg(allow_negative_numbers = true))]
        n: i64,
    },
    /// Reverse TEXT by user-perceived characters
    Reverse {
        #[cfg_attr(feature = "cli", arg(allow_hyphen_values = true))]
        text: String,
    },
    /// Check whether TEXT reads the same backwards, ignoring whitespace and case
    IsPalindrome {
        #[cfg_attr(feature = "cli", arg(allow_hyphen_values = true))]
        text: String,
    },
    /// Count whitespace-separated words in TEXT
    CountWords {
        #[cfg_attr(feature = "cli", arg(allow_hyphen_values = true))]
        text: String,
    },
    /// Shorten TEXT to WIDTH characters, ending with "..."
    Truncate {
        #[cfg_attr(feature = "cli", arg(allow_hyphen_values = true))]
        text: String,
        #[cfg_attr(feature = "cli", arg(short, long))]
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<usize>,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Subtract { .. } => "subtract",
            Operation::Multiply { .. } => "multiply",
            Operation::Divide { .. } => "divide",
            Operation::Remainder { .. } => "remainder",
            Operation::Factorial { .. } => "factorial",
            Operation::Fibonacci { .. } => "fibonacci",
            Operation::Gcd { .. } => "gcd",
            Operation::IsPrime { .. } => "is_prime",
            Operation::PrimeFactors { .. } => "prime_factors",
            Operation::Reverse { .. } => "reverse",
            Operation::IsPalindrome { .. } => "is_palindrome",
            Operation::CountWords { .. } => "count_words",
            Operation::Truncate { .. } => "truncate",
        }
    }
}

/// The value produced by a successful operation.
///
/// `Operation` always carries text, so absent input only exists at the library
/// level (`text::reverse(None)` and friends) and never reaches an `Outcome`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Integer(i64),
    Unsigned(u64),
    Bool(bool),
    Count(usize),
    Text(String),
    Factors(Vec<u64>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integer(v) => write!(f, "{}", v),
            Outcome::Unsigned(v) => write!(f, "{}", v),
            Outcome::Bool(v) => write!(f, "{}", v),
            Outcome::Count(v) => write!(f, "{}", v),
            Outcome::Text(s) => f.write_str(s),
            Outcome::Factors(factors) => {
                let joined: Vec<String> = factors.iter().map(|p| p.to_string()).collect();
                f.write_str(&joined.join(" "))
            }
        }
    }
}

/// An operation paired with its result, as printed by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    #[serde(flatten)]
    pub operation: Operation,
    pub policy: OverflowPolicy,
    pub result: Outcome,
}
