pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::arithmetic::{
    add, add_with, divide, divide_with, factorial, factorial_with, fibonacci, gcd, is_prime,
    multiply, multiply_with, prime_factors, remainder, subtract, subtract_with,
};
pub use crate::core::evaluator::Evaluator;
pub use crate::core::text::{count_words, is_palindrome, reverse, truncate};
pub use crate::domain::model::{Evaluation, Operation, Outcome, OutputFormat, OverflowPolicy};
pub use crate::utils::error::{CalcError, Result};
