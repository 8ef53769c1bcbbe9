pub mod arithmetic;
pub mod evaluator;
pub mod text;

pub use crate::domain::model::{Operation, Outcome, OverflowPolicy};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
