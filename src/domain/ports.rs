use crate::domain::model::{OutputFormat, OverflowPolicy};

pub trait ConfigProvider: Send + Sync {
    fn overflow_policy(&self) -> OverflowPolicy;
    fn output_format(&self) -> OutputFormat;
    fn truncate_width(&self) -> usize;
}
